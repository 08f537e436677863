//! # Activity Roster
//!
//! Incremental client-side synchronization for an activity signup board.
//!
//! The roster is fetched and rendered once. After that every signup or
//! unregister is a single API call followed by a targeted patch of the one
//! affected card: the availability counter, the participant rows and the
//! empty-state toggle. Nothing is re-fetched after startup.
//!
//! ## Modules
//!
//! - [`model`]: Activity snapshot types
//! - [`api`]: The activities API seam and its `reqwest` implementation
//! - [`surface`]: The render surface abstraction plus a headless implementation
//! - [`render`]: Card construction and in-place card patches
//! - [`participant`]: Removal control behavior for participant rows
//! - [`signup`]: Signup form submission
//! - [`notify`]: Transient success/error banner
//! - [`app`]: Startup wiring
//! - [`timer`]: Cancellable one-shot timers
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_roster::*;
//! use std::rc::Rc;
//!
//! # async fn run() -> Result<(), ClientError> {
//! let surface = Rc::new(MemorySurface::new());
//! let shell = Shell {
//!     roster: surface.create("div", ""),
//!     select: surface.create("select", ""),
//!     form: surface.create("form", ""),
//!     banner: surface.create("div", "hidden"),
//! };
//! let config = ClientConfig::default();
//! let api = Rc::new(HttpActivityApi::new("http://localhost:8000"));
//! let app = AppController::new(surface, shell, api, Rc::new(ManualTimer::new()), &config);
//!
//! app.load().await?;
//! app.submit("Chess Club", "new@mergington.edu").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod participant;
pub mod render;
pub mod signup;
pub mod surface;
pub mod timer;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ActivityApi, Confirmation, HttpActivityApi};
pub use app::{AppController, Shell, LOAD_FAILED};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, ClientResult};
pub use model::{Activity, Roster};
pub use notify::{NoticeKind, Notification, NotificationBanner};
pub use participant::ParticipantRowController;
pub use render::{ActivityCardRenderer, CardHandle, CardIndex, Region, RenderedCard, RowHandle};
pub use signup::SignupController;
pub use surface::{ClickHandler, MemorySurface, NodeId, RenderSurface};
pub use timer::{ManualTimer, Timer, TimerHandle};
