//! App Controller
//!
//! Owns the page shell and wires the components. Startup is the only full
//! fetch-and-render pass; afterwards mutations flow through the signup and
//! row controllers, which patch single cards.

use std::rc::Rc;

use crate::api::ActivityApi;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::notify::NotificationBanner;
use crate::participant::ParticipantRowController;
use crate::render::{ActivityCardRenderer, CardIndex};
use crate::signup::SignupController;
use crate::surface::RenderSurface;
use crate::timer::Timer;

/// Static message shown in place of the roster when the initial fetch fails
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// Fixed page regions the client renders into
#[derive(Clone, Debug)]
pub struct Shell<N> {
    /// Container for activity cards
    pub roster: N,
    /// Activity selection control of the signup form
    pub select: N,
    /// The signup form
    pub form: N,
    /// Notification region
    pub banner: N,
}

/// Root of the client: startup rendering plus the user entry points
pub struct AppController<S: RenderSurface> {
    surface: Rc<S>,
    roster: S::Node,
    api: Rc<dyn ActivityApi>,
    renderer: Rc<ActivityCardRenderer<S>>,
    rows: Rc<ParticipantRowController<S>>,
    signup: SignupController<S>,
    banner: Rc<NotificationBanner<S>>,
    cards: Rc<CardIndex<S::Node>>,
}

impl<S: RenderSurface + 'static> AppController<S> {
    pub fn new(
        surface: Rc<S>,
        shell: Shell<S::Node>,
        api: Rc<dyn ActivityApi>,
        timer: Rc<dyn Timer>,
        config: &ClientConfig,
    ) -> Self {
        let renderer = Rc::new(ActivityCardRenderer::new(Rc::clone(&surface), shell.select));
        let banner = Rc::new(NotificationBanner::new(
            Rc::clone(&surface),
            shell.banner,
            timer,
            config.notification_timeout(),
        ));
        let rows = Rc::new(ParticipantRowController::new(
            Rc::clone(&api),
            Rc::clone(&renderer),
            Rc::clone(&banner),
        ));
        let cards = Rc::new(CardIndex::new());
        let signup = SignupController::new(
            Rc::clone(&api),
            Rc::clone(&renderer),
            Rc::clone(&rows),
            Rc::clone(&banner),
            Rc::clone(&cards),
            shell.form,
        );

        Self {
            surface,
            roster: shell.roster,
            api,
            renderer,
            rows,
            signup,
            banner,
            cards,
        }
    }

    /// Fetch the roster and render every card.
    ///
    /// On failure the roster area holds only [`LOAD_FAILED`] and the
    /// selection control is not populated. Returns the number of cards.
    pub async fn load(&self) -> ClientResult<usize> {
        match self.api.fetch_all().await {
            Ok(roster) => {
                self.surface.clear(&self.roster);
                self.renderer.reset_select();
                self.cards.clear();

                for activity in &roster {
                    let rendered = self.renderer.render(activity);
                    self.surface.append(&self.roster, rendered.card.root());
                    for row in rendered.rows {
                        self.rows.wire(&rendered.card, row);
                    }
                    self.cards.insert(rendered.card);
                }

                tracing::info!(activities = self.cards.len(), "Roster rendered");
                Ok(roster.len())
            }
            Err(err) => {
                tracing::error!(status = ?err.status(), error = %err, "Error fetching activities");
                self.surface.clear(&self.roster);
                let message = self.surface.create("p", "");
                self.surface.set_text(&message, LOAD_FAILED);
                self.surface.append(&self.roster, &message);
                Err(err)
            }
        }
    }

    /// Signup form entry point
    pub async fn submit(&self, activity: &str, email: &str) -> ClientResult<()> {
        self.signup.on_submit(activity, email).await
    }

    pub fn cards(&self) -> &CardIndex<S::Node> {
        &self.cards
    }

    pub fn banner(&self) -> &NotificationBanner<S> {
        &self.banner
    }
}
