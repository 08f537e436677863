//! Notification Banner
//!
//! One process-wide success/error message that hides itself after a delay.
//! The banner owns a single timer handle; showing a new message drops (and
//! so cancels) the previous hide timer.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::surface::RenderSurface;
use crate::timer::{Timer, TimerHandle};

/// Default time a notification stays visible
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Class applied to the banner node
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Current banner state
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub text: String,
    pub kind: NoticeKind,
    pub visible: bool,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: NoticeKind::Success,
            visible: false,
        }
    }
}

/// Transient message region
pub struct NotificationBanner<S: RenderSurface> {
    surface: Rc<S>,
    node: S::Node,
    timer: Rc<dyn Timer>,
    timeout: Duration,
    state: Rc<RefCell<Notification>>,
    hide_timer: RefCell<Option<TimerHandle>>,
}

impl<S: RenderSurface + 'static> NotificationBanner<S> {
    pub fn new(surface: Rc<S>, node: S::Node, timer: Rc<dyn Timer>, timeout: Duration) -> Self {
        Self {
            surface,
            node,
            timer,
            timeout,
            state: Rc::new(RefCell::new(Notification::default())),
            hide_timer: RefCell::new(None),
        }
    }

    /// Set content, make visible and restart the hide timer
    pub fn show(&self, text: &str, kind: NoticeKind) {
        tracing::debug!(kind = kind.class(), text, "notification");

        self.surface.set_text(&self.node, text);
        self.surface.set_class(&self.node, kind.class());
        self.surface.set_hidden(&self.node, false);
        *self.state.borrow_mut() = Notification {
            text: text.to_string(),
            kind,
            visible: true,
        };

        let surface = Rc::clone(&self.surface);
        let node = self.node.clone();
        let state = Rc::clone(&self.state);
        let handle = self.timer.schedule(
            self.timeout,
            Box::new(move || {
                surface.set_hidden(&node, true);
                state.borrow_mut().visible = false;
            }),
        );

        // dropping the previous handle cancels its timer
        drop(self.hide_timer.replace(Some(handle)));
    }

    pub fn success(&self, text: &str) {
        self.show(text, NoticeKind::Success);
    }

    pub fn error(&self, text: &str) {
        self.show(text, NoticeKind::Error);
    }

    /// Hide immediately
    pub fn hide(&self) {
        drop(self.hide_timer.take());
        self.surface.set_hidden(&self.node, true);
        self.state.borrow_mut().visible = false;
    }

    pub fn current(&self) -> Notification {
        self.state.borrow().clone()
    }
}
