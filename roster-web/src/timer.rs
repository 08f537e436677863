//! Browser timer backed by `gloo_timers::callback::Timeout`.

use activity_roster::{Timer, TimerHandle};
use gloo_timers::callback::Timeout;
use std::time::Duration;

/// `setTimeout`-based [`Timer`]; dropping the handle clears the timeout
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, callback);
        TimerHandle::new(move || drop(timeout))
    }
}
