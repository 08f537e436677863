//! One-shot timers with owned, cancel-on-drop handles.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Schedules a callback to run once after a delay
pub trait Timer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owned handle to a scheduled callback. Dropping it cancels the callback
/// if it has not fired yet.
#[must_use = "dropping a TimerHandle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    /// Wrap the platform's cancellation routine
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

struct Scheduled {
    id: u64,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Deterministic timer driven by [`ManualTimer::advance`]
#[derive(Default)]
pub struct ManualTimer {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    pending: Rc<RefCell<Vec<Scheduled>>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Callbacks scheduled and neither fired nor cancelled
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward, firing due callbacks in due order
    pub fn advance(&self, by: Duration) {
        let now = self.now.get() + by;
        self.now.set(now);

        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let earliest = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due <= now)
                    .min_by_key(|(_, s)| (s.due, s.id))
                    .map(|(i, _)| i);
                let next = earliest.map(|i| pending.remove(i));
                next
            };
            match next {
                Some(scheduled) => (scheduled.callback)(),
                None => break,
            }
        }
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.pending.borrow_mut().push(Scheduled {
            id,
            due: self.now.get() + delay,
            callback,
        });

        let pending: Weak<RefCell<Vec<Scheduled>>> = Rc::downgrade(&self.pending);
        TimerHandle::new(move || {
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().retain(|s| s.id != id);
            }
        })
    }
}
