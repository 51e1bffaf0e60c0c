//! One-shot splash overlay timer.
//!
//! The overlay is showing from the moment the timer starts until the
//! configured duration elapses, then `on_dismiss` runs exactly once.
//! Cancelling (or dropping) first leaves the overlay state alone and
//! guarantees the hook never runs.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::MotionError;
use crate::scheduler::{Scheduler, TimerHandle};

type DismissHook = Box<dyn FnOnce()>;

pub struct SplashTimer<S: Scheduler + 'static> {
    inner: Rc<SplashState<S>>,
}

struct SplashState<S: Scheduler + 'static> {
    scheduler: S,
    showing: Cell<bool>,
    pending: Cell<Option<TimerHandle>>,
    on_dismiss: RefCell<Option<DismissHook>>,
}

impl<S: Scheduler + 'static> SplashTimer<S> {
    /// Show the splash and schedule its dismissal after `duration_ms`.
    pub fn start(scheduler: S, duration_ms: u32, on_dismiss: impl FnOnce() + 'static) -> Result<Self, MotionError> {
        if duration_ms == 0 {
            return Err(MotionError::ZeroInterval("splash"));
        }
        let inner = Rc::new(SplashState {
            scheduler,
            showing: Cell::new(true),
            pending: Cell::new(None),
            on_dismiss: RefCell::new(Some(Box::new(on_dismiss))),
        });
        let weak = Rc::downgrade(&inner);
        let handle = inner.scheduler.schedule_after(
            duration_ms,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.dismiss();
                }
            }),
        );
        inner.pending.set(Some(handle));
        Ok(Self { inner })
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.inner.showing.get()
    }

    /// Cancel the pending dismissal. Idempotent.
    pub fn cancel(&self) {
        if let Some(handle) = self.inner.pending.take() {
            self.inner.scheduler.cancel(handle);
        }
        self.inner.on_dismiss.borrow_mut().take();
    }
}

impl<S: Scheduler + 'static> Drop for SplashTimer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<S: Scheduler + 'static> SplashState<S> {
    fn dismiss(&self) {
        self.pending.set(None);
        let hook = self.on_dismiss.borrow_mut().take();
        let Some(hook) = hook else {
            return;
        };
        self.showing.set(false);
        log::debug!("splash dismissed");
        hook();
    }
}
