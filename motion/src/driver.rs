//! Scheduler-driven runner for the [`Typewriter`] state machine.
//!
//! Exactly one step is pending at any moment: each fired step mutates the
//! machine, reports the new text, then schedules the next step before
//! returning. Steps never chain synchronously, so even a phrase list full of
//! empty strings cannot recurse.
//!
//! Teardown is [`TypewriterDriver::cancel`] (also run on `Drop`). It cancels
//! the pending timer and clears the running flag; the flag is the guard for
//! schedulers whose timers may still fire after cancellation.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scheduler::{Scheduler, TimerHandle};
use crate::typewriter::{Phase, Typewriter};

type TextSink = Box<dyn Fn(&str)>;

/// Owns a running typewriter and its single pending timer.
pub struct TypewriterDriver<S: Scheduler + 'static> {
    inner: Rc<DriverState<S>>,
}

struct DriverState<S: Scheduler + 'static> {
    scheduler: S,
    machine: RefCell<Typewriter>,
    pending: Cell<Option<TimerHandle>>,
    running: Cell<bool>,
    on_change: TextSink,
}

impl<S: Scheduler + 'static> TypewriterDriver<S> {
    /// Start animating. The first step runs after the typing interval.
    ///
    /// `on_change` receives the displayed text after every step that changed it.
    pub fn start(scheduler: S, machine: Typewriter, on_change: impl Fn(&str) + 'static) -> Self {
        let first_delay = machine.first_delay_ms();
        let inner = Rc::new(DriverState {
            scheduler,
            machine: RefCell::new(machine),
            pending: Cell::new(None),
            running: Cell::new(true),
            on_change: Box::new(on_change),
        });
        DriverState::schedule(&inner, first_delay);
        log::debug!("typewriter started");
        Self { inner }
    }

    /// Text currently displayed.
    #[must_use]
    pub fn text(&self) -> String {
        self.inner.machine.borrow().text().to_owned()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.machine.borrow().phase()
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.inner.machine.borrow().phrase_index()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Whether a step is currently scheduled.
    #[must_use]
    pub fn has_pending_step(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    /// Stop animating and cancel the pending step. Idempotent.
    pub fn cancel(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        if let Some(handle) = self.inner.pending.take() {
            self.inner.scheduler.cancel(handle);
        }
        log::debug!("typewriter cancelled");
    }
}

impl<S: Scheduler + 'static> Drop for TypewriterDriver<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<S: Scheduler + 'static> DriverState<S> {
    fn schedule(this: &Rc<Self>, delay_ms: u32) {
        let weak = Rc::downgrade(this);
        let handle = this.scheduler.schedule_after(
            delay_ms,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    Self::step(&state);
                }
            }),
        );
        this.pending.set(Some(handle));
    }

    fn step(this: &Rc<Self>) {
        this.pending.set(None);
        if !this.running.get() {
            return;
        }

        let (tick, text) = {
            let mut machine = this.machine.borrow_mut();
            let tick = machine.tick();
            (tick, machine.text().to_owned())
        };
        if tick.changed {
            (this.on_change)(&text);
        }

        // `on_change` may have cancelled us.
        if this.running.get() {
            Self::schedule(this, tick.delay_ms);
        }
    }
}
