//! Timer capability used by every time-driven piece of the motion core.
//!
//! Components never call a platform timer themselves. They receive a
//! [`Scheduler`] and ask it to run a task after a delay; the browser build
//! plugs in real timeouts and tests plug in [`crate::clock::VirtualClock`].

/// Deferred unit of work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce()>;

/// Opaque handle identifying one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Single-threaded, cooperative timer service.
pub trait Scheduler {
    /// Run `task` once, `delay_ms` milliseconds from now.
    ///
    /// Must not run the task synchronously inside this call.
    fn schedule_after(&self, delay_ms: u32, task: Task) -> TimerHandle;

    /// Cancel a pending task.
    ///
    /// Cancelling a task that already ran, or was already cancelled, is a no-op.
    fn cancel(&self, handle: TimerHandle);
}
