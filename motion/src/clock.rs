//! Deterministic virtual clock.
//!
//! Time only moves when [`VirtualClock::advance`] or
//! [`VirtualClock::fire_next`] is called. Tasks due within the advanced
//! window run in due-time order (ties in scheduling order), including tasks
//! that earlier tasks scheduled inside the same window.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::scheduler::{Scheduler, Task, TimerHandle};

/// Cloneable handle to a shared virtual timeline.
#[derive(Clone, Default)]
pub struct VirtualClock {
    inner: Rc<RefCell<ClockState>>,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: u64,
    queue: BTreeMap<(u64, u64), Task>,
    due_by_id: HashMap<u64, u64>,
}

impl ClockState {
    fn pop_due(&mut self, limit_ms: u64) -> Option<(u64, Task)> {
        let (&(due, id), _) = self.queue.first_key_value()?;
        if due > limit_ms {
            return None;
        }
        let task = self.queue.remove(&(due, id))?;
        self.due_by_id.remove(&id);
        Some((due, task))
    }
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Move time forward by `ms`, running every task that falls due.
    ///
    /// Returns the number of tasks that ran.
    pub fn advance(&self, ms: u64) -> usize {
        let limit = self.now_ms().saturating_add(ms);
        let mut ran = 0;
        loop {
            // The borrow must end before the task runs: tasks reschedule.
            let next = self.inner.borrow_mut().pop_due(limit);
            let Some((due, task)) = next else {
                break;
            };
            self.inner.borrow_mut().now_ms = due;
            task();
            ran += 1;
        }
        self.inner.borrow_mut().now_ms = limit;
        ran
    }

    /// Jump to the earliest pending task and run only that task.
    ///
    /// Returns how far time moved, or `None` when nothing is pending.
    pub fn fire_next(&self) -> Option<u64> {
        let before = self.now_ms();
        let next = self.inner.borrow_mut().pop_due(u64::MAX);
        let (due, task) = next?;
        self.inner.borrow_mut().now_ms = due;
        task();
        Some(due - before)
    }
}

impl Scheduler for VirtualClock {
    fn schedule_after(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let mut state = self.inner.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now_ms.saturating_add(u64::from(delay_ms));
        state.queue.insert((due, id), task);
        state.due_by_id.insert(id, due);
        TimerHandle::new(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let removed = {
            let mut state = self.inner.borrow_mut();
            let due = state.due_by_id.remove(&handle.id());
            due.and_then(|due| state.queue.remove(&(due, handle.id())))
        };
        // Dropping the task can cancel other timers on this clock.
        drop(removed);
    }
}
