//! Browser timer service backing the motion [`Scheduler`] capability.
//!
//! Each scheduled task runs on the Leptos local executor after a
//! `gloo_timers` sleep. Cancellation removes the timer id from the live
//! table; a woken task whose id is gone returns without running. The table
//! is shared by clones, so one scheduler can serve a whole component.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use motion::scheduler::{Scheduler, Task, TimerHandle};

#[derive(Clone, Default)]
pub struct BrowserScheduler {
    table: Rc<RefCell<TimerTable>>,
}

#[derive(Default)]
struct TimerTable {
    next_id: u64,
    live: HashSet<u64>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that are scheduled and not yet fired or cancelled.
    pub fn live_count(&self) -> usize {
        self.table.borrow().live.len()
    }

    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.table.borrow().live.contains(&handle.id())
    }

    fn register(&self) -> u64 {
        let mut table = self.table.borrow_mut();
        table.next_id += 1;
        let id = table.next_id;
        table.live.insert(id);
        id
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule_after(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let id = self.register();

        #[cfg(feature = "csr")]
        {
            let table = Rc::downgrade(&self.table);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                let Some(table) = table.upgrade() else {
                    return;
                };
                let live = table.borrow_mut().live.remove(&id);
                if live {
                    task();
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("scheduler: no browser; timer {id} ({delay_ms}ms) will never fire");
            drop(task);
        }

        TimerHandle::new(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.table.borrow_mut().live.remove(&handle.id());
    }
}
