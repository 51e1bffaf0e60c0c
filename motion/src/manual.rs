//! Synchronous fake [`ViewportObserver`] for tests and non-browser builds.
//!
//! Targets are plain [`NodeId`] numbers. [`ManualObserver::deliver`]
//! fabricates an intersection ratio for one target and invokes every live
//! callback registered for it, returning how many ran so tests can assert
//! that a finished observation is never called again.

#[cfg(test)]
#[path = "manual_test.rs"]
mod manual_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::observer::{IntersectionCallback, ObservationId, Threshold, ViewportObserver};

/// Identifier standing in for a DOM element.
pub type NodeId = u32;

type SharedCallback = Rc<RefCell<IntersectionCallback>>;

/// Cloneable handle to a shared fake observer.
#[derive(Clone, Default)]
pub struct ManualObserver {
    inner: Rc<RefCell<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
    observe_calls: usize,
    unobserve_calls: usize,
}

struct Entry {
    target: NodeId,
    threshold: Threshold,
    callback: SharedCallback,
}

impl ManualObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `ratio` for `target`. Returns the number of callbacks invoked.
    pub fn deliver(&self, target: NodeId, ratio: f64) -> usize {
        let callbacks: Vec<(u64, SharedCallback)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .filter(|(_, entry)| entry.target == target)
            .map(|(id, entry)| (*id, Rc::clone(&entry.callback)))
            .collect();

        let mut invoked = 0;
        for (id, callback) in callbacks {
            // An earlier callback in this delivery may have cancelled this one.
            if !self.inner.borrow().entries.contains_key(&id) {
                continue;
            }
            let mut callback = callback.borrow_mut();
            (*callback)(ratio);
            invoked += 1;
        }
        invoked
    }

    /// Whether any live observation targets `target`.
    #[must_use]
    pub fn is_observing(&self, target: NodeId) -> bool {
        self.inner.borrow().entries.values().any(|entry| entry.target == target)
    }

    /// Threshold registered for `target`, if it is being observed.
    #[must_use]
    pub fn threshold_for(&self, target: NodeId) -> Option<Threshold> {
        self.inner
            .borrow()
            .entries
            .values()
            .find(|entry| entry.target == target)
            .map(|entry| entry.threshold)
    }

    /// Number of live observations.
    #[must_use]
    pub fn observing_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Total `observe` calls made so far.
    #[must_use]
    pub fn observe_calls(&self) -> usize {
        self.inner.borrow().observe_calls
    }

    /// Total `unobserve` calls that actually removed an observation.
    #[must_use]
    pub fn unobserve_calls(&self) -> usize {
        self.inner.borrow().unobserve_calls
    }
}

impl ViewportObserver for ManualObserver {
    type Target = NodeId;

    fn observe(&self, target: &NodeId, threshold: Threshold, callback: IntersectionCallback) -> ObservationId {
        let mut state = self.inner.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.observe_calls += 1;
        state.entries.insert(
            id,
            Entry { target: *target, threshold, callback: Rc::new(RefCell::new(callback)) },
        );
        ObservationId::new(id)
    }

    fn unobserve(&self, id: ObservationId) {
        let removed = {
            let mut state = self.inner.borrow_mut();
            let removed = state.entries.remove(&id.id());
            if removed.is_some() {
                state.unobserve_calls += 1;
            }
            removed
        };
        // The callback may own a tracker that unobserves on drop.
        drop(removed);
    }
}
