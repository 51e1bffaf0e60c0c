//! One-shot visibility tracking for reveal-on-scroll blocks.
//!
//! A [`VisibilityTracker`] watches a single target through an injected
//! [`ViewportObserver`]. The first intersection at or above the threshold
//! flips `is_visible` to `true`, cancels the observation in the same call,
//! and runs the `on_visible` hook. Nothing can flip it back.
//!
//! Observer callbacks hold only a `Weak` reference to the tracker state, so a
//! tracker dropped before it ever became visible is released cleanly; `Drop`
//! also cancels the observation.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::observer::{ObservationId, Threshold, ViewportObserver};

type VisibleHook = Box<dyn FnOnce()>;

/// Tracks the first time one target enters the viewport.
pub struct VisibilityTracker<O: ViewportObserver + 'static> {
    inner: Rc<TrackerState<O>>,
}

struct TrackerState<O: ViewportObserver + 'static> {
    observer: O,
    threshold: Threshold,
    visible: Cell<bool>,
    subscription: Cell<Option<ObservationId>>,
    on_visible: RefCell<Option<VisibleHook>>,
}

impl<O: ViewportObserver + 'static> VisibilityTracker<O> {
    #[must_use]
    pub fn new(observer: O, threshold: Threshold) -> Self {
        Self {
            inner: Rc::new(TrackerState {
                observer,
                threshold,
                visible: Cell::new(false),
                subscription: Cell::new(None),
                on_visible: RefCell::new(None),
            }),
        }
    }

    /// Register the hook run on the false→true transition.
    ///
    /// Replaces any earlier hook. If the target is already visible the hook
    /// runs immediately.
    pub fn on_visible(&self, hook: impl FnOnce() + 'static) {
        if self.inner.visible.get() {
            hook();
            return;
        }
        *self.inner.on_visible.borrow_mut() = Some(Box::new(hook));
    }

    /// Begin observing `target`.
    ///
    /// A missing target is skipped without error; call again once the element
    /// is attached. Calls after the tracker is already observing or visible
    /// are no-ops.
    pub fn attach(&self, target: Option<&O::Target>) {
        if self.inner.visible.get() || self.is_observing() {
            return;
        }
        let Some(target) = target else {
            log::trace!("visibility target not attached yet; deferring observation");
            return;
        };

        let weak = Rc::downgrade(&self.inner);
        let id = self.inner.observer.observe(
            target,
            self.inner.threshold,
            Box::new(move |ratio| {
                if let Some(state) = weak.upgrade() {
                    state.intersect(ratio);
                }
            }),
        );

        if self.inner.visible.get() {
            // The observer reported synchronously from inside `observe`.
            self.inner.observer.unobserve(id);
        } else {
            self.inner.subscription.set(Some(id));
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.visible.get()
    }

    /// Whether an observation is currently registered.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.inner.subscription.get().is_some()
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.inner.threshold
    }

    /// Cancel the observation, if any. Safe to call repeatedly.
    pub fn detach(&self) {
        if let Some(id) = self.inner.subscription.take() {
            self.inner.observer.unobserve(id);
            log::trace!("visibility observation {} released", id.id());
        }
    }
}

impl<O: ViewportObserver + 'static> Drop for VisibilityTracker<O> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<O: ViewportObserver + 'static> TrackerState<O> {
    fn intersect(&self, ratio: f64) {
        if self.visible.get() || !self.threshold.is_met_by(ratio) {
            return;
        }
        self.visible.set(true);
        if let Some(id) = self.subscription.take() {
            self.observer.unobserve(id);
        }
        log::debug!("target became visible at ratio {ratio:.2}");

        let hook = self.on_visible.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
    }
}
