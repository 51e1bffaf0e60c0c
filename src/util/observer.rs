//! Browser viewport observation backing the motion [`ViewportObserver`]
//! capability.
//!
//! ARCHITECTURE
//! ============
//! Every observation gets its own `IntersectionObserver` configured with the
//! tracker's threshold. The JS callback forwards the ratio of intersecting
//! entries only; an element sitting outside the viewport never reports a
//! ratio, so a zero threshold still means "on screen".
//!
//! Unobserving disconnects immediately. The JS closure itself is released on
//! the next executor turn, because unobserve is usually called from inside
//! that very closure and a closure must not be freed while it runs.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

/// Ratio to forward for one intersection entry, if any.
pub fn entry_ratio(is_intersecting: bool, ratio: f64) -> Option<f64> {
    (is_intersecting && ratio.is_finite()).then(|| ratio.clamp(0.0, 1.0))
}

#[cfg(feature = "csr")]
pub use browser::BrowserObserver;

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use motion::observer::{IntersectionCallback, ObservationId, Threshold, ViewportObserver};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::entry_ratio;

    type EntriesHandler = Closure<dyn FnMut(js_sys::Array)>;

    #[derive(Clone, Default)]
    pub struct BrowserObserver {
        table: Rc<RefCell<ObservationTable>>,
    }

    #[derive(Default)]
    struct ObservationTable {
        next_id: u64,
        live: HashMap<u64, Observation>,
    }

    struct Observation {
        observer: web_sys::IntersectionObserver,
        _handler: EntriesHandler,
    }

    impl ViewportObserver for BrowserObserver {
        type Target = web_sys::Element;

        fn observe(
            &self,
            target: &web_sys::Element,
            threshold: Threshold,
            mut callback: IntersectionCallback,
        ) -> ObservationId {
            let id = {
                let mut table = self.table.borrow_mut();
                table.next_id += 1;
                table.next_id
            };

            let handler: EntriesHandler = Closure::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if let Some(ratio) = entry_ratio(entry.is_intersecting(), entry.intersection_ratio()) {
                        callback(ratio);
                    }
                }
            });

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold.value()));
            match web_sys::IntersectionObserver::new_with_options(handler.as_ref().unchecked_ref(), &options) {
                Ok(observer) => {
                    observer.observe(target);
                    self.table.borrow_mut().live.insert(id, Observation { observer, _handler: handler });
                }
                Err(err) => log::warn!("observer: IntersectionObserver unavailable: {err:?}"),
            }
            ObservationId::new(id)
        }

        fn unobserve(&self, id: ObservationId) {
            let removed = self.table.borrow_mut().live.remove(&id.id());
            if let Some(observation) = removed {
                observation.observer.disconnect();
                leptos::task::spawn_local(async move {
                    drop(observation);
                });
            }
        }
    }
}
