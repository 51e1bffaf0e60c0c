//! Fade-in wrapper driven by a one-shot visibility tracker.
//!
//! ARCHITECTURE
//! ============
//! Each `<Reveal>` owns one `VisibilityTracker` backed by the browser
//! observer. A reactive effect on the node reference attaches the tracker
//! once the element exists; the tracker flips a local signal on first sight
//! and drops its observation. Unmounting releases the observation too.
//!
//! The block renders hidden until then. The transition itself is CSS; this
//! component only picks the class and the delay offset.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;
use motion::reveal::{RevealState, transition_delay_style};

/// Class list for a reveal block, with caller classes appended.
pub fn reveal_class(visible: bool, extra: &str) -> String {
    let base = RevealState::from_visible(visible).class();
    if extra.trim().is_empty() {
        base.to_owned()
    } else {
        format!("{base} {}", extra.trim())
    }
}

/// Wraps `children` and reveals them the first time they scroll into view.
///
/// `delay` (ms) offsets the transition so sibling blocks cascade.
#[component]
pub fn Reveal(
    #[prop(optional)] delay: u32,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    track_visibility(node, visible);

    let class = move || reveal_class(visible.get(), &class);

    view! {
        <div node_ref=node class=class style=transition_delay_style(delay)>
            {children()}
        </div>
    }
}

#[cfg(feature = "csr")]
fn track_visibility(node: NodeRef<leptos::html::Div>, visible: RwSignal<bool>) {
    use motion::observer::Threshold;
    use motion::visibility::VisibilityTracker;

    use crate::util::observer::BrowserObserver;

    let threshold = use_context::<Threshold>().unwrap_or_default();
    let tracker = VisibilityTracker::new(BrowserObserver::default(), threshold);
    tracker.on_visible(move || visible.set(true));
    let tracker = StoredValue::new_local(tracker);

    Effect::new(move || {
        if let Some(element) = node.get() {
            tracker.with_value(|t| t.attach(Some(element.as_ref())));
        }
    });
    on_cleanup(move || {
        tracker.try_with_value(VisibilityTracker::detach);
    });
}
