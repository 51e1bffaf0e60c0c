//! Hero typewriter: the motion state machine rendered into a signal.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use leptos::prelude::*;
use motion::typewriter::TypewriterConfig;

/// Screen-reader label covering every phrase, since the visible text is
/// always a fragment.
pub fn phrases_label(config: &TypewriterConfig) -> String {
    config
        .phrases
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cycles through `config.phrases`, typing and deleting one character per
/// step. Stops when the component unmounts.
#[component]
pub fn TypewriterText(config: TypewriterConfig) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let label = phrases_label(&config);

    #[cfg(feature = "csr")]
    start_cycling(config, text);
    #[cfg(not(feature = "csr"))]
    drop(config);

    view! {
        <span class="typewriter" aria-label=label>
            <span class="typewriter__text" aria-hidden="true">{move || text.get()}</span>
            <span class="typewriter__caret" aria-hidden="true">"|"</span>
        </span>
    }
}

#[cfg(feature = "csr")]
fn start_cycling(config: TypewriterConfig, text: RwSignal<String>) {
    use motion::driver::TypewriterDriver;
    use motion::typewriter::Typewriter;

    use crate::util::scheduler::BrowserScheduler;

    let machine = match Typewriter::new(config) {
        Ok(machine) => machine,
        Err(err) => {
            log::warn!("typewriter: not starting: {err}");
            return;
        }
    };
    let driver = TypewriterDriver::start(BrowserScheduler::new(), machine, move |shown| {
        text.set(shown.to_owned());
    });
    let driver = StoredValue::new_local(driver);
    on_cleanup(move || {
        driver.try_with_value(TypewriterDriver::cancel);
    });
}
