//! Full-screen intro overlay shown once while the page settles.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

use leptos::prelude::*;

use crate::content::SplashSettings;
use crate::state::ui::UiState;

pub fn splash_class(visible: bool) -> &'static str {
    if visible { "splash" } else { "splash splash--hidden" }
}

/// Overlay with the flickering name. Fades out after `settings.duration_ms`
/// and stays out; remounting after dismissal does not bring it back.
#[component]
pub fn Splash(settings: SplashSettings) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    {
        if ui.with_untracked(|s| s.splash_visible) {
            start_timer(settings.duration_ms, ui);
        }
    }

    let visible = move || ui.with(|s| s.splash_visible);

    view! {
        <div class=move || splash_class(visible()) aria-hidden=move || (!visible()).to_string()>
            <h1 class="splash__title">{settings.title}</h1>
        </div>
    }
}

#[cfg(feature = "csr")]
fn start_timer(duration_ms: u32, ui: RwSignal<UiState>) {
    use motion::splash::SplashTimer;

    use crate::util::scheduler::BrowserScheduler;

    let timer = SplashTimer::start(BrowserScheduler::new(), duration_ms, move || {
        ui.update(UiState::dismiss_splash);
    });
    match timer {
        Ok(timer) => {
            let timer = StoredValue::new_local(timer);
            on_cleanup(move || {
                timer.try_with_value(SplashTimer::cancel);
            });
        }
        Err(err) => {
            log::warn!("splash: {err}; hiding immediately");
            ui.update(UiState::dismiss_splash);
        }
    }
}
