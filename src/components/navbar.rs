//! Fixed top navigation with scroll-aware background and a mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar owns the page's only window scroll subscription. It feeds the
//! scroll offset through a `ScrollThreshold` and writes transitions into
//! `UiState::scrolled`; the listener is removed when the navbar unmounts.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use std::sync::Arc;

use leptos::prelude::*;
use motion::scroll::ScrollThreshold;

use crate::components::anchor::AnchorLink;
use crate::content::{NavLink, SiteContent};
use crate::state::ui::UiState;

pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled { "nav nav--solid" } else { "nav nav--clear" }
}

pub fn mobile_menu_class(open: bool) -> &'static str {
    if open { "nav__mobile nav__mobile--open" } else { "nav__mobile" }
}

pub fn menu_glyph(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}

/// Fresh threshold for a navbar mount at `scroll_y`.
///
/// `UiState` outlives the navbar, so its `scrolled` flag is overwritten from
/// the current offset rather than trusted.
pub fn mount_threshold(ui: &mut UiState, scroll_y: f64) -> ScrollThreshold {
    let mut threshold = ScrollThreshold::default();
    threshold.update(scroll_y);
    ui.set_scrolled(threshold.is_past());
    threshold
}

fn nav_links(links: Vec<NavLink>, class: &'static str) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            view! {
                <AnchorLink href=link.href class=class>
                    {link.label}
                </AnchorLink>
            }
        })
        .collect_view()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    watch_scroll(ui);

    let brand = content.profile.short_name.clone();
    let resume = content.profile.resume_url.clone();
    let links = content.nav.clone();
    let mobile_links = links.clone();

    let menu_open = move || ui.with(|s| s.menu_open);

    view! {
        <nav class=move || nav_class(ui.with(|s| s.scrolled))>
            <div class="nav__inner">
                <AnchorLink href="#home" class="nav__brand">
                    {brand}
                </AnchorLink>
                <div class="nav__links">
                    {nav_links(links, "nav__link")}
                    <a class="nav__resume" href=resume target="_blank" rel="noopener noreferrer">
                        "Resume"
                    </a>
                </div>
                <button
                    class="nav__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || menu_glyph(menu_open())}
                </button>
            </div>
            <div class=move || mobile_menu_class(menu_open())>
                {nav_links(mobile_links, "nav__mobile-link")}
            </div>
        </nav>
    }
}

#[cfg(feature = "csr")]
fn watch_scroll(ui: RwSignal<UiState>) {
    use crate::util::scroll::window_scroll_y;

    let scroll_y = window_scroll_y();
    let seeded = ui.try_update(|s| mount_threshold(s, scroll_y)).unwrap_or_default();
    let threshold = StoredValue::new(seeded);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let scroll_y = window_scroll_y();
        let changed = threshold.try_update_value(|t| t.update(scroll_y)).flatten();
        if let Some(past) = changed {
            ui.update(|s| {
                s.set_scrolled(past);
            });
        }
    });
    on_cleanup(move || handle.remove());
}
