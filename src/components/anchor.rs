//! In-page anchor link with header-aware smooth scrolling.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll::scroll_to_anchor;

/// `<a href="#section">` that scrolls smoothly instead of jumping, landing
/// the section just below the fixed navbar. Closes the mobile menu if open.
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ui = use_context::<RwSignal<UiState>>();
    let target = href.clone();
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        if let Some(ui) = ui {
            if ui.with_untracked(|s| s.menu_open) {
                ui.update(UiState::close_menu);
            }
        }
        scroll_to_anchor(&target);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
