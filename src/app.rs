//! Root component: content loading, context providers, and routes.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Link, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{SiteContent, Variant};
use crate::pages::{home::HomePage, project::ProjectPage};
use crate::state::ui::UiState;
use crate::util::scroll::location_query;

/// Rounded purple square with a cursive "T".
pub const FAVICON: &str = "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><rect width=%22100%22 height=%22100%22 rx=%2220%22 fill=%22%239333ea%22/><text x=%2250%22 y=%2270%22 font-family=%22cursive%22 font-size=%2260%22 text-anchor=%22middle%22 fill=%22white%22 font-weight=%22bold%22>T</text></svg>";

/// Initial chrome state for a content bundle.
pub fn initial_ui(content: &SiteContent) -> UiState {
    let mut ui = UiState::default();
    if content.splash.is_some() {
        ui.show_splash();
    }
    ui
}

/// Site root.
///
/// Picks the content variant from the URL, validates it, and either mounts
/// the routed site or an error panel. A bad bundle never panics.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let variant = Variant::from_query(&location_query());
    match SiteContent::load(variant) {
        Ok(content) => view! { <Site content=content/> }.into_any(),
        Err(err) => {
            log::error!("content: {variant:?} bundle rejected: {err}");
            view! { <ContentUnavailable message=err.to_string()/> }.into_any()
        }
    }
}

#[component]
fn Site(content: SiteContent) -> impl IntoView {
    provide_context(RwSignal::new(initial_ui(&content)));
    provide_context(content.reveal_threshold());
    let title = content.profile.tagline.clone();
    provide_context(Arc::new(content));

    view! {
        <Title text=title/>
        <Link rel="icon" type_="image/svg+xml" href=FAVICON/>

        <Router>
            <Routes fallback=|| view! { <RouteNotFound/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn RouteNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a class="button button--primary" href="/">"Back home"</a>
        </div>
    }
}

#[component]
fn ContentUnavailable(message: String) -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Something went wrong"</h1>
            <p>"The site content could not be loaded."</p>
            <pre class="not-found__detail">{message}</pre>
        </div>
    }
}
