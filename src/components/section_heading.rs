#[cfg(test)]
#[path = "section_heading_test.rs"]
mod section_heading_test;

use leptos::prelude::*;

pub fn heading_class(center: bool) -> &'static str {
    if center { "section-heading section-heading--center" } else { "section-heading" }
}

/// Gradient section title with a subtitle and an accent rule.
#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(default = true)] center: bool,
) -> impl IntoView {
    view! {
        <div class=heading_class(center)>
            <h2 class="section-heading__title">{title}</h2>
            <p class="section-heading__subtitle">{subtitle}</p>
            <div class="section-heading__rule"></div>
        </div>
    }
}
