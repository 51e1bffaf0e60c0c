use leptos::prelude::*;

/// Row of pill-shaped labels.
#[component]
pub fn TagList(tags: Vec<String>, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <div class=format!("tags {class}")>
            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
        </div>
    }
}
