//! Row of profile links rendered as icon buttons.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::Social;
use crate::util::links::{link_rel, link_target};

#[component]
pub fn SocialLinks(links: Vec<Social>, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <div class=format!("socials {class}")>
            {links
                .into_iter()
                .map(|social| {
                    let target = link_target(&social.href);
                    let rel = link_rel(&social.href);
                    view! {
                        <a class="socials__link" href=social.href target=target rel=rel aria-label=social.label>
                            <IconGlyph icon=social.icon/>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
