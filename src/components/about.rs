use std::sync::Arc;

use leptos::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::reveal::Reveal;
use crate::components::tags::TagList;
use crate::content::SiteContent;

/// Portrait beside the bio, stack highlights, and a jump to contact.
#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let profile = &content.profile;

    let photo = profile.photo.clone();
    let alt = profile.short_name.clone();
    let heading = profile.about_heading.clone();
    let paragraphs = profile.about.clone();
    let highlights = profile.highlights.clone();

    view! {
        <section id="about" class="about">
            <div class="about__grid">
                <Reveal>
                    <div class="about__portrait">
                        <div class="about__frame">
                            <span class="about__placeholder" aria-hidden="true">"👤"</span>
                            <img class="about__photo" src=photo alt=alt/>
                        </div>
                    </div>
                </Reveal>
                <Reveal delay=200>
                    <div class="about__text">
                        <p class="eyebrow">"About Me"</p>
                        <h2 class="about__heading">{heading}</h2>
                        {paragraphs.into_iter().map(|p| view! { <p class="about__paragraph">{p}</p> }).collect_view()}
                        <div class="about__stack">
                            <p class="about__stack-label">"My Stack Includes"</p>
                            <TagList tags=highlights class="tags--chips"/>
                        </div>
                        <AnchorLink href="#contact" class="button button--gradient">
                            "Let's Connect →"
                        </AnchorLink>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
