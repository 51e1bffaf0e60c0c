use std::sync::Arc;

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::components::social::SocialLinks;
use crate::content::{Icon, SiteContent};

/// Closing call to action with the email button and social links.
#[component]
pub fn Contact() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let heading = content.headings.contact.clone();
    let email = content.profile.email.clone();
    let mailto = format!("mailto:{email}");
    let socials = content.profile.socials.clone();

    view! {
        <section id="contact" class="contact">
            <div class="section__inner section__inner--narrow">
                <Reveal>
                    <div class="contact__card">
                        <div class="contact__glow"></div>
                        <h2 class="contact__title">{heading.title}</h2>
                        <p class="contact__subtitle">{heading.subtitle}</p>
                        <a class="contact__email" href=mailto>
                            <IconGlyph icon=Icon::Mail/>
                            <span>{email}</span>
                        </a>
                        <div class="contact__elsewhere">
                            <p class="contact__hint">"Or find me on other platforms"</p>
                            <SocialLinks links=socials class="socials--round"/>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
