//! Landing banner: greeting, name, typewriter, intro, calls to action.

use std::sync::Arc;

use leptos::prelude::*;
use motion::reveal::stagger_delay;

use crate::components::anchor::AnchorLink;
use crate::components::reveal::Reveal;
use crate::components::social::SocialLinks;
use crate::components::typewriter::TypewriterText;
use crate::content::SiteContent;

/// Delay between consecutive hero lines.
const HERO_STEP_MS: u32 = 200;

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let profile = &content.profile;

    let greeting = profile.greeting.clone();
    let name = profile.name.clone();
    let intro = profile.intro.clone();
    let resume = profile.resume_url.clone();
    let links = profile.hero_links.clone();
    let typewriter = content.typewriter_config();
    let delay = |line: usize| stagger_delay(0, line, HERO_STEP_MS);

    view! {
        <section id="home" class="hero">
            <div class="hero__glow hero__glow--left"></div>
            <div class="hero__glow hero__glow--right"></div>

            <div class="hero__body">
                <Reveal>
                    <p class="hero__greeting">{greeting}</p>
                </Reveal>
                <Reveal delay=delay(1)>
                    <h1 class="hero__name">{name}<span class="accent">"."</span></h1>
                </Reveal>
                <Reveal delay=delay(2)>
                    <div class="hero__typewriter">
                        <TypewriterText config=typewriter/>
                    </div>
                </Reveal>
                <Reveal delay=delay(3)>
                    <p class="hero__intro">{intro}</p>
                </Reveal>
                <Reveal delay=delay(4)>
                    <div class="hero__actions">
                        <AnchorLink href="#projects" class="button button--primary">
                            "View My Work"
                        </AnchorLink>
                        <a class="button button--outline" href=resume target="_blank" rel="noopener noreferrer">
                            <span aria-hidden="true">"⇩"</span>
                            " Download CV"
                        </a>
                    </div>
                </Reveal>
                <Reveal delay=delay(5)>
                    <SocialLinks links=links class="hero__socials"/>
                </Reveal>
            </div>

            <div class="hero__scroll-hint" aria-hidden="true">"⌄"</div>
        </section>
    }
}
