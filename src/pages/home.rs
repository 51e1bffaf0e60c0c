//! The single scrolling page: splash, navbar, sections, footer.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::components::splash::Splash;
use crate::content::SiteContent;

/// Element ids of the page sections, in page order. Anchor links target these.
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "experience", "projects", "contact"];

#[component]
pub fn HomePage() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let splash = content.splash.clone();
    let show_skills = !content.skills.is_empty();
    let show_experience = !content.entries.is_empty();
    let show_projects = !content.projects.is_empty();

    view! {
        <div class="page">
            {splash.map(|settings| view! { <Splash settings=settings/> })}
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                {show_skills.then(|| view! { <Skills/> })}
                {show_experience.then(|| view! { <Experience/> })}
                {show_projects.then(|| view! { <Projects/> })}
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
