//! Grid of skill tiles with a colored proficiency dot.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use std::sync::Arc;

use leptos::prelude::*;
use motion::reveal::stagger_delay;

use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::content::{SiteContent, SkillLevel};

const SKILL_STEP_MS: u32 = 50;

pub fn level_dot_class(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Expert => "skill__dot skill__dot--expert",
        SkillLevel::Advanced => "skill__dot skill__dot--advanced",
        SkillLevel::Intermediate => "skill__dot skill__dot--intermediate",
    }
}

pub fn level_label(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Expert => "Expert",
        SkillLevel::Advanced => "Advanced",
        SkillLevel::Intermediate => "Intermediate",
    }
}

/// Tile reveal delay; tiles cascade left to right.
pub fn skill_delay(index: usize) -> u32 {
    stagger_delay(0, index, SKILL_STEP_MS)
}

#[component]
pub fn Skills() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let heading = content.headings.skills.clone();
    let skills = content.skills.clone();

    view! {
        <section id="skills" class="skills">
            <div class="section__inner">
                <Reveal>
                    <SectionHeading title=heading.title subtitle=heading.subtitle/>
                </Reveal>
                <div class="skills__grid">
                    {skills
                        .into_iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! {
                                <Reveal delay=skill_delay(index)>
                                    <div class="skill">
                                        <div class="skill__icon">
                                            <IconGlyph icon=skill.icon/>
                                        </div>
                                        <h3 class="skill__name">{skill.name}</h3>
                                        <p class="skill__category">{skill.category}</p>
                                        <div class=level_dot_class(skill.level) title=level_label(skill.level)></div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
