//! Alternating timeline of jobs and education.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use std::sync::Arc;

use leptos::prelude::*;
use motion::reveal::stagger_delay;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::components::tags::TagList;
use crate::content::{EntryKind, SiteContent};

const ENTRY_STEP_MS: u32 = 100;

/// Which side of the center line a timeline card sits on (wide screens).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Cards alternate, starting on the right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Right } else { Self::Left }
    }

    pub fn row_class(self) -> &'static str {
        match self {
            Self::Left => "timeline__row timeline__row--left",
            Self::Right => "timeline__row timeline__row--right",
        }
    }
}

pub fn entry_delay(index: usize) -> u32 {
    stagger_delay(0, index, ENTRY_STEP_MS)
}

/// Badge next to the date; only education rows get one.
pub fn kind_badge(kind: EntryKind) -> Option<&'static str> {
    match kind {
        EntryKind::Work => None,
        EntryKind::Education => Some("🎓"),
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let heading = content.headings.experience.clone();
    let entries = content.entries.clone();

    view! {
        <section id="experience" class="experience">
            <div class="section__inner section__inner--narrow">
                <Reveal>
                    <SectionHeading title=heading.title subtitle=heading.subtitle/>
                </Reveal>
                <div class="timeline">
                    <div class="timeline__line"></div>
                    {entries
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let badge = kind_badge(entry.kind);
                            let has_tags = !entry.tags.is_empty();
                            view! {
                                <Reveal delay=entry_delay(index)>
                                    <div class=Side::for_index(index).row_class()>
                                        <div class="timeline__dot"></div>
                                        <div class="timeline__card">
                                            <div class="timeline__meta">
                                                <span class="timeline__date">{entry.date_range}</span>
                                                {badge.map(|b| view! { <span class="timeline__badge" aria-label="Education">{b}</span> })}
                                            </div>
                                            <h3 class="timeline__role">{entry.role}</h3>
                                            <p class="timeline__org">{entry.organization}</p>
                                            <ul class="timeline__bullets">
                                                {entry.bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
                                            </ul>
                                            {has_tags.then(|| view! { <TagList tags=entry.tags class="tags--small"/> })}
                                        </div>
                                        <div class="timeline__spacer"></div>
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
