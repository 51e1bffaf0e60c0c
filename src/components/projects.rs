//! Project cards with demo, source, and case-study links.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::sync::Arc;

use leptos::prelude::*;
use motion::reveal::stagger_delay;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::components::tags::TagList;
use crate::content::{Project, SiteContent};
use crate::util::links::{link_rel, link_target, project_path};

const PROJECT_STEP_MS: u32 = 150;

/// One button in a project card footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectAction {
    pub label: &'static str,
    pub href: String,
    pub class: &'static str,
}

/// Footer buttons for a card: live demo, source, then the detail page.
/// Missing links are simply left out; a private project may have none.
pub fn project_actions(project: &Project) -> Vec<ProjectAction> {
    let mut actions = Vec::new();
    if let Some(href) = &project.demo_url {
        actions.push(ProjectAction {
            label: "Live Demo ↗",
            href: href.clone(),
            class: "button button--primary button--small",
        });
    }
    if let Some(href) = &project.repo_url {
        actions.push(ProjectAction {
            label: "GitHub </>",
            href: href.clone(),
            class: "button button--muted button--small",
        });
    }
    if let Some(slug) = &project.slug {
        actions.push(ProjectAction {
            label: "Case Study →",
            href: project_path(slug),
            class: "button button--outline button--small",
        });
    }
    actions
}

pub fn project_delay(index: usize) -> u32 {
    stagger_delay(0, index, PROJECT_STEP_MS)
}

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let heading = content.headings.projects.clone();
    let projects = content.projects.clone();

    view! {
        <section id="projects" class="projects">
            <div class="section__inner">
                <Reveal>
                    <SectionHeading title=heading.title subtitle=heading.subtitle/>
                </Reveal>
                <div class="projects__grid">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <Reveal delay=project_delay(index) class="projects__cell">
                                    <ProjectCard project=project/>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let actions = project_actions(&project);
    let alt = project.title.clone();

    view! {
        <article class="project">
            <div class="project__media">
                <img class="project__image" src=project.image alt=alt/>
            </div>
            <div class="project__body">
                <h3 class="project__title">{project.title}</h3>
                <p class="project__description">{project.description}</p>
                <TagList tags=project.tags/>
                <div class="project__actions">
                    {actions
                        .into_iter()
                        .map(|action| {
                            let target = link_target(&action.href);
                            let rel = link_rel(&action.href);
                            view! {
                                <a class=action.class href=action.href target=target rel=rel>
                                    {action.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
