//! Case-study page at `/projects/:slug`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from a project card. Resets the scroll position on mount, offers
//! a history-back action, and renders a not-found panel for unknown slugs.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::reveal::Reveal;
use crate::components::tags::TagList;
use crate::content::{ProjectDetail, SiteContent};
use crate::util::links::{link_rel, link_target};
use crate::util::scroll::{history_back, scroll_to_top};

/// Document title for a case study.
pub fn page_title(project: &str, owner: &str) -> String {
    format!("{project} | {owner}")
}

/// Lead screenshot and the remaining gallery.
pub fn split_screenshots(screenshots: &[String]) -> (Option<&String>, &[String]) {
    match screenshots.split_first() {
        Some((lead, rest)) => (Some(lead), rest),
        None => (None, &[]),
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let params = use_params_map();

    Effect::new(move || scroll_to_top());

    let owner = content.profile.short_name.clone();
    let detail = move || {
        params
            .with(|p| p.get("slug"))
            .and_then(|slug| content.detail(&slug).cloned())
    };

    view! {
        <div class="project-page">
            <div class="project-page__body">
                <button class="back-link" on:click=move |_| history_back()>
                    <span aria-hidden="true">"←"</span>
                    " Back to Projects"
                </button>
                {move || match detail() {
                    Some(detail) => view! { <CaseStudy detail=detail owner=owner.clone()/> }.into_any(),
                    None => view! { <ProjectNotFound/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn CaseStudy(detail: ProjectDetail, owner: String) -> impl IntoView {
    let title = page_title(&detail.title, &owner);
    let (lead, gallery) = split_screenshots(&detail.screenshots);
    let lead = lead.cloned();
    let gallery = gallery.to_vec();
    let has_gallery = !gallery.is_empty();

    let demo = detail.demo_url.clone().map(|href| {
        let target = link_target(&href);
        let rel = link_rel(&href);
        view! {
            <a class="button button--primary" href=href target=target rel=rel>"Live Demo ↗"</a>
        }
    });
    let repo = detail.repo_url.clone().map(|href| {
        let target = link_target(&href);
        let rel = link_rel(&href);
        view! {
            <a class="button button--ghost" href=href target=target rel=rel>"GitHub Repo"</a>
        }
    });

    view! {
        <Title text=title/>
        <Reveal>
            <header class="case__header">
                <h1 class="case__title">{detail.title}</h1>
                <p class="case__summary">{detail.summary}</p>
                <div class="case__actions">{demo}{repo}</div>
                {lead.map(|src| view! {
                    <div class="case__lead">
                        <img src=src alt="Main screenshot"/>
                    </div>
                })}
            </header>
        </Reveal>

        <div class="case__grid">
            <div class="case__main">
                <Reveal delay=100>
                    <h3 class="case__heading">"◎ The Problem"</h3>
                    <p class="case__text">{detail.problem}</p>
                </Reveal>
                <Reveal delay=200>
                    <h3 class="case__heading">"⚡ Key Features"</h3>
                    <div class="case__features">
                        {detail
                            .features
                            .into_iter()
                            .map(|feature| view! {
                                <div class="case__feature">
                                    <span class="case__check" aria-hidden="true">"✓"</span>
                                    <span>{feature}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal delay=300>
                    <h3 class="case__heading">"📖 What I Learned"</h3>
                    <p class="case__text case__text--quote">{detail.learned}</p>
                </Reveal>
            </div>

            <aside class="case__side">
                <Reveal delay=150>
                    <div class="case__panel">
                        <h4>"Project Info"</h4>
                        <dl class="case__info">
                            <dt>"Role"</dt>
                            <dd>{detail.role}</dd>
                            <dt>"Timeline"</dt>
                            <dd>{detail.timeline}</dd>
                        </dl>
                    </div>
                </Reveal>
                <Reveal delay=250>
                    <div class="case__panel">
                        <h4>"Technologies"</h4>
                        <TagList tags=detail.stack class="tags--chips"/>
                    </div>
                </Reveal>
            </aside>
        </div>

        {has_gallery.then(|| view! {
            <Reveal delay=400>
                <div class="case__gallery">
                    <h3 class="case__heading">"Project Gallery"</h3>
                    <div class="case__gallery-grid">
                        {gallery
                            .into_iter()
                            .enumerate()
                            .map(|(i, src)| view! {
                                <img class="case__shot" src=src alt=format!("Screenshot {}", i + 2)/>
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        })}
    }
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Project not found"</h1>
            <p>"That case study does not exist or has moved."</p>
            <a class="button button--primary" href="/">"Back home"</a>
        </div>
    }
}
