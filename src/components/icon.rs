//! Text glyphs standing in for the icon set named by the content bundle.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

use crate::content::Icon;

/// Stable CSS name of an icon.
pub fn icon_name(icon: Icon) -> &'static str {
    match icon {
        Icon::Layout => "layout",
        Icon::Server => "server",
        Icon::Code => "code",
        Icon::Database => "database",
        Icon::Globe => "globe",
        Icon::Shield => "shield",
        Icon::GitBranch => "git-branch",
        Icon::Github => "github",
        Icon::Linkedin => "linkedin",
        Icon::Instagram => "instagram",
        Icon::Mail => "mail",
    }
}

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Layout => "▦",
        Icon::Server => "▤",
        Icon::Code => "</>",
        Icon::Database => "⛁",
        Icon::Globe => "◍",
        Icon::Shield => "⛨",
        Icon::GitBranch => "⎇",
        Icon::Github => "GH",
        Icon::Linkedin => "in",
        Icon::Instagram => "IG",
        Icon::Mail => "✉",
    }
}

/// Decorative icon; screen readers skip it, so pair it with a label.
#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! {
        <span class=format!("icon icon--{}", icon_name(icon)) aria-hidden="true">
            {glyph(icon)}
        </span>
    }
}
