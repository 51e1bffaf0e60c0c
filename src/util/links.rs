//! Link attribute helpers.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// Whether `href` leaves the site (absolute `http(s)` URL).
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// `target` attribute: external links open in a new tab.
pub fn link_target(href: &str) -> Option<&'static str> {
    is_external(href).then_some("_blank")
}

/// `rel` attribute paired with [`link_target`].
pub fn link_rel(href: &str) -> Option<&'static str> {
    is_external(href).then_some("noopener noreferrer")
}

/// Route path of a project's detail page.
pub fn project_path(slug: &str) -> String {
    format!("/projects/{slug}")
}
