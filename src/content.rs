//! Site content: profile, navigation, skills, timeline, and projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the page renders comes from a JSON bundle compiled into the
//! binary. Two bundles exist, one per [`Variant`]; both feed the same
//! components. Motion timings and the reveal threshold live in the bundle
//! and are checked against the `motion` config types when the bundle loads,
//! so a bad bundle is rejected once at startup instead of misbehaving later.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::HashSet;

use motion::MotionError;
use motion::consts::{DELETE_INTERVAL_MS, HOLD_INTERVAL_MS, REVEAL_THRESHOLD, SPLASH_DURATION_MS, TYPE_INTERVAL_MS};
use motion::observer::Threshold;
use motion::typewriter::TypewriterConfig;
use serde::{Deserialize, Serialize};

const PORTFOLIO_BUNDLE: &str = include_str!("../content/portfolio.json");
const COMPACT_BUNDLE: &str = include_str!("../content/compact.json");

/// Error raised while loading a content bundle.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content bundle is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content bundle has invalid motion settings: {0}")]
    Motion(#[from] MotionError),
    #[error("project slug `{0}` is used more than once")]
    DuplicateSlug(String),
    #[error("project slug `{0}` has no detail page")]
    MissingDetail(String),
    #[error("requested the {requested:?} bundle but it is labelled {found:?}")]
    VariantMismatch { requested: Variant, found: Variant },
}

/// Which content configuration the site renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Full content with the splash overlay.
    #[default]
    Portfolio,
    /// Trimmed content, no splash.
    Compact,
}

impl Variant {
    /// Parse a variant name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "portfolio" => Some(Self::Portfolio),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }

    /// Pick the variant named by the `variant` parameter of a URL query
    /// string (`?variant=compact&x=1`). Falls back to the default.
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "variant")
            .and_then(|(_, value)| Self::parse(value))
            .unwrap_or_default()
    }

    fn bundle(self) -> &'static str {
        match self {
            Self::Portfolio => PORTFOLIO_BUNDLE,
            Self::Compact => COMPACT_BUNDLE,
        }
    }
}

/// Icon keys understood by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Layout,
    Server,
    Code,
    Database,
    Globe,
    Shield,
    GitBranch,
    Github,
    Linkedin,
    Instagram,
    Mail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: SkillLevel,
    pub icon: Icon,
}

/// Whether a timeline entry is a job or a degree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Work,
    Education,
}

/// One row of the experience/education timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub role: String,
    pub organization: String,
    pub date_range: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub kind: EntryKind,
}

/// Project card on the home page. A `slug` links the card to a detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
}

/// Long-form write-up rendered at `/projects/:slug`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub role: String,
    pub timeline: String,
    pub problem: String,
    pub features: Vec<String>,
    pub learned: String,
    pub stack: Vec<String>,
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    /// Document title.
    pub tagline: String,
    pub greeting: String,
    pub intro: String,
    pub photo: String,
    pub about_heading: String,
    pub about: Vec<String>,
    pub highlights: Vec<String>,
    pub email: String,
    pub resume_url: String,
    #[serde(default)]
    pub hero_links: Vec<Social>,
    #[serde(default)]
    pub socials: Vec<Social>,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub skills: Heading,
    pub experience: Heading,
    pub projects: Heading,
    pub contact: Heading,
}

/// Hero typewriter phrases and cadence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSettings {
    pub phrases: Vec<String>,
    #[serde(default = "default_type_ms")]
    pub type_ms: u32,
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u32,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealSettings {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashSettings {
    pub title: String,
    #[serde(default = "default_splash_ms")]
    pub duration_ms: u32,
}

fn default_type_ms() -> u32 {
    TYPE_INTERVAL_MS
}

fn default_delete_ms() -> u32 {
    DELETE_INTERVAL_MS
}

fn default_pause_ms() -> u32 {
    HOLD_INTERVAL_MS
}

fn default_threshold() -> f64 {
    REVEAL_THRESHOLD
}

fn default_splash_ms() -> u32 {
    SPLASH_DURATION_MS
}

/// A fully loaded, validated content bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub variant: Variant,
    pub profile: Profile,
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub footer_nav: Vec<NavLink>,
    pub headings: Headings,
    pub hero: HeroSettings,
    #[serde(default)]
    pub reveal: RevealSettings,
    #[serde(default)]
    pub splash: Option<SplashSettings>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub details: Vec<ProjectDetail>,
}

impl SiteContent {
    /// Load and validate the bundle compiled in for `variant`.
    pub fn load(variant: Variant) -> Result<Self, ContentError> {
        Self::from_json_for(variant, variant.bundle())
    }

    /// Parse and validate a bundle that must be labelled `variant`.
    pub fn from_json_for(variant: Variant, raw: &str) -> Result<Self, ContentError> {
        let content = Self::from_json(raw)?;
        if content.variant != variant {
            return Err(ContentError::VariantMismatch { requested: variant, found: content.variant });
        }
        Ok(content)
    }

    /// Parse and validate a bundle.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        log::debug!(
            "content: loaded {:?} bundle ({} skills, {} entries, {} projects)",
            content.variant,
            content.skills.len(),
            content.entries.len(),
            content.projects.len()
        );
        Ok(content)
    }

    /// Check motion settings and project slug wiring.
    pub fn validate(&self) -> Result<(), ContentError> {
        self.typewriter_config().validate()?;
        Threshold::new(self.reveal.threshold)?;
        if let Some(splash) = &self.splash {
            if splash.duration_ms == 0 {
                return Err(MotionError::ZeroInterval("splash").into());
            }
        }

        let mut seen = HashSet::new();
        for detail in &self.details {
            if !seen.insert(detail.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(detail.slug.clone()));
            }
        }
        for slug in self.projects.iter().filter_map(|p| p.slug.as_deref()) {
            if !seen.contains(slug) {
                return Err(ContentError::MissingDetail(slug.to_owned()));
            }
        }
        Ok(())
    }

    /// Typewriter configuration for the hero banner.
    pub fn typewriter_config(&self) -> TypewriterConfig {
        TypewriterConfig::new(self.hero.phrases.iter().cloned()).with_intervals(
            self.hero.type_ms,
            self.hero.delete_ms,
            self.hero.pause_ms,
        )
    }

    /// Reveal threshold. Falls back to the default for an unvalidated bundle.
    pub fn reveal_threshold(&self) -> Threshold {
        Threshold::new(self.reveal.threshold).unwrap_or_default()
    }

    pub fn detail(&self, slug: &str) -> Option<&ProjectDetail> {
        self.details.iter().find(|d| d.slug == slug)
    }
}
