use super::*;

fn portfolio_value() -> serde_json::Value {
    serde_json::from_str(PORTFOLIO_BUNDLE).unwrap()
}

fn load_value(value: &serde_json::Value) -> Result<SiteContent, ContentError> {
    SiteContent::from_json(&value.to_string())
}

// =============================================================
// Variant
// =============================================================

#[test]
fn variant_defaults_to_portfolio() {
    assert_eq!(Variant::default(), Variant::Portfolio);
    assert_eq!(Variant::from_query(""), Variant::Portfolio);
}

#[test]
fn variant_from_query_reads_named_parameter() {
    assert_eq!(Variant::from_query("?variant=compact"), Variant::Compact);
    assert_eq!(Variant::from_query("?ref=home&variant=Compact"), Variant::Compact);
    assert_eq!(Variant::from_query("variant=portfolio"), Variant::Portfolio);
}

#[test]
fn variant_from_query_ignores_unknown_values_and_keys() {
    assert_eq!(Variant::from_query("?variant=retro"), Variant::Portfolio);
    assert_eq!(Variant::from_query("?theme=compact"), Variant::Portfolio);
    assert_eq!(Variant::from_query("?variant"), Variant::Portfolio);
}

// =============================================================
// Embedded bundles
// =============================================================

#[test]
fn portfolio_bundle_loads_with_splash() {
    let content = SiteContent::load(Variant::Portfolio).unwrap();
    assert_eq!(content.variant, Variant::Portfolio);
    assert_eq!(content.profile.short_name, "Tosin");
    assert_eq!(content.nav.len(), 6);
    assert_eq!(content.skills.len(), 10);
    let splash = content.splash.as_ref().unwrap();
    assert_eq!(splash.duration_ms, 2500);
    assert_eq!(splash.title, "OLUWATOSIN");
}

#[test]
fn compact_bundle_loads_without_splash() {
    let content = SiteContent::load(Variant::Compact).unwrap();
    assert_eq!(content.variant, Variant::Compact);
    assert!(content.splash.is_none());
    let full = SiteContent::load(Variant::Portfolio).unwrap();
    assert!(content.skills.len() < full.skills.len());
    assert!(content.projects.len() < full.projects.len());
}

#[test]
fn compact_bundle_takes_default_typewriter_cadence() {
    let content = SiteContent::load(Variant::Compact).unwrap();
    let config = content.typewriter_config();
    assert_eq!(config.type_ms, 100);
    assert_eq!(config.delete_ms, 50);
    assert_eq!(config.pause_ms, 2000);
}

#[test]
fn hero_phrases_match_banner_copy() {
    let content = SiteContent::load(Variant::Portfolio).unwrap();
    assert_eq!(content.typewriter_config().phrases[0], "I am a Full Stack Developer.");
}

#[test]
fn education_entry_is_tagged() {
    let content = SiteContent::load(Variant::Portfolio).unwrap();
    let education: Vec<_> = content.entries.iter().filter(|e| e.kind == EntryKind::Education).collect();
    assert_eq!(education.len(), 1);
    assert!(education[0].tags.is_empty());
}

#[test]
fn linked_project_resolves_to_detail() {
    let content = SiteContent::load(Variant::Portfolio).unwrap();
    let detail = content.detail("weather-app").unwrap();
    assert_eq!(detail.title, "Weather App");
    assert_eq!(detail.screenshots.len(), 3);
    assert!(content.detail("nope").is_none());
}

#[test]
fn reveal_threshold_comes_from_bundle() {
    let content = SiteContent::load(Variant::Portfolio).unwrap();
    assert!((content.reveal_threshold().value() - 0.1).abs() < f64::EPSILON);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SiteContent::from_json("{ nope"), Err(ContentError::Parse(_))));
}

#[test]
fn empty_phrase_list_is_rejected() {
    let mut value = portfolio_value();
    value["hero"]["phrases"] = serde_json::json!([]);
    assert!(matches!(
        load_value(&value),
        Err(ContentError::Motion(MotionError::EmptyPhraseList))
    ));
}

#[test]
fn blank_phrase_list_is_rejected() {
    let mut value = portfolio_value();
    value["hero"]["phrases"] = serde_json::json!([""]);
    assert!(matches!(
        load_value(&value),
        Err(ContentError::Motion(MotionError::BlankPhraseList))
    ));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let mut value = portfolio_value();
    value["reveal"]["threshold"] = serde_json::json!(1.5);
    assert!(matches!(
        load_value(&value),
        Err(ContentError::Motion(MotionError::ThresholdOutOfRange(_)))
    ));
}

#[test]
fn zero_splash_duration_is_rejected() {
    let mut value = portfolio_value();
    value["splash"]["duration_ms"] = serde_json::json!(0);
    assert!(matches!(
        load_value(&value),
        Err(ContentError::Motion(MotionError::ZeroInterval("splash")))
    ));
}

#[test]
fn duplicate_detail_slug_is_rejected() {
    let mut value = portfolio_value();
    let detail = value["details"][0].clone();
    value["details"].as_array_mut().unwrap().push(detail);
    match load_value(&value) {
        Err(ContentError::DuplicateSlug(slug)) => assert_eq!(slug, "weather-app"),
        other => panic!("expected duplicate slug, got {other:?}"),
    }
}

#[test]
fn project_slug_without_detail_is_rejected() {
    let mut value = portfolio_value();
    value["projects"][1]["slug"] = serde_json::json!("student-backend");
    match load_value(&value) {
        Err(ContentError::MissingDetail(slug)) => assert_eq!(slug, "student-backend"),
        other => panic!("expected missing detail, got {other:?}"),
    }
}

#[test]
fn mislabelled_bundle_is_rejected() {
    match SiteContent::from_json_for(Variant::Compact, PORTFOLIO_BUNDLE) {
        Err(ContentError::VariantMismatch { requested, found }) => {
            assert_eq!(requested, Variant::Compact);
            assert_eq!(found, Variant::Portfolio);
        }
        other => panic!("expected variant mismatch, got {other:?}"),
    }
    assert!(SiteContent::from_json_for(Variant::Compact, COMPACT_BUNDLE).is_ok());
}

#[test]
fn missing_reveal_block_uses_default_threshold() {
    let mut value = portfolio_value();
    value.as_object_mut().unwrap().remove("reveal");
    let content = load_value(&value).unwrap();
    assert!((content.reveal.threshold - 0.1).abs() < f64::EPSILON);
}

#[test]
fn errors_render_readable_messages() {
    let err = ContentError::MissingDetail("x".into());
    assert_eq!(err.to_string(), "project slug `x` has no detail page");
    let err = ContentError::from(MotionError::EmptyPhraseList);
    assert!(err.to_string().starts_with("content bundle has invalid motion settings"));
}
