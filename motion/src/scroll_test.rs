#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::HEADER_OFFSET;

#[test]
fn default_threshold_uses_nav_offset() {
    let threshold = ScrollThreshold::default();
    assert_eq!(threshold.offset(), NAV_SCROLL_OFFSET);
    assert!(!threshold.is_past());
}

#[test]
fn update_reports_only_transitions() {
    let mut threshold = ScrollThreshold::new(50.0);
    assert_eq!(threshold.update(10.0), None);
    assert_eq!(threshold.update(50.0), None);
    assert_eq!(threshold.update(51.0), Some(true));
    assert_eq!(threshold.update(400.0), None);
    assert!(threshold.is_past());
    assert_eq!(threshold.update(0.0), Some(false));
    assert_eq!(threshold.update(0.0), None);
}

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#projects"), Some("projects"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("projects"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
}

#[test]
fn scroll_target_top_subtracts_header() {
    assert_eq!(scroll_target_top(300.0, 1000.0, HEADER_OFFSET), 1220.0);
    assert_eq!(scroll_target_top(-200.0, 1000.0, HEADER_OFFSET), 720.0);
}

#[test]
fn scroll_target_top_clamps_at_document_top() {
    assert_eq!(scroll_target_top(20.0, 0.0, HEADER_OFFSET), 0.0);
}
