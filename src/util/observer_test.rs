use super::*;

#[test]
fn intersecting_entries_forward_their_ratio() {
    assert_eq!(entry_ratio(true, 0.25), Some(0.25));
    assert_eq!(entry_ratio(true, 1.0), Some(1.0));
}

#[test]
fn edge_touching_entry_forwards_zero() {
    assert_eq!(entry_ratio(true, 0.0), Some(0.0));
}

#[test]
fn non_intersecting_entries_are_dropped() {
    assert_eq!(entry_ratio(false, 0.0), None);
    assert_eq!(entry_ratio(false, 0.5), None);
}

#[test]
fn odd_ratios_are_clamped_or_dropped() {
    assert_eq!(entry_ratio(true, 1.0000001), Some(1.0));
    assert_eq!(entry_ratio(true, f64::NAN), None);
}
