use super::*;

#[test]
fn nav_is_clear_at_top_and_solid_when_scrolled() {
    assert_eq!(nav_class(false), "nav nav--clear");
    assert_eq!(nav_class(true), "nav nav--solid");
}

#[test]
fn mobile_menu_class_tracks_open_state() {
    assert_eq!(mobile_menu_class(false), "nav__mobile");
    assert_eq!(mobile_menu_class(true), "nav__mobile nav__mobile--open");
}

#[test]
fn menu_glyph_swaps_between_burger_and_close() {
    assert_eq!(menu_glyph(false), "☰");
    assert_eq!(menu_glyph(true), "✕");
}

#[test]
fn mount_past_the_offset_marks_navbar_scrolled() {
    let mut ui = UiState::default();
    let threshold = mount_threshold(&mut ui, 400.0);
    assert!(ui.scrolled);
    assert!(threshold.is_past());
}

#[test]
fn remount_at_top_clears_flag_left_by_previous_navbar() {
    let mut ui = UiState::default();
    let mut first = mount_threshold(&mut ui, 0.0);
    if let Some(past) = first.update(400.0) {
        ui.set_scrolled(past);
    }
    assert!(ui.scrolled);

    // The project page unmounts the navbar and resets scroll to the top.
    let second = mount_threshold(&mut ui, 0.0);
    assert!(!ui.scrolled);
    assert!(!second.is_past());
}
