use super::*;

#[test]
fn visible_splash_has_base_class() {
    assert_eq!(splash_class(true), "splash");
}

#[test]
fn dismissed_splash_is_hidden() {
    assert_eq!(splash_class(false), "splash splash--hidden");
}
