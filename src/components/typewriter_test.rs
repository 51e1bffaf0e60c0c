use super::*;

#[test]
fn label_joins_all_phrases() {
    let config = TypewriterConfig::new(["I build apps.", "I ship."]);
    assert_eq!(phrases_label(&config), "I build apps. I ship.");
}

#[test]
fn label_skips_empty_phrases() {
    let config = TypewriterConfig::new(["", "Hello.", ""]);
    assert_eq!(phrases_label(&config), "Hello.");
}
