use super::*;

#[test]
fn hidden_block_uses_hidden_class() {
    assert_eq!(reveal_class(false, ""), "reveal reveal--hidden");
}

#[test]
fn revealed_block_uses_revealed_class() {
    assert_eq!(reveal_class(true, ""), "reveal reveal--revealed");
}

#[test]
fn caller_classes_are_appended() {
    assert_eq!(reveal_class(true, "card"), "reveal reveal--revealed card");
    assert_eq!(reveal_class(false, "  card wide "), "reveal reveal--hidden card wide");
}

#[test]
fn blank_caller_class_adds_nothing() {
    assert_eq!(reveal_class(false, "   "), "reveal reveal--hidden");
}
