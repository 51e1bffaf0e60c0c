use super::*;

#[test]
fn each_level_has_its_own_dot() {
    assert_eq!(level_dot_class(SkillLevel::Expert), "skill__dot skill__dot--expert");
    assert_eq!(level_dot_class(SkillLevel::Advanced), "skill__dot skill__dot--advanced");
    assert_eq!(level_dot_class(SkillLevel::Intermediate), "skill__dot skill__dot--intermediate");
}

#[test]
fn level_labels_are_title_case() {
    assert_eq!(level_label(SkillLevel::Expert), "Expert");
    assert_eq!(level_label(SkillLevel::Intermediate), "Intermediate");
}

#[test]
fn tiles_cascade_fifty_ms_apart() {
    assert_eq!(skill_delay(0), 0);
    assert_eq!(skill_delay(1), 50);
    assert_eq!(skill_delay(9), 450);
}
