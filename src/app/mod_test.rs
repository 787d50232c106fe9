use super::*;

#[test]
fn classes_skips_empty_parts() {
    assert_eq!(classes(["btn", "", "btn--primary"]), "btn btn--primary");
    assert_eq!(classes(["", ""]), "");
    assert_eq!(classes(["card"]), "card");
}
