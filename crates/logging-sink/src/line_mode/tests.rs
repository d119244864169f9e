use super::LineMode;

#[test]
fn line_mode_conversions_round_trip() {
    assert_eq!(LineMode::from(true), LineMode::WithNewline);
    assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

    let append: bool = LineMode::WithNewline.into();
    assert!(append);

    let append: bool = LineMode::WithoutNewline.into();
    assert!(!append);
}

#[test]
fn default_appends_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
}

#[test]
fn terminator_skips_existing_newline() {
    assert_eq!(LineMode::WithNewline.terminator("msg"), "\n");
    assert_eq!(LineMode::WithNewline.terminator("msg\n"), "");
    assert_eq!(LineMode::WithNewline.terminator(""), "\n");
}

#[test]
fn terminator_without_newline_is_empty() {
    assert_eq!(LineMode::WithoutNewline.terminator("msg"), "");
    assert_eq!(LineMode::WithoutNewline.terminator("msg\n"), "");
}
