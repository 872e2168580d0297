//! Integration tests for lint warnings

use gsx::{parse, translate};

#[test]
fn test_single_bareword_warning() {
    let translation = translate("Tag", "<Tag kind=primary />");
    assert_eq!(translation.warnings.len(), 1);
    let w = &translation.warnings[0];
    assert_eq!(w.message, "unquoted value for attribute \"kind\"");
    assert_eq!((w.line, w.column), (1, 11));
    assert_eq!(w.span, 10..17);
}

#[test]
fn test_warning_positions_on_later_lines() {
    let source = "<h1>Title</h1>\n<p>\n    <Badge kind=info />\n</p>\n<Badge\n  kind=warn\n/>";
    let translation = translate("Doc", source);
    let positions: Vec<_> = translation
        .warnings
        .iter()
        .map(|w| (w.line, w.column))
        .collect();
    assert_eq!(positions, vec![(3, 17), (6, 8)]);
}

#[test]
fn test_warning_columns_count_characters() {
    let translation = translate("Doc", "été <Tag a=b />");
    let w = &translation.warnings[0];
    // "été <Tag a=" is 11 characters but 13 bytes
    assert_eq!(w.column, 12);
    assert_eq!(w.span.start, 13);
}

#[test]
fn test_one_warning_per_bareword() {
    let translation = translate("Doc", r#"<Tag a=1 b="2" c=three d={ 4 } />"#);
    let messages: Vec<_> = translation
        .warnings
        .iter()
        .map(|w| w.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "unquoted value for attribute \"a\"",
            "unquoted value for attribute \"c\"",
        ]
    );
}

#[test]
fn test_parse_returns_warnings_with_definitions() {
    let (definitions, warnings) = parse("Doc", "<Tag a=b />").expect("Should parse");
    assert!(definitions.contains("Doc"));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_warning_format_points_at_value() {
    let source = "<Tag\n  name=Go\n/>";
    let translation = translate("Doc", source);
    let report = translation.warnings[0].format(source, "doc.gsx");
    assert!(report.contains("unquoted value for attribute \"name\""));
    assert!(report.contains("doc.gsx"));
}
