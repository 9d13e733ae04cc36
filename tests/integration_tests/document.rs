use assertables::{assert_contains, assert_not_contains};
use svgdata::{transform_str, transform_str_default, TransformConfig};

#[test]
fn test_document_normalize_paths() {
    let input = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <!-- outline -->
  <path d="M 10,10 l 5 5 h -5 z" fill="none"/>
  <rect width="10" height="10"/>
</svg>"#;
    let expected = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <!-- outline -->
  <path d="M10 10l5 5h-5z" fill="none"/>
  <rect width="10" height="10"/>
</svg>"#;
    assert_eq!(transform_str_default(input).unwrap(), expected);
}

#[test]
fn test_document_untouched_without_paths() {
    let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg><text x="1" y="2">a &amp; b</text><line x1="0" x2="1"/></svg>"#;
    assert_eq!(transform_str_default(input).unwrap(), input);
}

#[test]
fn test_document_bad_path_data() {
    let input = "<svg>\n  <path d=\"M 0 0 X\"/>\n</svg>";
    let err = transform_str_default(input).unwrap_err().to_string();
    assert_contains!(err, "line 2");
    assert_contains!(err, "Unrecognized path command 'X' at offset 6");
}

#[test]
fn test_document_bad_xml() {
    assert!(transform_str_default("<svg><path d='M0 0'></svg>").is_err());
}

#[test]
fn test_document_join_lines() {
    let config = TransformConfig {
        join_lines: true,
        ..Default::default()
    };
    let input = r#"<svg>
  <line x1="0" y1="0" x2="10" y2="0" stroke="black"/>
  <line x1="10" y1="0" x2="10" y2="10" stroke="black"/>
  <line x1="10" y1="10" x2="0" y2="0" stroke="black"/>
</svg>"#;
    let output = transform_str(input, &config).unwrap();
    assert_eq!(
        output,
        r#"<svg>
  <path d="M10 10L0 0L10 0L10 10Z" stroke="black"/>
</svg>"#
    );

    // a lone line has nothing to join with
    let input = r#"<svg><line x1="0" y1="0" x2="10" y2="0"/></svg>"#;
    assert_eq!(transform_str(input, &config).unwrap(), input);
}

#[test]
fn test_document_join_lines_keeps_distinct_styles() {
    let config = TransformConfig {
        join_lines: true,
        ..Default::default()
    };
    let input = r#"<svg><line x2="5" stroke="red"/><line x2="5" stroke="blue"/></svg>"#;
    let output = transform_str(input, &config).unwrap();
    assert_not_contains!(output, "<path");
    assert_eq!(output, input);
}

#[test]
fn test_document_normalize_disabled() {
    let config = TransformConfig {
        normalize_paths: false,
        join_lines: true,
    };
    let input = r#"<svg><path d="M 0 0 L 1 1"/><line x2="1"/><line x1="1" x2="2"/></svg>"#;
    assert_eq!(
        transform_str(input, &config).unwrap(),
        r#"<svg><path d="M 0 0 L 1 1"/><path d="M0 0L1 0L2 0"/></svg>"#
    );
}
