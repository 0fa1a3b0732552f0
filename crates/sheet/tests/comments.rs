use sheet::parse_stylesheet;

#[test]
fn test_block_comments() {
    let css = r#"
        body {
            /* this is a comment */
            display: grid;
        }
    "#;
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].declarations.len(), 1);
}

#[test]
fn test_inline_comments() {
    let css = r#"
        body {
            display: grid; /* inline comment */
            margin: 0px;
        }
    "#;
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rules[0].property_value("margin"), Some("0px"));
}

#[test]
fn test_comment_inside_value() {
    let css = "body { grid-template-rows: 64px /* header */ auto 64px; }";
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(
        sheet.rules[0].property_value("grid-template-rows"),
        Some("64px auto 64px")
    );
}

#[test]
fn test_comment_before_rule() {
    let css = r#"
        /* Layout */
        main { overflow-y: auto; }
    "#;
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rules[0].selector_text(), "main");
}

#[test]
fn test_unterminated_comment_is_an_error() {
    assert!(parse_stylesheet("main { display: flex; } /* oops").is_err());
}

#[test]
fn test_escaped_quote_inside_string() {
    let css = r#"p::before { content: "\"/*"; } main { display: flex; }"#;
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rules.len(), 2);
    assert_eq!(sheet.rules[0].property_value("content"), Some(r#""\"/*""#));
    assert_eq!(sheet.rules[1].property_value("display"), Some("flex"));
}
