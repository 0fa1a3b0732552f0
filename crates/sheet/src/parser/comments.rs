//! Block comment stripping.
//!
//! Comments are removed before parsing so neither selectors nor raw
//! declaration values ever see them. Comment markers inside quoted strings
//! are left alone.

use crate::error::SheetError;

/// Removes every `/* ... */` comment from `source`.
///
/// Each comment is replaced by a single space so tokens on either side
/// stay separated.
pub fn strip_comments(source: &str) -> Result<String, SheetError> {
    let mut output = String::with_capacity(source.len());
    let mut chars = source.char_indices().peekable();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    while let Some((i, c)) = chars.next() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            output.push(c);
            continue;
        }

        if c == '"' || c == '\'' {
            quote = Some(c);
            output.push(c);
            continue;
        }

        if c == '/' && matches!(chars.peek(), Some((_, '*'))) {
            chars.next();
            let mut closed = false;
            while let Some((_, inner)) = chars.next() {
                if inner == '*' && matches!(chars.peek(), Some((_, '/'))) {
                    chars.next();
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(SheetError::UnterminatedComment(i));
            }
            output.push(' ');
            continue;
        }

        output.push(c);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_inline_comment() {
        let out = strip_comments("a { b: c; /* note */ }").unwrap();
        assert_eq!(out, "a { b: c;   }");
    }

    #[test]
    fn keeps_markers_inside_strings() {
        let out = strip_comments("a { content: \"/* x */\"; }").unwrap();
        assert!(out.contains("\"/* x */\""));
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        let css = r#"a { content: "\"/*"; } /* gone */ b { c: d; }"#;
        let out = strip_comments(css).unwrap();
        assert_eq!(out, r#"a { content: "\"/*"; }   b { c: d; }"#);
    }

    #[test]
    fn unterminated_comment_reports_offset() {
        let err = strip_comments("a {} /* open").unwrap_err();
        assert!(matches!(err, SheetError::UnterminatedComment(5)));
    }
}
