//! HTML escaping for free text.

/// Escapes the five HTML-reserved characters.
///
/// | char | entity   |
/// |------|----------|
/// | `&`  | `&amp;`  |
/// | `<`  | `&lt;`   |
/// | `>`  | `&gt;`   |
/// | `"`  | `&quot;` |
/// | `'`  | `&#039;` |
///
/// Single pass, so entities produced here are never escaped a second time.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"];

    /// Sequential replacement, ampersand first.
    fn escape_chained(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#039;")
    }

    #[test]
    fn test_escape_each_reserved_char() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html(">"), "&gt;");
        assert_eq!(escape_html("\""), "&quot;");
        assert_eq!(escape_html("'"), "&#039;");
    }

    #[test]
    fn test_escape_existing_entity_is_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_script_tag() {
        assert_eq!(
            escape_html(r#"<script>alert('x" & y')</script>"#),
            "&lt;script&gt;alert(&#039;x&quot; &amp; y&#039;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("plain text, ünïcode 🎉"), "plain text, ünïcode 🎉");
        assert_eq!(escape_html(""), "");
    }

    proptest! {
        #[test]
        fn prop_matches_chained_replacement(s in ".*") {
            prop_assert_eq!(escape_html(&s), escape_chained(&s));
        }

        #[test]
        fn prop_no_raw_reserved_chars(s in "[a-z&<>\"' ]*") {
            let escaped = escape_html(&s);
            let mut stripped = escaped.clone();
            for entity in ENTITIES {
                stripped = stripped.replace(entity, "");
            }
            prop_assert!(!stripped.contains(['&', '<', '>', '"', '\'']));
        }
    }
}
