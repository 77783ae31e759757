//! Utility functions and constants for DSL text generation.

/// Delimiter of multi-line string literals
pub const TRIPLE_QUOTE: &str = "\"\"\"";

/// Elements whose text children are verbatim data rather than markup text
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Check if a tag holds raw data
pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Escape a value for use inside a double-quoted string literal.
///
/// Backslashes go first so the escapes added for `"` and `$` are not doubled.
pub fn escape_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' | '"' | '$' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Trim `text`, split it on `line_break` and trim every line.
///
/// Whitespace-only input yields no lines at all. Blank lines inside the text
/// are kept.
pub fn trim_lines<'a>(text: &'a str, line_break: &str) -> Vec<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed.split(line_break).map(str::trim).collect()
}

/// Turn a CSS class name into an identifier
pub fn class_identifier(class: &str) -> String {
    class.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "plain");
        assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string("$price"), "\\$price");
        assert_eq!(escape_string(r"C:\dir"), r"C:\\dir");
        assert_eq!(escape_string(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn test_trim_lines() {
        assert!(trim_lines("   \n\t  ", "\n").is_empty());
        assert_eq!(trim_lines(" text ", "\n"), ["text"]);
        assert_eq!(
            trim_lines("\n    line1\n    line2\n", "\n"),
            ["line1", "line2"]
        );
        assert_eq!(trim_lines("a\n\n b", "\n"), ["a", "", "b"]);
        assert_eq!(trim_lines("a\r\nb", "\n"), ["a", "b"]);
    }

    #[test]
    fn test_is_raw_text() {
        assert!(is_raw_text("script"));
        assert!(is_raw_text("STYLE"));
        assert!(!is_raw_text("textarea"));
    }

    #[test]
    fn test_class_identifier() {
        assert_eq!(class_identifier("btn-info"), "btn_info");
        assert_eq!(class_identifier("main1"), "main1");
    }
}
