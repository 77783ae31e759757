//! Classification of input text: full document, markup fragment or plain text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening `<body` tag followed by whitespace or `>`, any case
static BODY_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<body[\s>]").unwrap());

/// Check if the text opens a `<body>` element and so is a full document
pub fn has_body_tag(html: &str) -> bool {
    BODY_TAG_REGEX.is_match(html)
}

/// Check if the text contains any markup at all.
///
/// True for full documents and for fragments with at least one top-level
/// node that is not plain text. A line of prose is not HTML.
#[cfg(feature = "html")]
pub fn contains_html(text: &str) -> bool {
    if has_body_tag(text) {
        return true;
    }

    crate::html::parse_fragment(text)
        .iter()
        .any(|node| !node.is_text())
}
