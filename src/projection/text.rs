//! Text helpers shared by every projector.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Anything from `<` up to the next `>`, well-formed tag or not.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

/// A human-readable field that WordPress returns either flattened or as
/// `{ "rendered": "...", "raw": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    /// Already-flattened value.
    Plain(String),
    /// Object form. `rendered` wins over `raw` when both are present.
    Structured {
        /// Pre-formatted HTML.
        #[serde(default)]
        rendered: Option<String>,
        /// Unformatted source, only returned in edit context.
        #[serde(default)]
        raw: Option<String>,
    },
}

impl RichText {
    /// Returns the `rendered` text if present, otherwise the plain value.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Plain(s) => Some(s),
            Self::Structured { rendered, raw } => rendered.as_deref().or(raw.as_deref()),
        }
    }
}

/// Extracts the display text of an optional rich-text field.
#[must_use]
pub fn rich_text(field: Option<&RichText>) -> Option<String> {
    field.and_then(RichText::text).map(str::to_string)
}

/// Removes every `<...>` substring.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Removes tags, then leading and trailing whitespace.
#[must_use]
pub fn strip_and_trim(html: &str) -> String {
    strip_tags(html).trim().to_string()
}

/// Keeps at most `max_chars` characters (not bytes).
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Strips, trims and truncates an optional rich-text field.
///
/// Absent fields project to an empty string.
#[must_use]
pub fn plain_summary(field: Option<&RichText>, max_chars: usize) -> String {
    field
        .and_then(RichText::text)
        .map(|html| truncate_chars(&strip_and_trim(html), max_chars))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_and_trim_removes_nested_tags() {
        assert_eq!(strip_and_trim("<p>Hello <b>world</b></p>  "), "Hello world");
    }

    #[test]
    fn strip_removes_malformed_tag_starts() {
        // `<3 ... >` is consumed as if it were a tag.
        assert_eq!(strip_tags("I <3 you > all"), "I  all");
        // No closing bracket, nothing to strip.
        assert_eq!(strip_tags("a < b"), "a < b");
    }

    #[test]
    fn strip_and_trim_is_idempotent() {
        let once = strip_and_trim("  <div><em>Already</em> plain </div>\n");
        assert_eq!(strip_and_trim(&once), once);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("short", 200), "short");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn rich_text_prefers_rendered() {
        let structured: RichText =
            serde_json::from_str(r#"{"rendered": "<b>R</b>", "raw": "raw"}"#).unwrap();
        assert_eq!(structured.text(), Some("<b>R</b>"));

        let raw_only: RichText = serde_json::from_str(r#"{"raw": "raw"}"#).unwrap();
        assert_eq!(raw_only.text(), Some("raw"));

        let plain: RichText = serde_json::from_str(r#""flat""#).unwrap();
        assert_eq!(plain.text(), Some("flat"));
    }

    #[test]
    fn plain_summary_absent_is_empty() {
        assert_eq!(plain_summary(None, 200), "");
        let empty_object: RichText = serde_json::from_str("{}").unwrap();
        assert_eq!(plain_summary(Some(&empty_object), 200), "");
    }
}
