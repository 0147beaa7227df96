//! Heuristic programming-language detection.
//!
//! Classifies a raw text sample into one of ten fixed language tags by
//! evaluating an ordered rule table; the first matching rule governs and
//! unmatched samples fall back to [`LanguageTag::Text`]. Detection is a
//! pure function over the sample: no state, no I/O, safe to call
//! concurrently from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use codefence::detection::{LanguageTag, detect, resolve_language};
//!
//! assert_eq!(detect("def main():\n    print('hi')"), LanguageTag::Python);
//!
//! // An explicit tag from the host skips detection entirely.
//! assert_eq!(resolve_language(Some("css"), "def main(): ..."), LanguageTag::Css);
//! ```

use crate::error::CodefenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod rules;

/// Sentinel language value meaning "no explicit choice, detect from content".
pub const AUTO_LANGUAGE: &str = "auto";

/// The closed set of classification labels.
///
/// `Text` is the universal fallback and never a match target itself. The
/// set is fixed: there is no registration mechanism for further languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Php,
    Html,
    Javascript,
    Css,
    Python,
    Json,
    Sql,
    Bash,
    Scss,
    Text,
}

impl LanguageTag {
    /// All supported tags, in rule priority order with the fallback last.
    pub fn all() -> &'static [LanguageTag] {
        &[
            LanguageTag::Php,
            LanguageTag::Html,
            LanguageTag::Javascript,
            LanguageTag::Css,
            LanguageTag::Python,
            LanguageTag::Json,
            LanguageTag::Sql,
            LanguageTag::Bash,
            LanguageTag::Scss,
            LanguageTag::Text,
        ]
    }

    /// Lowercase wire form, as used in serialized snippets and CSS class
    /// names (`language-<tag>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageTag::Php => "php",
            LanguageTag::Html => "html",
            LanguageTag::Javascript => "javascript",
            LanguageTag::Css => "css",
            LanguageTag::Python => "python",
            LanguageTag::Json => "json",
            LanguageTag::Sql => "sql",
            LanguageTag::Bash => "bash",
            LanguageTag::Scss => "scss",
            LanguageTag::Text => "text",
        }
    }

    /// Human-readable label for settings screens and snippet header badges.
    pub fn label(&self) -> &'static str {
        match self {
            LanguageTag::Php => "PHP",
            LanguageTag::Html => "HTML",
            LanguageTag::Javascript => "JavaScript",
            LanguageTag::Css => "CSS",
            LanguageTag::Python => "Python",
            LanguageTag::Json => "JSON",
            LanguageTag::Sql => "SQL",
            LanguageTag::Bash => "Bash",
            LanguageTag::Scss => "SCSS",
            LanguageTag::Text => "Plain text",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageTag {
    type Err = CodefenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageTag::all()
            .iter()
            .find(|tag| s.eq_ignore_ascii_case(tag.as_str()))
            .copied()
            .ok_or_else(|| CodefenceError::validation(format!("Unknown language tag: {}", s)))
    }
}

/// Classify a text sample into a language tag.
///
/// Total over all inputs: empty, huge, or thoroughly un-code-like samples
/// yield [`LanguageTag::Text`], never an error. Rules are evaluated in
/// priority order and the first match wins, so a sample containing both
/// `<?php` and `function` reports as PHP.
pub fn detect(sample: &str) -> LanguageTag {
    for (tag, predicate) in rules::RULES {
        if predicate(sample) {
            tracing::debug!(tag = tag.as_str(), "detection rule matched");
            return *tag;
        }
    }
    LanguageTag::Text
}

/// Resolve the language for a snippet given an optional explicit tag.
///
/// A present tag other than [`AUTO_LANGUAGE`] short-circuits detection.
/// Unrecognized explicit values fall back to detection so a stale host
/// attribute can never produce a tag outside the closed set.
pub fn resolve_language(requested: Option<&str>, sample: &str) -> LanguageTag {
    let Some(raw) = requested else {
        return detect(sample);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(AUTO_LANGUAGE) {
        return detect(sample);
    }

    match trimmed.parse::<LanguageTag>() {
        Ok(tag) => tag,
        Err(_) => {
            tracing::warn!(requested = trimmed, "unrecognized language tag, falling back to detection");
            detect(sample)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for tag in LanguageTag::all() {
            let parsed: LanguageTag = tag.as_str().parse().unwrap();
            assert_eq!(parsed, *tag);
        }
    }

    #[test]
    fn test_tag_parse_case_insensitive() {
        assert_eq!("PHP".parse::<LanguageTag>().unwrap(), LanguageTag::Php);
        assert_eq!("JavaScript".parse::<LanguageTag>().unwrap(), LanguageTag::Javascript);
    }

    #[test]
    fn test_tag_parse_unknown() {
        let err = "ruby".parse::<LanguageTag>().unwrap_err();
        assert!(err.to_string().contains("Unknown language tag"));
    }

    #[test]
    fn test_tag_serde_lowercase() {
        let json = serde_json::to_string(&LanguageTag::Javascript).unwrap();
        assert_eq!(json, "\"javascript\"");
        let tag: LanguageTag = serde_json::from_str("\"scss\"").unwrap();
        assert_eq!(tag, LanguageTag::Scss);
    }

    #[test]
    fn test_detect_is_idempotent() {
        let sample = "const add = (a, b) => a + b;";
        assert_eq!(detect(sample), detect(sample));
    }

    #[test]
    fn test_detect_default_fallback() {
        assert_eq!(detect(""), LanguageTag::Text);
        assert_eq!(detect("hello world"), LanguageTag::Text);
    }

    #[test]
    fn test_resolve_explicit_tag_wins() {
        assert_eq!(resolve_language(Some("php"), "const x = 1;"), LanguageTag::Php);
    }

    #[test]
    fn test_resolve_auto_sentinel_detects() {
        assert_eq!(resolve_language(Some("auto"), "const x = 1;"), LanguageTag::Javascript);
        assert_eq!(resolve_language(Some("AUTO"), "const x = 1;"), LanguageTag::Javascript);
    }

    #[test]
    fn test_resolve_absent_detects() {
        assert_eq!(resolve_language(None, "SELECT 1"), LanguageTag::Sql);
    }

    #[test]
    fn test_resolve_unknown_tag_falls_back_to_detection() {
        assert_eq!(resolve_language(Some("ruby"), "print('hi')"), LanguageTag::Python);
    }

    #[test]
    fn test_label_text() {
        assert_eq!(LanguageTag::Text.label(), "Plain text");
        assert_eq!(LanguageTag::Text.to_string(), "text");
    }
}
