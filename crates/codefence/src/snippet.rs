//! Snippet model and deep-link anchor generation.
//!
//! A [`Snippet`] is the value a host platform hands over for one code
//! block: the raw content plus presentation attributes. [`Snippet::resolve`]
//! applies the configured defaults and the explicit-language contract and
//! produces a [`ResolvedSnippet`] ready for rendering and SEO annotation.

use crate::config::CodefenceConfig;
use crate::detection::{LanguageTag, resolve_language};
use ahash::AHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Hex digits of the content hash kept in generated anchors.
const ANCHOR_HASH_LEN: usize = 8;

/// One code block as submitted by the host platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    /// Raw snippet text. May be empty; never interpreted, only classified.
    pub content: String,

    /// Explicit language tag, or `"auto"`/absent to request detection.
    #[serde(default)]
    pub language: Option<String>,

    /// Optional note shown above the block.
    #[serde(default)]
    pub note: Option<String>,

    /// Show the copy-to-clipboard affordance.
    #[serde(default = "default_true")]
    pub show_copy: bool,

    /// Show the share-link affordance.
    #[serde(default = "default_true")]
    pub show_share: bool,

    /// Custom anchor slug; generated from language and content when absent.
    #[serde(default)]
    pub slug: Option<String>,

    /// Structured-data attributes for this block.
    #[serde(default)]
    pub seo: SeoAttrs,
}

/// Per-snippet structured-data attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoAttrs {
    /// Include this snippet in the page's JSON-LD payload.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// schema.org `name` for the code sample.
    #[serde(default)]
    pub title: Option<String>,

    /// schema.org `description` for the code sample.
    #[serde(default)]
    pub description: Option<String>,

    /// schema.org `codeSampleType` value.
    #[serde(default = "default_sample_type")]
    pub sample_type: String,
}

impl Default for SeoAttrs {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            description: None,
            sample_type: default_sample_type(),
        }
    }
}

/// A snippet with its presentation metadata resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSnippet {
    #[serde(flatten)]
    pub snippet: Snippet,

    /// Language tag after applying the explicit-tag contract.
    pub language: LanguageTag,

    /// Unique element id for the rendered block (`code-block-<uuid>`).
    pub element_id: String,

    /// Stable anchor slug for deep links.
    pub anchor: String,
}

impl Snippet {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: None,
            note: None,
            show_copy: true,
            show_share: true,
            slug: None,
            seo: SeoAttrs::default(),
        }
    }

    /// Resolve presentation metadata against the given configuration.
    ///
    /// The snippet's own language attribute wins over the configured
    /// default; either may be the `"auto"` sentinel, in which case the
    /// content is classified. The element id is freshly generated per call;
    /// the anchor is stable for identical content.
    pub fn resolve(&self, config: &CodefenceConfig) -> ResolvedSnippet {
        let requested = self.language.as_deref().unwrap_or(&config.default_language);
        let language = resolve_language(Some(requested), &self.content);
        let anchor = anchor_slug(self.slug.as_deref(), language, &self.content);

        ResolvedSnippet {
            snippet: self.clone(),
            language,
            element_id: format!("code-block-{}", Uuid::new_v4()),
            anchor,
        }
    }
}

/// Anchor slug for deep links.
///
/// A custom slug is sanitized to `[a-z0-9-]`; without one (or when
/// sanitization leaves nothing) the slug is `<language>-<hash>` where the
/// hash is the first [`ANCHOR_HASH_LEN`] hex digits of a 64-bit content
/// hash, so identical content always links to the same place.
pub fn anchor_slug(custom: Option<&str>, language: LanguageTag, content: &str) -> String {
    if let Some(slug) = custom {
        let sanitized = sanitize_slug(slug);
        if !sanitized.is_empty() {
            return sanitized;
        }
    }
    format!("{}-{}", language, content_hash(content))
}

fn sanitize_slug(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    out
}

fn content_hash(content: &str) -> String {
    // AHasher::default() is keyed with fixed constants, so hashes are
    // stable across processes.
    let mut hasher = AHasher::default();
    content.hash(&mut hasher);
    let digest = hex::encode(hasher.finish().to_be_bytes());
    digest[..ANCHOR_HASH_LEN].to_string()
}

fn default_true() -> bool {
    true
}

fn default_sample_type() -> String {
    "example".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_slug() {
        assert_eq!(sanitize_slug("My Custom Slug!"), "my-custom-slug");
        assert_eq!(sanitize_slug("--already--dashed--"), "already-dashed");
        assert_eq!(sanitize_slug("???"), "");
    }

    #[test]
    fn test_anchor_prefers_custom_slug() {
        let anchor = anchor_slug(Some("Install Notes"), LanguageTag::Bash, "echo hi");
        assert_eq!(anchor, "install-notes");
    }

    #[test]
    fn test_anchor_generated_form() {
        let anchor = anchor_slug(None, LanguageTag::Sql, "SELECT 1;");
        assert!(anchor.starts_with("sql-"));
        assert_eq!(anchor.len(), "sql-".len() + 8);
    }

    #[test]
    fn test_anchor_stable_for_same_content() {
        let a = anchor_slug(None, LanguageTag::Text, "same content");
        let b = anchor_slug(None, LanguageTag::Text, "same content");
        assert_eq!(a, b);
        let c = anchor_slug(None, LanguageTag::Text, "different content");
        assert_ne!(a, c);
    }

    #[test]
    fn test_anchor_unusable_custom_slug_falls_back() {
        let anchor = anchor_slug(Some("!!!"), LanguageTag::Css, "a { color: red }");
        assert!(anchor.starts_with("css-"));
    }

    #[test]
    fn test_content_hash_is_hex() {
        let hash = content_hash("");
        assert_eq!(hash.len(), ANCHOR_HASH_LEN);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
