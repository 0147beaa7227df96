//! schema.org structured data for code snippets.
//!
//! Collects `SoftwareSourceCode` entries over one page render and emits a
//! single JSON-LD payload for the page head. The collector is request
//! scoped and passed explicitly: concurrent page renders each own their
//! collector, so no process-wide state is involved.
//!
//! # Example
//!
//! ```rust
//! use codefence::{CodefenceConfig, SeoCollector, Snippet};
//!
//! let config = CodefenceConfig::default();
//! let snippet = Snippet::new("SELECT * FROM users;");
//! let resolved = snippet.resolve(&config);
//!
//! let mut collector = SeoCollector::new();
//! collector.record(&resolved, "https://example.com/post", Some("Ada"));
//! let data = collector.finish(&config).expect("one snippet was recorded");
//! assert!(data.to_json_ld().unwrap().contains("SoftwareSourceCode"));
//! ```

use crate::config::CodefenceConfig;
use crate::error::Result;
use crate::snippet::ResolvedSnippet;
use serde::{Deserialize, Serialize};

/// schema.org `Person`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub entity_type: String,
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            entity_type: "Person".to_string(),
            name: name.into(),
        }
    }
}

/// schema.org `SoftwareSourceCode` entry for one snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCodeEntry {
    #[serde(rename = "@type")]
    pub entity_type: String,

    /// Canonical URL of the page hosting the snippet.
    #[serde(rename = "codeRepository")]
    pub code_repository: String,

    #[serde(rename = "codeSampleType")]
    pub code_sample_type: String,

    #[serde(rename = "programmingLanguage")]
    pub programming_language: String,

    /// The snippet text itself.
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,
}

/// Page-level JSON-LD wrapper: a `WebPage` whose `mainEntity` lists every
/// annotated snippet on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: String,

    #[serde(rename = "@type")]
    pub entity_type: String,

    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<SourceCodeEntry>,
}

impl StructuredData {
    /// Serialize to a compact JSON-LD string.
    pub fn to_json_ld(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The `<script>` wrapper hosts embed in the page head. This is the
    /// only markup codefence produces; page composition stays with the
    /// host.
    pub fn to_script_tag(&self) -> Result<String> {
        Ok(format!(
            "<script type=\"application/ld+json\">{}</script>",
            self.to_json_ld()?
        ))
    }
}

/// Request-scoped collector for one page render.
#[derive(Debug, Default)]
pub struct SeoCollector {
    entries: Vec<SourceCodeEntry>,
}

impl SeoCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved snippet. Snippets with per-block SEO disabled are
    /// skipped.
    pub fn record(&mut self, resolved: &ResolvedSnippet, page_url: &str, author: Option<&str>) {
        let seo = &resolved.snippet.seo;
        if !seo.enabled {
            tracing::debug!(anchor = resolved.anchor.as_str(), "snippet excluded from structured data");
            return;
        }

        self.entries.push(SourceCodeEntry {
            entity_type: "SoftwareSourceCode".to_string(),
            code_repository: page_url.to_string(),
            code_sample_type: seo.sample_type.clone(),
            programming_language: resolved.language.as_str().to_string(),
            text: resolved.snippet.content.clone(),
            name: seo.title.clone(),
            description: seo.description.clone(),
            author: author.map(Person::new),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the page payload, consuming the collector.
    ///
    /// Returns `None` when nothing was recorded or structured data is
    /// globally disabled.
    pub fn finish(self, config: &CodefenceConfig) -> Option<StructuredData> {
        if self.entries.is_empty() || !config.seo_enabled {
            return None;
        }

        Some(StructuredData {
            context: "https://schema.org".to_string(),
            entity_type: "WebPage".to_string(),
            main_entity: self.entries,
        })
    }
}
