//! Codefence - Presentation Metadata for Code Snippets
//!
//! Codefence augments raw code snippets with the metadata a publishing
//! platform needs to present them: a heuristically detected language tag,
//! a stable deep-link anchor, and schema.org `SoftwareSourceCode`
//! structured data for search engines. Syntax highlighting itself is left
//! to an external highlighter; codefence only decides *what* the snippet
//! is and how to describe it.
//!
//! # Quick Start
//!
//! ```rust
//! use codefence::{LanguageTag, detect};
//!
//! assert_eq!(detect("SELECT * FROM users WHERE id = 1;"), LanguageTag::Sql);
//! assert_eq!(detect("plain prose, nothing code-like"), LanguageTag::Text);
//! ```
//!
//! # Architecture
//!
//! - **Detection** (`detection`): the ordered rule table classifying a text
//!   sample into one of ten fixed language tags
//! - **Snippet** (`snippet`): the snippet model handed over by the host,
//!   plus anchor/slug generation
//! - **SEO** (`seo`): request-scoped JSON-LD structured-data collection
//! - **Config** (`config`): TOML/YAML/JSON configuration loading and
//!   upward discovery

#![deny(unsafe_code)]

pub mod config;
pub mod detection;
pub mod error;
pub mod seo;
pub mod snippet;

pub use config::{CodefenceConfig, Theme};
pub use detection::{AUTO_LANGUAGE, LanguageTag, detect, resolve_language};
pub use error::{CodefenceError, Result};
pub use seo::{Person, SeoCollector, SourceCodeEntry, StructuredData};
pub use snippet::{ResolvedSnippet, SeoAttrs, Snippet, anchor_slug};
