//! Configuration loading and management.
//!
//! Provides the site-level settings for snippet enhancement and utilities
//! for loading them from TOML, YAML, or JSON files, including upward
//! discovery of a `codefence.toml` in the project hierarchy.

use crate::error::{CodefenceError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site-level snippet settings.
///
/// # Example
///
/// ```rust
/// use codefence::config::CodefenceConfig;
///
/// let config = CodefenceConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.default_language, "auto");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodefenceConfig {
    /// Master switch; disabled hosts bypass snippet enhancement entirely.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Highlighter theme applied site-wide.
    #[serde(default)]
    pub theme: Theme,

    /// Language applied to snippets without an explicit tag. `"auto"`
    /// requests detection.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Emit JSON-LD structured data for annotated snippets.
    #[serde(default = "default_true")]
    pub seo_enabled: bool,
}

impl Default for CodefenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            theme: Theme::default(),
            default_language: default_language(),
            seo_enabled: true,
        }
    }
}

/// Highlighter theme.
///
/// The highlighter itself is an external black box; the theme only selects
/// which of its stylesheets the host should load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Terminal,
}

impl Theme {
    /// Stylesheet URL for the external highlighter.
    pub fn stylesheet_url(&self) -> &'static str {
        match self {
            Theme::Light => "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.11.1/styles/github.min.css",
            Theme::Dark | Theme::Terminal => {
                "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.11.1/styles/github-dark.min.css"
            }
        }
    }
}

impl CodefenceConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `CodefenceError::Validation` if the file doesn't exist or is
    /// invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CodefenceError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| CodefenceError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CodefenceError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        serde_yaml_ng::from_str(&content)
            .map_err(|e| CodefenceError::validation(format!("Invalid YAML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CodefenceError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CodefenceError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Discover configuration in parent directories.
    ///
    /// Searches for `codefence.toml` in the current directory and its
    /// parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(CodefenceError::Io)?;

        loop {
            let candidate = current.join("codefence.toml");
            if candidate.exists() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    crate::detection::AUTO_LANGUAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = CodefenceConfig::default();
        assert!(config.enabled);
        assert!(config.seo_enabled);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.default_language, "auto");
    }

    #[test]
    fn test_theme_stylesheets() {
        assert!(Theme::Light.stylesheet_url().ends_with("github.min.css"));
        assert_eq!(Theme::Dark.stylesheet_url(), Theme::Terminal.stylesheet_url());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("codefence.toml");

        fs::write(
            &config_path,
            r#"
enabled = false
theme = "terminal"
default_language = "bash"
        "#,
        )
        .unwrap();

        let config = CodefenceConfig::from_toml_file(&config_path).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.theme, Theme::Terminal);
        assert_eq!(config.default_language, "bash");
        // Unset keys take their defaults.
        assert!(config.seo_enabled);
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("codefence.yaml");

        fs::write(&config_path, "theme: dark\nseo_enabled: false\n").unwrap();

        let config = CodefenceConfig::from_yaml_file(&config_path).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.seo_enabled);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("codefence.json");

        fs::write(&config_path, r#"{"default_language": "php"}"#).unwrap();

        let config = CodefenceConfig::from_json_file(&config_path).unwrap();
        assert_eq!(config.default_language, "php");
        assert!(config.enabled);
    }

    #[test]
    fn test_invalid_toml_is_validation_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("codefence.toml");
        fs::write(&config_path, "enabled = maybe").unwrap();

        let err = CodefenceConfig::from_toml_file(&config_path).unwrap_err();
        assert!(matches!(err, CodefenceError::Validation { .. }));
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_missing_file_is_validation_error() {
        let err = CodefenceConfig::from_toml_file("/nonexistent/codefence.toml").unwrap_err();
        assert!(matches!(err, CodefenceError::Validation { .. }));
    }

    #[test]
    fn test_discover_codefence_toml() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("codefence.toml"), "theme = \"dark\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();
        let result = CodefenceConfig::discover();
        std::env::set_current_dir(original).unwrap();

        let config = result.unwrap().expect("config should be discovered from parent dir");
        assert_eq!(config.theme, Theme::Dark);
    }
}
