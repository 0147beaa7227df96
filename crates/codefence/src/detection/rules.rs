//! Ordered detection rules.
//!
//! Each rule pairs a [`LanguageTag`] with a predicate over the raw sample.
//! Rule order is part of the public contract: several predicates can match
//! the same sample (a JSON object full of SQL keywords, say) and only the
//! first match governs. JavaScript is checked before CSS so object and
//! arrow syntax is not claimed by the brace-block heuristic.

use super::LanguageTag;
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) type Predicate = fn(&str) -> bool;

/// Priority-ordered rule table, highest first. The `text` fallback is not
/// listed; it is what [`super::detect`] returns when nothing here matches.
pub(super) const RULES: &[(LanguageTag, Predicate)] = &[
    (LanguageTag::Php, is_php),
    (LanguageTag::Html, is_html),
    (LanguageTag::Javascript, is_javascript),
    (LanguageTag::Css, is_css),
    (LanguageTag::Python, is_python),
    (LanguageTag::Json, is_json),
    (LanguageTag::Sql, is_sql),
    (LanguageTag::Bash, is_bash),
    (LanguageTag::Scss, is_scss),
];

/// `{ property: value }` block with an unquoted identifier-like property.
static CSS_BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\s*-?[a-zA-Z][a-zA-Z0-9_-]*\s*:\s*[^{}]+\}")
        .expect("CSS block regex pattern is valid and should compile")
});

/// Semicolon-terminated `property: value;` declaration.
static CSS_DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-?[a-zA-Z][a-zA-Z0-9_-]*\s*:\s*[^;{}]+;")
        .expect("CSS declaration regex pattern is valid and should compile")
});

static SQL_KEYWORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP)\b")
        .expect("SQL keyword regex pattern is valid and should compile")
});

static SHELL_COMMAND_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:echo|ls|cd|mkdir|rm)\b")
        .expect("Shell command regex pattern is valid and should compile")
});

fn is_php(sample: &str) -> bool {
    let trimmed = sample.trim();
    trimmed.contains("<?php") || trimmed.contains("&lt;?php")
}

fn is_html(sample: &str) -> bool {
    let lower = sample.to_lowercase();
    if lower.contains("<html") || lower.contains("<!doctype") {
        return true;
    }
    // Weak signal: any '<' and '>' anywhere counts as markup. Known to
    // misfire on samples that merely contain comparison operators or
    // generics-like syntax (`a<b>c`).
    sample.contains('<') && sample.contains('>')
}

fn is_javascript(sample: &str) -> bool {
    const MARKERS: &[&str] = &["function", "const ", "let ", "var ", "=>", "console.", "document."];
    MARKERS.iter().any(|marker| sample.contains(marker))
}

fn is_css(sample: &str) -> bool {
    if CSS_BLOCK_PATTERN.is_match(sample) {
        return true;
    }
    // Loose-fragment fallback: a `property: value;` declaration alongside a
    // brace, with none of the JavaScript declaration keywords present.
    // Object keys in JSON are quoted and carry no trailing semicolon, so
    // brace-wrapped JSON falls through to the JSON rule instead.
    const JS_KEYWORDS: &[&str] = &["function", "const ", "let "];
    (sample.contains('{') || sample.contains('}'))
        && CSS_DECLARATION_PATTERN.is_match(sample)
        && !JS_KEYWORDS.iter().any(|kw| sample.contains(kw))
}

fn is_python(sample: &str) -> bool {
    sample.contains("def ")
        || sample.contains("import ")
        || sample.contains("print(")
        || sample.contains("if __name__")
}

fn is_json(sample: &str) -> bool {
    let trimmed = sample.trim();
    let wrapped = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    // Brace wrapping alone is not enough; the sample must actually parse.
    wrapped && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
}

fn is_sql(sample: &str) -> bool {
    SQL_KEYWORD_PATTERN.is_match(sample)
}

fn is_bash(sample: &str) -> bool {
    sample.starts_with("#!") || sample.contains("$ ") || SHELL_COMMAND_PATTERN.is_match(sample)
}

fn is_scss(sample: &str) -> bool {
    sample.contains('$') && sample.contains(':') && sample.contains(';')
}
