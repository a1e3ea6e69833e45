//! Shortcode attributes.
//!
//! Attributes arrive as the raw text between the tag name and the closing
//! bracket, e.g. `for="editor, :publish_posts" exclude='userid:3' test=content`.
//! Missing attributes take their defaults; unknown names are ignored.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXCLUDE, DEFAULT_FOR, DEFAULT_TEST};

/// `name="value"`, `name='value'` or `name=value`.
static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"']+))"#)
        .expect("attribute pattern is valid")
});

/// Attributes controlling one content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    /// Who the block is shown for.
    #[serde(rename = "for")]
    pub for_spec: String,
    /// Who the block is hidden from again after the inclusion pass.
    pub exclude: String,
    /// Optional self-test annotation mode (`content` or `empty`).
    pub test: String,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            for_spec: DEFAULT_FOR.to_string(),
            exclude: DEFAULT_EXCLUDE.to_string(),
            test: DEFAULT_TEST.to_string(),
        }
    }
}

impl Attributes {
    pub fn new(
        for_spec: impl Into<String>,
        exclude: impl Into<String>,
        test: impl Into<String>,
    ) -> Self {
        Self {
            for_spec: for_spec.into(),
            exclude: exclude.into(),
            test: test.into(),
        }
    }

    /// Parse a raw attribute string. Attribute names are case-insensitive.
    pub fn parse(raw: &str) -> Self {
        let mut attributes = Self::default();

        for caps in ATTRIBUTE_PATTERN.captures_iter(raw) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            match caps[1].to_ascii_lowercase().as_str() {
                "for" => attributes.for_spec = value,
                "exclude" => attributes.exclude = value,
                "test" => attributes.test = value,
                other => tracing::debug!(attribute = other, "ignoring unknown attribute"),
            }
        }

        attributes
    }
}
