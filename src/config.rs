//! Application configuration management
//!
//! Configuration is read from environment variables (and a `.env` file when
//! present). Every value has a default, so an empty environment is valid.

use std::env;

use crate::constants::{
    DEFAULT_HIDDEN_CONTENT, DEFAULT_MAX_DEPTH, DEFAULT_RUST_LOG, DEFAULT_SHORTCODE_TAGS,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub render: RenderConfig,
    pub log: LogConfig,
}

/// Shortcode rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Content substituted for a hidden block
    pub hidden_content: String,
    /// Shortcode tags to expand, e.g. `hide` for `[hide]...[/hide]`
    pub shortcode_tags: Vec<String>,
    /// Maximum nesting depth for shortcodes inside resolved content
    pub max_depth: usize,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hidden_content: DEFAULT_HIDDEN_CONTENT.to_string(),
            shortcode_tags: DEFAULT_SHORTCODE_TAGS.iter().map(|t| t.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            rust_log: DEFAULT_RUST_LOG.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            render: RenderConfig::from_env()?,
            log: LogConfig::from_env()?,
        })
    }
}

impl RenderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let shortcode_tags = match env::var("HIDETHIS_SHORTCODE_TAGS") {
            Ok(raw) => parse_tags(&raw)?,
            Err(_) => defaults.shortcode_tags,
        };

        Ok(Self {
            hidden_content: env::var("HIDETHIS_HIDDEN_CONTENT").unwrap_or(defaults.hidden_content),
            shortcode_tags,
            max_depth: env::var("HIDETHIS_MAX_DEPTH")
                .unwrap_or_else(|_| DEFAULT_MAX_DEPTH.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HIDETHIS_MAX_DEPTH".to_string()))?,
        })
    }
}

impl LogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
            format: env::var("HIDETHIS_LOG_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .parse()?,
        })
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue("HIDETHIS_LOG_FORMAT".to_string())),
        }
    }
}

/// Parse a comma-separated tag list. Tags must be non-empty word characters.
fn parse_tags(raw: &str) -> Result<Vec<String>, ConfigError> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let valid = !tags.is_empty()
        && tags
            .iter()
            .all(|t| t.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    if !valid {
        return Err(ConfigError::InvalidValue("HIDETHIS_SHORTCODE_TAGS".to_string()));
    }
    Ok(tags)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
