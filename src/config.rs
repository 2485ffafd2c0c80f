//! Post configuration.
//!
//! Controls the ranges used when a post is created without explicit like and
//! retweet counts. Loaded from a TOML file; every key is optional and falls
//! back to the stock default.
//!
//! ## Configuration Options
//!
//! ```toml
//! [engagement]
//! likes_min = -10000    # Lowest random like count (inclusive)
//! likes_max = 90000     # Upper bound for random like counts (exclusive)
//! retweets_max = 50000  # Upper bound for random retweet counts (exclusive)
//! ```
//!
//! Random retweet counts always start at 0, so a randomly seeded post can
//! never trip the negative-retweets check.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostConfig {
    /// Ranges for randomly generated engagement counts.
    pub engagement: EngagementConfig,
}

impl PostConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engagement.validate()
    }
}

/// Ranges for random likes and retweets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngagementConfig {
    pub likes_min: i32,
    pub likes_max: i32,
    pub retweets_max: i32,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            likes_min: -10_000,
            likes_max: 90_000,
            retweets_max: 50_000,
        }
    }
}

impl EngagementConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.likes_min >= self.likes_max {
            return Err(ConfigError::Validation(format!(
                "engagement.likes_min ({}) must be below engagement.likes_max ({})",
                self.likes_min, self.likes_max
            )));
        }
        if self.retweets_max <= 0 {
            return Err(ConfigError::Validation(
                "engagement.retweets_max must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Half-open range random like counts are drawn from.
    pub fn likes_range(&self) -> Range<i32> {
        self.likes_min..self.likes_max
    }

    /// Half-open range random retweet counts are drawn from.
    pub fn retweets_range(&self) -> Range<i32> {
        0..self.retweets_max
    }
}

/// Parse and validate a config from TOML text.
pub fn parse_config(content: &str) -> Result<PostConfig, ConfigError> {
    let config: PostConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file.
///
/// A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<PostConfig, ConfigError> {
    if !path.exists() {
        return Ok(PostConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// A documented config file with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r#"# photo-post configuration
# All options are optional - defaults shown below.

[engagement]
# Lowest like count a randomly seeded post can start with (inclusive).
# Likes may be negative: dislikes are not floored at zero.
likes_min = -10000

# Upper bound for random like counts (exclusive).
likes_max = 90000

# Upper bound for random retweet counts (exclusive). The lower bound is 0.
retweets_max = 50000
"#
}
