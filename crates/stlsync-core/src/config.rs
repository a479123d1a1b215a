//! Configuration file parsing, merging, and pattern matching
//!
//! This module handles:
//! - Config file discovery (global, project, and `--config`)
//! - TOML parsing with serde
//! - Config merging with precedence rules
//! - Gitignore-style pattern matching for excluded models

mod discovery;
mod merge;
mod patterns;
mod types;
mod validation;


use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles};
pub use merge::ConfigMerger;
pub use patterns::PatternMatcher;
pub use types::Config;
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all sources
    ///
    /// With `no_config` set, discovery is skipped and the defaults are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config path does not exist, or if
    /// any config file is unreadable, unparsable, or invalid.
    pub fn load(cli_config_path: Option<&Path>, no_config: bool) -> Result<Config> {
        if no_config {
            return Ok(Config::default());
        }

        let config_files = ConfigDiscovery::discover(cli_config_path)?;
        let merged = ConfigMerger::merge(&config_files)?;
        ConfigValidator::validate(&merged)?;

        Ok(merged)
    }

    /// Build the pattern matcher described by a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern cannot be compiled.
    pub fn matcher(config: &Config) -> Result<PatternMatcher> {
        if config.ignore.is_empty() && config.include.is_empty() {
            return Ok(PatternMatcher::new());
        }
        PatternMatcher::with_patterns(&config.ignore, &config.include)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_config_returns_defaults() {
        let config = ConfigManager::load(Some(Path::new("/nonexistent/stlsync.toml")), true)
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_matcher_without_patterns_includes_everything() {
        let matcher = ConfigManager::matcher(&Config::default()).unwrap();
        assert!(matcher.should_include(Path::new("any/Model.stl"), false));
    }
}
