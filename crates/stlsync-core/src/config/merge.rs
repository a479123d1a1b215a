//! Configuration merging with precedence rules
//!
//! # Merging Semantics
//!
//! - **Arrays** (`ignore`, `include`): additive, values from every config are combined
//! - **Booleans**: OR semantics, if any config sets `true` the result is `true`
//!
//! A lower-precedence config that enables `dry_run` or `follow_symlinks`
//! cannot be switched off by a higher-precedence one.

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::Result;

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge discovered config files
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. .stlsync.toml
    /// 3. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        // Lowest precedence first
        for path in [&files.global, &files.project, &files.cli]
            .into_iter()
            .flatten()
        {
            Self::merge_into(&mut merged, path)?;
        }

        Ok(merged)
    }

    /// Load and merge a single config file into the existing config
    fn merge_into(base: &mut Config, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "merging config file");

        base.ignore.extend(config.ignore);
        base.include.extend(config.include);
        base.follow_symlinks |= config.follow_symlinks;
        base.dry_run |= config.dry_run;

        Ok(())
    }
}
