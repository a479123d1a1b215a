//! Configuration validation and error reporting

use super::patterns::PatternMatcher;
use super::types::Config;
use crate::error::Result;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is blank or fails to compile.
    pub fn validate(config: &Config) -> Result<()> {
        for pattern in &config.ignore {
            if pattern.trim().is_empty() {
                anyhow::bail!("Ignore pattern cannot be empty");
            }
        }

        for pattern in &config.include {
            if pattern.trim().is_empty() {
                anyhow::bail!("Include pattern cannot be empty");
            }
        }

        // Compile once so a bad glob fails here instead of mid-walk
        PatternMatcher::with_patterns(&config.ignore, &config.include)?;

        Ok(())
    }
}
