//! Gitignore-style pattern matching using the ignore crate

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{ModelRepoError, Result};

/// Pattern matcher for model inclusion/exclusion
///
/// Paths handed to [`PatternMatcher::should_include`] are relative to the
/// tree being walked.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    gitignore: Option<Gitignore>,
}

impl PatternMatcher {
    /// Create a matcher that includes everything
    #[must_use]
    pub const fn new() -> Self {
        Self { gitignore: None }
    }

    /// Build pattern matcher from ignore and include patterns
    ///
    /// # Errors
    ///
    /// Returns an error if patterns are invalid.
    pub fn with_patterns(ignore_patterns: &[String], include_patterns: &[String]) -> Result<Self> {
        let mut builder = GitignoreBuilder::new("");

        for pattern in ignore_patterns {
            builder
                .add_line(None, pattern)
                .map_err(|e| Self::invalid(pattern, &e))?;
        }

        // Include patterns are negated ignores
        for pattern in include_patterns {
            let negated = format!("!{pattern}");
            builder
                .add_line(None, &negated)
                .map_err(|e| Self::invalid(pattern, &e))?;
        }

        let gitignore = builder.build().map_err(|e| ModelRepoError::InvalidPattern {
            pattern: String::from("<set>"),
            reason: e.to_string(),
        })?;

        Ok(Self {
            gitignore: Some(gitignore),
        })
    }

    /// Check if a path should be included based on patterns
    ///
    /// A file is excluded when it, or any directory above it, matches an
    /// ignore pattern that no include pattern overrides.
    #[must_use]
    pub fn should_include(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.as_ref().is_none_or(|gi| {
            !gi.matched_path_or_any_parents(path, is_dir).is_ignore()
        })
    }

    fn invalid(pattern: &str, err: &ignore::Error) -> ModelRepoError {
        ModelRepoError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}
