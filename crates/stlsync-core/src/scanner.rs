//! Model file discovery
//!
//! Walks a directory tree and returns every STL model in it, in a stable
//! order: entries are visited sorted by file name at each level, so the
//! "first seen" model for a given name is the same on every platform.

mod filters;
mod walk;


use std::path::{Path, PathBuf};

use anyhow::Context;

pub use filters::{MODEL_EXTENSIONS, is_model_file, model_name};

use crate::config::PatternMatcher;
use crate::error::{ModelRepoError, Result};

/// A model file found during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFile {
    /// File name without its extension
    pub name: String,
    /// Path as found under the scan root
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative: PathBuf,
}

/// Model scanner
#[derive(Debug, Default)]
pub struct Scanner {
    follow_symlinks: bool,
    matcher: PatternMatcher,
}

impl Scanner {
    /// Create a new scanner
    #[must_use]
    pub const fn new(follow_symlinks: bool, matcher: PatternMatcher) -> Self {
        Self {
            follow_symlinks,
            matcher,
        }
    }

    /// Scan `root` recursively for model files
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is missing or not a directory, or if any
    /// directory under it cannot be read.
    pub fn scan(&self, root: &Path) -> Result<Vec<ModelFile>> {
        if !root.exists() {
            return Err(ModelRepoError::DestinationMissing(root.to_path_buf()).into());
        }
        if !root.is_dir() {
            return Err(ModelRepoError::NotADirectory(root.to_path_buf()).into());
        }

        let mut models = Vec::new();
        for path in walk::files(root, self.follow_symlinks)? {
            if !is_model_file(&path) {
                continue;
            }

            let relative = path
                .strip_prefix(root)
                .with_context(|| format!("Failed to strip prefix from {}", path.display()))?
                .to_path_buf();

            if !self.matcher.should_include(&relative, false) {
                tracing::debug!(path = %relative.display(), "ignored by pattern");
                continue;
            }

            let Some(name) = model_name(&path) else {
                continue;
            };

            models.push(ModelFile {
                name,
                path,
                relative,
            });
        }

        tracing::debug!(root = %root.display(), count = models.len(), "scan complete");
        Ok(models)
    }
}
