//! File comparison between a source model and its mirrored destination
//!
//! Equality is decided on content alone: sizes first, then a streaming
//! byte-for-byte read of both files. Timestamps are never consulted.

mod content;

use std::path::Path;

pub use content::ContentComparator;

use crate::error::Result;

/// Result of comparing a source file with its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonResult {
    /// Destination exists with identical content
    Identical,
    /// Only the source file exists
    SourceOnly,
    /// Both exist with different content
    Different,
}

/// File comparator
pub struct FileComparator;

impl FileComparator {
    /// Compare a source file with the destination path it mirrors to
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing or either file cannot be read.
    pub fn compare(source: &Path, destination: &Path) -> Result<ComparisonResult> {
        if !source.is_file() {
            anyhow::bail!("Source file does not exist: {}", source.display());
        }

        if !destination.exists() {
            return Ok(ComparisonResult::SourceOnly);
        }

        if ContentComparator::equal(source, destination)? {
            Ok(ComparisonResult::Identical)
        } else {
            Ok(ComparisonResult::Different)
        }
    }
}
