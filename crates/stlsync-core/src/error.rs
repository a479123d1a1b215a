use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Domain failures callers may want to tell apart
///
/// These are raised wrapped in `anyhow::Error`; use
/// `err.downcast_ref::<ModelRepoError>()` to inspect them.
#[derive(Debug, Error)]
pub enum ModelRepoError {
    /// The source tree given to the copier does not exist
    #[error("Source directory does not exist: {}", .0.display())]
    SourceMissing(PathBuf),

    /// The destination tree given to the map updater does not exist
    #[error("Destination directory does not exist: {}", .0.display())]
    DestinationMissing(PathBuf),

    /// A root path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The map file exists but is not valid JSON
    #[error("Malformed map file {}: {source}", path.display())]
    MalformedMap {
        /// Path of the offending map file
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// A map entry lacks the structure the updater relies on
    #[error("Invalid entry for model '{name}' in {}: {reason}", path.display())]
    InvalidEntry {
        /// Path of the map file
        path: PathBuf,
        /// Model name of the entry
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// An ignore/include pattern could not be compiled
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as written
        pattern: String,
        /// Why it was rejected
        reason: String,
    },
}
