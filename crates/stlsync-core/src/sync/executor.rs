//! File copy executor

use std::fs::{self, File, FileTimes};
use std::path::Path;

use anyhow::Context;

use super::CopyResult;
use super::actions::CopyAction;
use crate::error::Result;

/// Carries out copy actions, printing a notice for each copy
pub struct CopyExecutor {
    dry_run: bool,
}

impl CopyExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute a copy action
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the copy fails.
    pub fn execute(&self, action: &CopyAction, result: &mut CopyResult) -> Result<()> {
        match action {
            CopyAction::Create { name, source, dest } => {
                self.copy(name, source, dest)?;
                result.copied += 1;
            }
            CopyAction::Update { name, source, dest } => {
                self.copy(name, source, dest)?;
                result.updated += 1;
            }
            CopyAction::Skip { path, reason } => {
                tracing::debug!(path = %path.display(), reason = %reason, "skipping");
                result.unchanged += 1;
            }
        }
        Ok(())
    }

    fn copy(&self, name: &str, source: &Path, dest: &Path) -> Result<()> {
        if self.dry_run {
            eprintln!("[DRY RUN] Would copy \"{name}\" ({})", source.display());
            return Ok(());
        }

        println!("Copying \"{name}\" ({})", source.display());
        Self::copy_file(source, dest)
    }

    /// Copy a file with its permissions and timestamps, creating parent
    /// directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if any filesystem operation fails.
    pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Copies content and permission bits
        fs::copy(source, dest).with_context(|| {
            format!("Failed to copy {} to {}", source.display(), dest.display())
        })?;

        Self::copy_times(source, dest)
    }

    fn copy_times(source: &Path, dest: &Path) -> Result<()> {
        let metadata = fs::metadata(source)
            .with_context(|| format!("Failed to read metadata for: {}", source.display()))?;

        let mut times = FileTimes::new();
        if let Ok(modified) = metadata.modified() {
            times = times.set_modified(modified);
        }
        if let Ok(accessed) = metadata.accessed() {
            times = times.set_accessed(accessed);
        }

        let file = Self::open_for_times(dest)
            .with_context(|| format!("Failed to open {} to set timestamps", dest.display()))?;
        file.set_times(times)
            .with_context(|| format!("Failed to set timestamps on: {}", dest.display()))?;

        Ok(())
    }

    // The copy may carry read-only permissions; unix only needs ownership to set times
    #[cfg(unix)]
    fn open_for_times(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    #[cfg(not(unix))]
    fn open_for_times(path: &Path) -> std::io::Result<File> {
        File::options().write(true).open(path)
    }
}
