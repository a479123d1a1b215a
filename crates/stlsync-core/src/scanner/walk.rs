//! Recursive, sorted directory walk

use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::error::Result;

/// Collect every regular file under `base`, depth first, siblings sorted by
/// file name
///
/// Symlinks to files are reported as files. Symlinked directories are only
/// descended into when `follow_links` is set.
///
/// # Errors
///
/// Returns an error if directory traversal fails due to permission issues
/// or I/O errors.
pub fn files(base: &Path, follow_links: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(base)
        .follow_links(follow_links)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", base.display()))?;
        let file_type = entry.file_type();

        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if is_file {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
