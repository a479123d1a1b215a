//! Lexical path helpers
//!
//! Map entries record model locations relative to the directory holding the
//! map file. These helpers work on path text only and never touch the
//! filesystem beyond reading the current directory, so symlinks inside the
//! trees are kept as written.

use std::path::{Component, Path, PathBuf};

use anyhow::Context;

use crate::error::Result;

/// Make `path` absolute against the current directory and collapse `.` and
/// `..` segments.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve absolute path for: {}", path.display()))?;
    Ok(normalize(&joined))
}

/// Collapse `.` and `..` segments without consulting the filesystem
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Express `path` relative to `base`, inserting `..` segments as needed
///
/// Both arguments should already be absolute and normalized. When the two
/// share no root (different drives on Windows), `path` is returned as is.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    if path_parts.first() != base_parts.first() {
        return path.to_path_buf();
    }

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

/// Render a relative path with `/` separators regardless of platform
#[must_use]
pub fn to_portable(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Directory the map file lives in, as an absolute path
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn map_directory(map_file: &Path) -> Result<PathBuf> {
    let abs = absolute(map_file)?;
    Ok(abs
        .parent()
        .map_or_else(|| abs.clone(), Path::to_path_buf))
}
