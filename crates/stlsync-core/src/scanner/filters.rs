//! Model file recognition

use std::path::Path;

/// Extensions recognized as STL models
///
/// Matching is case-sensitive: only these two spellings count.
pub const MODEL_EXTENSIONS: [&str; 2] = ["stl", "STL"];

/// Check whether `path` names a model file by its extension
#[must_use]
pub fn is_model_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| MODEL_EXTENSIONS.iter().any(|m| ext == *m))
}

/// Model name for a file: its file name without the final extension
#[must_use]
pub fn model_name(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
