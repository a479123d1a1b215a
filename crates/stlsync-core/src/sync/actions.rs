//! Copy action determination logic

use std::path::PathBuf;

use crate::comparison::ComparisonResult;

/// Action to take for one source model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyAction {
    /// Copy a model that has no counterpart in the destination yet
    Create {
        /// Model name, used in the copy notice
        name: String,
        /// Source file
        source: PathBuf,
        /// Mirrored destination file
        dest: PathBuf,
    },
    /// Overwrite a destination model whose content differs
    Update {
        /// Model name, used in the copy notice
        name: String,
        /// Source file
        source: PathBuf,
        /// Mirrored destination file
        dest: PathBuf,
    },
    /// Nothing to do
    Skip {
        /// Destination file left alone
        path: PathBuf,
        /// Why nothing is done
        reason: String,
    },
}

/// Resolves comparison results into copy actions
pub struct CopyActionResolver;

impl CopyActionResolver {
    /// Determine the action for a source/destination pair
    #[must_use]
    pub fn resolve(
        name: String,
        source: PathBuf,
        dest: PathBuf,
        comparison: ComparisonResult,
    ) -> CopyAction {
        match comparison {
            ComparisonResult::SourceOnly => CopyAction::Create { name, source, dest },
            ComparisonResult::Different => CopyAction::Update { name, source, dest },
            ComparisonResult::Identical => CopyAction::Skip {
                path: dest,
                reason: "identical content".to_string(),
            },
        }
    }
}
