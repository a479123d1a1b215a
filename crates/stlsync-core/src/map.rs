//! Component map: the JSON index of every model name in the library
//!
//! Each key is a model name. Its entry records the first location seen for
//! that name (`filename`) and any further locations (`duplicates`), all
//! relative to the directory that holds the map file.

mod reporting;
mod store;
mod types;
mod updater;

use std::path::PathBuf;

pub use reporting::MapReporter;
pub use store::MapStore;
pub use types::{ComponentEntry, ComponentMap, RecordOutcome};
pub use updater::MapUpdater;

/// Map update result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapUpdateResult {
    /// Map file that was updated
    pub map_file: PathBuf,
    /// Names added to the map, in discovery order
    pub new_models: Vec<String>,
    /// Names that gained a duplicate path, in discovery order
    pub new_duplicates: Vec<String>,
    /// Distinct model names in the map after the update
    pub total: usize,
    /// Whether the map file was written (false on dry runs)
    pub written: bool,
}
