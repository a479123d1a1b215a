//! Component map update pass

use std::path::{Path, PathBuf};

use super::MapUpdateResult;
use super::store::MapStore;
use super::types::RecordOutcome;
use crate::config::{Config, ConfigManager};
use crate::error::{ModelRepoError, Result};
use crate::paths;
use crate::scanner::{ModelFile, Scanner};

/// Indexes every model in the library tree into the component map
pub struct MapUpdater {
    scanner: Scanner,
    dry_run: bool,
}

impl MapUpdater {
    /// Create an updater from a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured patterns cannot be compiled.
    pub fn new(config: &Config) -> Result<Self> {
        let matcher = ConfigManager::matcher(config)?;
        Ok(Self {
            scanner: Scanner::new(config.follow_symlinks, matcher),
            dry_run: config.dry_run,
        })
    }

    /// Bring the map at `map_file` up to date with the models under `dest_root`
    ///
    /// Entries are only ever added to: a name keeps the first path recorded
    /// for it, later paths go to its `duplicates`, and names whose files
    /// have disappeared keep their entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the map file is malformed, the destination tree
    /// is missing or unreadable, or the map cannot be written.
    pub fn update(&self, dest_root: &Path, map_file: &Path) -> Result<MapUpdateResult> {
        self.update_with_pending(dest_root, map_file, &[])
    }

    /// Like [`MapUpdater::update`], also indexing `pending` models that a
    /// dry-run copy would have placed under `dest_root`
    ///
    /// Pending models are merged into the scan in walk order, so the preview
    /// matches what a real copy followed by an update would record. The
    /// destination may be missing when there are pending models, since the
    /// copy would create it.
    ///
    /// # Errors
    ///
    /// Returns an error if the map file is malformed, the destination tree
    /// is missing with nothing pending, is unreadable, or the map cannot be
    /// written.
    pub fn update_with_pending(
        &self,
        dest_root: &Path,
        map_file: &Path,
        pending: &[ModelFile],
    ) -> Result<MapUpdateResult> {
        let mut map = MapStore::load(map_file)?;

        let dest_exists = dest_root.exists();
        if !dest_exists && pending.is_empty() {
            return Err(ModelRepoError::DestinationMissing(dest_root.to_path_buf()).into());
        }

        let map_dir = paths::map_directory(map_file)?;
        tracing::info!(
            dest = %dest_root.display(),
            map = %map_file.display(),
            known = map.len(),
            "updating component map"
        );

        let mut result = MapUpdateResult {
            map_file: map_file.to_path_buf(),
            ..MapUpdateResult::default()
        };

        let mut models = if dest_exists {
            self.scanner.scan(dest_root)?
        } else {
            tracing::debug!(dest = %dest_root.display(), "destination not created yet");
            Vec::new()
        };
        if !pending.is_empty() {
            for model in pending {
                if !models.iter().any(|m| m.relative == model.relative) {
                    models.push(model.clone());
                }
            }
            // Component-wise path order is the sorted walk's order
            models.sort_by(|a, b| a.relative.cmp(&b.relative));
        }

        for model in models {
            let location = Self::map_relative(&model.path, &map_dir)?;

            match map.record(&model.name, &location) {
                RecordOutcome::NewModel => {
                    println!("New model: {}", model.name);
                    result.new_models.push(model.name);
                }
                RecordOutcome::NewDuplicate => {
                    println!("New duplicate model: {}", model.name);
                    result.new_duplicates.push(model.name);
                }
                outcome @ (RecordOutcome::AlreadyIndexed | RecordOutcome::KnownDuplicate) => {
                    tracing::debug!(model = %model.name, location = %location, ?outcome, "already recorded");
                }
            }
        }

        result.total = map.len();

        if self.dry_run {
            eprintln!("[DRY RUN] Would write map file: {}", map_file.display());
        } else {
            MapStore::save(map_file, &map)?;
            result.written = true;
        }

        Ok(result)
    }

    /// Location of a model as stored in the map: relative to the map's
    /// directory, `/`-separated
    fn map_relative(model_path: &Path, map_dir: &Path) -> Result<String> {
        let absolute: PathBuf = paths::absolute(model_path)?;
        Ok(paths::to_portable(&paths::relative_to(&absolute, map_dir)))
    }
}
