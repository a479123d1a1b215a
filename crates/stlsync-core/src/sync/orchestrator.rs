//! Copy orchestration - walks the source tree and mirrors models

use std::path::Path;

use super::CopyResult;
use super::actions::CopyActionResolver;
use super::executor::CopyExecutor;
use crate::comparison::{ComparisonResult, FileComparator};
use crate::config::{Config, ConfigManager};
use crate::error::{ModelRepoError, Result};
use crate::scanner::{ModelFile, Scanner};

/// Mirrors new and changed models from a source tree into the library
pub struct ModelCopier {
    scanner: Scanner,
    executor: CopyExecutor,
    dry_run: bool,
}

impl ModelCopier {
    /// Create a copier from a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured patterns cannot be compiled.
    pub fn new(config: &Config) -> Result<Self> {
        let matcher = ConfigManager::matcher(config)?;
        Ok(Self {
            scanner: Scanner::new(config.follow_symlinks, matcher),
            executor: CopyExecutor::new(config.dry_run),
            dry_run: config.dry_run,
        })
    }

    /// Copy every model under `source_root` that is missing from, or
    /// differs from, its mirrored path under `dest_root`
    ///
    /// Stops at the first failure; files copied before it stay copied. In a
    /// dry run, models that would be created are listed in
    /// [`CopyResult::pending`] so the map pass can preview them.
    ///
    /// # Errors
    ///
    /// Returns an error if the source tree is missing or unreadable, or if
    /// a copy into the destination fails.
    pub fn copy(&self, source_root: &Path, dest_root: &Path) -> Result<CopyResult> {
        if !source_root.exists() {
            return Err(ModelRepoError::SourceMissing(source_root.to_path_buf()).into());
        }

        tracing::info!(
            source = %source_root.display(),
            dest = %dest_root.display(),
            "copying updated models"
        );

        let mut result = CopyResult::default();

        for model in self.scanner.scan(source_root)? {
            let dest_path = dest_root.join(&model.relative);
            let comparison = FileComparator::compare(&model.path, &dest_path)?;
            tracing::debug!(model = %model.name, ?comparison, "compared");

            let pending = (self.dry_run && comparison == ComparisonResult::SourceOnly).then(|| {
                ModelFile {
                    name: model.name.clone(),
                    path: dest_path.clone(),
                    relative: model.relative.clone(),
                }
            });

            let action = CopyActionResolver::resolve(model.name, model.path, dest_path, comparison);
            self.executor.execute(&action, &mut result)?;
            result.pending.extend(pending);
        }

        Ok(result)
    }
}
