//! Model copier
//!
//! Mirrors every model under a source tree into the destination tree at the
//! same relative path. A model is copied when the destination has no file
//! there or holds different content; identical files are left alone. The
//! copier never deletes anything from the destination.

mod actions;
mod executor;
mod orchestrator;
mod reporting;

pub use actions::{CopyAction, CopyActionResolver};
pub use executor::CopyExecutor;
pub use orchestrator::ModelCopier;
pub use reporting::CopyReporter;

use crate::scanner::ModelFile;

/// Copy phase result with statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyResult {
    /// Models that did not exist in the destination
    pub copied: usize,
    /// Models whose destination content differed
    pub updated: usize,
    /// Models already identical in the destination
    pub unchanged: usize,
    /// Models a dry run would have created, at their mirrored destination
    /// paths, in walk order
    pub pending: Vec<ModelFile>,
}

impl CopyResult {
    /// Number of files written (or that would be written in a dry run)
    #[must_use]
    pub const fn total_copies(&self) -> usize {
        self.copied + self.updated
    }
}

#[cfg(test)]
mod integration_tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::config::Config;
    use crate::error::ModelRepoError;

    fn setup_test_dirs() -> (TempDir, TempDir) {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        (source, dest)
    }

    fn create_test_file(dir: &Path, rel_path: &str, content: &str) {
        let path = dir.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_into_empty_destination() {
        let (source_dir, dest_dir) = setup_test_dirs();

        create_test_file(source_dir.path(), "Gear.stl", "solid gear");
        create_test_file(source_dir.path(), "brackets/corner/L.STL", "solid l");
        create_test_file(source_dir.path(), "brackets/notes.txt", "not a model");

        let copier = ModelCopier::new(&Config::default()).unwrap();
        let result = copier.copy(source_dir.path(), dest_dir.path()).unwrap();

        assert_eq!(result.copied, 2);
        assert_eq!(result.updated, 0);
        assert_eq!(result.unchanged, 0);

        assert_eq!(
            fs::read_to_string(dest_dir.path().join("Gear.stl")).unwrap(),
            "solid gear"
        );
        assert_eq!(
            fs::read_to_string(dest_dir.path().join("brackets/corner/L.STL")).unwrap(),
            "solid l"
        );
        assert!(!dest_dir.path().join("brackets/notes.txt").exists());
    }

    #[test]
    fn test_copy_is_idempotent() {
        let (source_dir, dest_dir) = setup_test_dirs();

        create_test_file(source_dir.path(), "a/One.stl", "one");
        create_test_file(source_dir.path(), "b/Two.stl", "two");

        let copier = ModelCopier::new(&Config::default()).unwrap();
        let first = copier.copy(source_dir.path(), dest_dir.path()).unwrap();
        let second = copier.copy(source_dir.path(), dest_dir.path()).unwrap();

        assert_eq!(first.total_copies(), 2);
        assert_eq!(second.total_copies(), 0);
        assert_eq!(second.unchanged, 2);
    }

    #[test]
    fn test_copy_updates_changed_content() {
        let (source_dir, dest_dir) = setup_test_dirs();

        create_test_file(source_dir.path(), "Gear.stl", "solid gear v2");
        create_test_file(dest_dir.path(), "Gear.stl", "solid gear v1");

        let copier = ModelCopier::new(&Config::default()).unwrap();
        let result = copier.copy(source_dir.path(), dest_dir.path()).unwrap();

        assert_eq!(result.updated, 1);
        assert_eq!(result.copied, 0);
        assert_eq!(
            fs::read_to_string(dest_dir.path().join("Gear.stl")).unwrap(),
            "solid gear v2"
        );
    }

    #[test]
    fn test_copy_leaves_destination_extras() {
        let (source_dir, dest_dir) = setup_test_dirs();

        create_test_file(source_dir.path(), "New.stl", "new");
        create_test_file(dest_dir.path(), "Orphan.stl", "kept");

        let copier = ModelCopier::new(&Config::default()).unwrap();
        copier.copy(source_dir.path(), dest_dir.path()).unwrap();

        assert!(dest_dir.path().join("Orphan.stl").exists());
        assert!(dest_dir.path().join("New.stl").exists());
    }

    #[test]
    fn test_copy_missing_source() {
        let (source_dir, dest_dir) = setup_test_dirs();
        let missing = source_dir.path().join("does-not-exist");

        let copier = ModelCopier::new(&Config::default()).unwrap();
        let err = copier.copy(&missing, dest_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ModelRepoError>(),
            Some(ModelRepoError::SourceMissing(_))
        ));
    }

    #[test]
    fn test_copy_creates_destination_root() {
        let (source_dir, dest_dir) = setup_test_dirs();
        create_test_file(source_dir.path(), "parts/Gear.stl", "gear");
        let dest_root = dest_dir.path().join("library/stl");

        let copier = ModelCopier::new(&Config::default()).unwrap();
        let result = copier.copy(source_dir.path(), &dest_root).unwrap();

        assert_eq!(result.copied, 1);
        assert!(dest_root.join("parts/Gear.stl").exists());
    }

    #[test]
    fn test_copy_dry_run() {
        let (source_dir, dest_dir) = setup_test_dirs();
        create_test_file(source_dir.path(), "Gear.stl", "gear");

        let config = Config {
            dry_run: true,
            ..Config::default()
        };
        let copier = ModelCopier::new(&config).unwrap();
        let result = copier.copy(source_dir.path(), dest_dir.path()).unwrap();

        assert_eq!(result.copied, 1);
        assert!(!dest_dir.path().join("Gear.stl").exists());
    }

    #[test]
    fn test_copy_dry_run_lists_pending_creates() {
        let (source_dir, dest_dir) = setup_test_dirs();
        create_test_file(source_dir.path(), "parts/Gear.stl", "gear");
        create_test_file(source_dir.path(), "Nut.stl", "nut");
        create_test_file(dest_dir.path(), "Nut.stl", "old nut");

        let config = Config {
            dry_run: true,
            ..Config::default()
        };
        let copier = ModelCopier::new(&config).unwrap();
        let result = copier.copy(source_dir.path(), dest_dir.path()).unwrap();

        assert_eq!(result.copied, 1);
        assert_eq!(result.updated, 1);
        assert_eq!(result.pending.len(), 1);
        assert_eq!(result.pending[0].name, "Gear");
        assert_eq!(result.pending[0].path, dest_dir.path().join("parts/Gear.stl"));
    }

    #[test]
    fn test_real_copy_has_nothing_pending() {
        let (source_dir, dest_dir) = setup_test_dirs();
        create_test_file(source_dir.path(), "Gear.stl", "gear");

        let copier = ModelCopier::new(&Config::default()).unwrap();
        let result = copier.copy(source_dir.path(), dest_dir.path()).unwrap();

        assert_eq!(result.copied, 1);
        assert!(result.pending.is_empty());
    }

    #[test]
    fn test_copy_respects_ignore_patterns() {
        let (source_dir, dest_dir) = setup_test_dirs();
        create_test_file(source_dir.path(), "parts/Gear.stl", "gear");
        create_test_file(source_dir.path(), "scratch/Test.stl", "test");

        let config = Config {
            ignore: vec!["scratch/".to_string()],
            ..Config::default()
        };
        let copier = ModelCopier::new(&config).unwrap();
        let result = copier.copy(source_dir.path(), dest_dir.path()).unwrap();

        assert_eq!(result.copied, 1);
        assert!(!dest_dir.path().join("scratch/Test.stl").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_unwritable_destination() {
        use std::os::unix::fs::PermissionsExt;

        let (source_dir, dest_dir) = setup_test_dirs();
        create_test_file(source_dir.path(), "Gear.stl", "gear");

        let locked = dest_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores permission bits; nothing to assert in that case
        let probe = locked.join(".probe");
        if fs::write(&probe, "").is_ok() {
            fs::remove_file(&probe).unwrap();
            return;
        }

        let copier = ModelCopier::new(&Config::default()).unwrap();
        let result = copier.copy(source_dir.path(), &locked);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(result.is_err());
    }
}
