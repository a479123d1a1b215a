//! Configuration types and structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Patterns to ignore (models matching these are neither copied nor indexed)
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Patterns to explicitly include (override ignores)
    #[serde(default)]
    pub include: Vec<String>,

    /// Descend into symlinked directories while walking
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Dry run mode (report only, touch nothing)
    #[serde(default)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.ignore.is_empty());
        assert!(config.include.is_empty());
        assert!(!config.follow_symlinks);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_config_from_toml() {
        let config: Config = toml::from_str(
            r#"
ignore = ["scratch/", "*_draft.stl"]
follow_symlinks = true
"#,
        )
        .unwrap();

        assert_eq!(config.ignore.len(), 2);
        assert!(config.include.is_empty());
        assert!(config.follow_symlinks);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let result: Result<Config, _> = toml::from_str("prune = true\n");
        assert!(result.is_err());
    }
}
