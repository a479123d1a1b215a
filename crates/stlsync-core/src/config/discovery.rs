//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Project config file name, searched for in the current directory and its parents
pub const PROJECT_CONFIG_NAME: &str = ".stlsync.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project config (.stlsync.toml)
    pub project: Option<PathBuf>,
    /// Global config under the user config directory
    pub global: Option<PathBuf>,
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// # Errors
    ///
    /// Returns an error if `cli_path` is given but does not point to a file.
    pub fn discover(cli_path: Option<&Path>) -> Result<ConfigFiles> {
        let cli = match cli_path {
            Some(p) if p.is_file() => Some(p.to_path_buf()),
            Some(p) => anyhow::bail!("Config file not found: {}", p.display()),
            None => None,
        };

        let project = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_upwards(&dir, PROJECT_CONFIG_NAME));
        let global = Self::find_global_config();

        tracing::debug!(?cli, ?project, ?global, "discovered config files");

        Ok(ConfigFiles {
            cli,
            project,
            global,
        })
    }

    /// Find a config file in `start` or any of its parent directories
    #[must_use]
    pub fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }

            // Move to parent directory
            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Find global config in the platform config directory
    fn find_global_config() -> Option<PathBuf> {
        let config_dir = dirs::config_dir()?;
        let global_config = config_dir.join("stlsync").join("config.toml");

        if global_config.is_file() {
            Some(global_config)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_cli_config() {
        let tmp = TempDir::new().unwrap();
        let cli_config = tmp.path().join("custom.toml");
        fs::write(&cli_config, "# config").unwrap();

        let files = ConfigDiscovery::discover(Some(&cli_config)).unwrap();

        assert_eq!(files.cli, Some(cli_config));
    }

    #[test]
    fn test_discover_cli_config_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let cli_config = tmp.path().join("nonexistent.toml");

        let result = ConfigDiscovery::discover(Some(&cli_config));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Config file not found"));
    }

    #[test]
    fn test_find_upwards_in_parent() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("library/parts/gears");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("library").join(PROJECT_CONFIG_NAME), "").unwrap();

        let found = ConfigDiscovery::find_upwards(&nested, PROJECT_CONFIG_NAME);

        assert_eq!(found, Some(tmp.path().join("library").join(PROJECT_CONFIG_NAME)));
    }

    #[test]
    fn test_find_upwards_prefers_nearest() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join(PROJECT_CONFIG_NAME), "").unwrap();
        fs::write(nested.join(PROJECT_CONFIG_NAME), "").unwrap();

        let found = ConfigDiscovery::find_upwards(&nested, PROJECT_CONFIG_NAME);

        assert_eq!(found, Some(nested.join(PROJECT_CONFIG_NAME)));
    }

    #[test]
    fn test_find_upwards_ignores_directories() {
        let tmp = TempDir::new().unwrap();
        let name = "stlsync-test-marker-dir";
        fs::create_dir(tmp.path().join(name)).unwrap();

        assert!(ConfigDiscovery::find_upwards(tmp.path(), name).is_none());
    }
}
