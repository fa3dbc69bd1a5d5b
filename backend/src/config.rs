//! Application configuration.
//!
//! Every field has a default, so a missing or partial `zoo_config.yaml` is
//! fine. Command-line flags are applied on top of whatever the file says.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::storage::csv::connection::{DEFAULT_ANIMALS_FILE, DEFAULT_USERS_FILE};

/// Name of the config file looked up inside the data directory
pub const CONFIG_FILE_NAME: &str = "zoo_config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZooConfig {
    /// Directory holding the CSV files
    pub data_directory: PathBuf,
    pub animals_file: String,
    pub users_file: String,
    /// Add the five example animals when the animal file has no rows
    pub seed_example_animals: bool,
    /// Clear the terminal before drawing each menu
    pub clear_screen: bool,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("."),
            animals_file: DEFAULT_ANIMALS_FILE.to_string(),
            users_file: DEFAULT_USERS_FILE.to_string(),
            seed_example_animals: true,
            clear_screen: true,
        }
    }
}

/// Values given on the command line; `None`/`false` means "not given"
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_directory: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub no_seed: bool,
    pub no_clear: bool,
}

impl ZooConfig {
    /// Parse a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ZooConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit config file must exist. Otherwise `zoo_config.yaml` in the
    /// data directory is used when present, falling back to defaults.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match &overrides.config_file {
            Some(path) => Self::from_file(path)?,
            None => {
                let data_directory = overrides
                    .data_directory
                    .clone()
                    .unwrap_or_else(|| Self::default().data_directory);
                let candidate = data_directory.join(CONFIG_FILE_NAME);

                if candidate.is_file() {
                    Self::from_file(&candidate)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(data_directory) = &overrides.data_directory {
            config.data_directory = data_directory.clone();
        }
        if overrides.no_seed {
            config.seed_example_animals = false;
        }
        if overrides.no_clear {
            config.clear_screen = false;
        }

        info!("Using data directory: {}", config.data_directory.display());
        Ok(config)
    }

    pub fn animals_file_path(&self) -> PathBuf {
        self.data_directory.join(&self.animals_file)
    }

    pub fn users_file_path(&self) -> PathBuf {
        self.data_directory.join(&self.users_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let overrides = ConfigOverrides {
            data_directory: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };

        let config = ZooConfig::load(&overrides).unwrap();

        assert_eq!(config.data_directory, temp_dir.path());
        assert_eq!(config.animals_file_path(), temp_dir.path().join("animals.csv"));
        assert_eq!(config.users_file_path(), temp_dir.path().join("users.csv"));
        assert!(config.seed_example_animals);
        assert!(config.clear_screen);
    }

    #[test]
    fn test_partial_file_in_data_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "animals_file: zoo.csv\nseed_example_animals: false\n",
        )
        .unwrap();
        let overrides = ConfigOverrides {
            data_directory: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };

        let config = ZooConfig::load(&overrides).unwrap();

        assert_eq!(config.animals_file, "zoo.csv");
        assert_eq!(config.users_file, "users.csv");
        assert!(!config.seed_example_animals);
        assert_eq!(config.data_directory, temp_dir.path());
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");
        fs::write(&config_path, "data_directory: /srv/zoo\nclear_screen: true\n").unwrap();
        let overrides = ConfigOverrides {
            config_file: Some(config_path),
            no_clear: true,
            no_seed: true,
            ..Default::default()
        };

        let config = ZooConfig::load(&overrides).unwrap();

        assert_eq!(config.data_directory, PathBuf::from("/srv/zoo"));
        assert!(!config.clear_screen);
        assert!(!config.seed_example_animals);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let overrides = ConfigOverrides {
            config_file: Some(temp_dir.path().join("nope.yaml")),
            ..Default::default()
        };

        let err = ZooConfig::load(&overrides).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
