use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::animal_repository::AnimalRepository;
use super::user_repository::UserRepository;
use crate::config::ZooConfig;
use crate::storage::traits::Connection;

pub const DEFAULT_ANIMALS_FILE: &str = "animals.csv";
pub const DEFAULT_USERS_FILE: &str = "users.csv";

/// CsvConnection manages the data directory and the paths of the two CSV files
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    animals_file: String,
    users_file: String,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory and default file names
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        Self::with_file_names(base_directory, DEFAULT_ANIMALS_FILE, DEFAULT_USERS_FILE)
    }

    /// Create a new CSV connection with custom file names
    pub fn with_file_names<P: AsRef<Path>>(
        base_directory: P,
        animals_file: &str,
        users_file: &str,
    ) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            animals_file: animals_file.to_string(),
            users_file: users_file.to_string(),
        })
    }

    /// Create a connection from the application configuration
    pub fn from_config(config: &ZooConfig) -> Result<Self> {
        Self::with_file_names(&config.data_directory, &config.animals_file, &config.users_file)
    }

    pub fn animals_file_path(&self) -> PathBuf {
        self.base_directory.join(&self.animals_file)
    }

    pub fn users_file_path(&self) -> PathBuf {
        self.base_directory.join(&self.users_file)
    }
}

impl Connection for CsvConnection {
    type AnimalRepository = AnimalRepository;
    type UserRepository = UserRepository;

    fn create_animal_repository(&self) -> AnimalRepository {
        AnimalRepository::new(self.clone())
    }

    fn create_user_repository(&self) -> UserRepository {
        UserRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("zoo").join("data");

        let connection = CsvConnection::new(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(connection.animals_file_path(), nested.join("animals.csv"));
        assert_eq!(connection.users_file_path(), nested.join("users.csv"));
    }

    #[test]
    fn test_custom_file_names() {
        let temp_dir = TempDir::new().unwrap();
        let connection =
            CsvConnection::with_file_names(temp_dir.path(), "zoo.csv", "staff.csv").unwrap();

        assert_eq!(connection.animals_file_path(), temp_dir.path().join("zoo.csv"));
        assert_eq!(connection.users_file_path(), temp_dir.path().join("staff.csv"));
    }
}
