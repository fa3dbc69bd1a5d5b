//! Test utilities module for automatic cleanup and consistent test infrastructure
//!
//! Every test gets its own temporary data directory which is removed when the
//! environment is dropped, even if the test panics.
use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;

use super::animal_repository::AnimalRepository;
use super::connection::CsvConnection;
use super::user_repository::UserRepository;
use crate::domain::{AnimalService, UserService};
use crate::storage::traits::{AnimalStorage, UserStorage};

pub use crate::domain::animal_service::example_animals;

/// Temporary data directory with a connection pointing at it
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The CSV connection for the test
    pub connection: CsvConnection,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
        })
    }
}

/// Services wired to CSV repositories in a fresh temporary directory
pub struct ServiceTestHelper {
    pub env: TestEnvironment,
    pub animal_service: AnimalService,
    pub user_service: UserService,
}

impl ServiceTestHelper {
    /// Both files initialized, no example animals
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;

        let animal_repo: Arc<dyn AnimalStorage> = Arc::new(AnimalRepository::new(env.connection.clone()));
        let user_repo: Arc<dyn UserStorage> = Arc::new(UserRepository::new(env.connection.clone()));

        let animal_service = AnimalService::new(animal_repo);
        let user_service = UserService::new(user_repo);
        animal_service.initialize(false)?;
        user_service.initialize()?;

        Ok(Self {
            env,
            animal_service,
            user_service,
        })
    }
}
