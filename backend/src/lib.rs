//! # Zoo Keeper
//!
//! Console record keeping for a small zoo. Animals and user accounts live in
//! two flat CSV files; every operation reads or rewrites them directly.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (interactive console)
//!     ↓
//! Domain Layer (animal and user services, validation, formatting)
//!     ↓
//! Storage Layer (CSV repositories behind storage traits)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::config::ZooConfig;
use crate::domain::{AnimalService, UserService};
use crate::storage::{AnimalStorage, Connection, CsvConnection, UserStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub animal_service: AnimalService,
    pub user_service: UserService,
    pub config: ZooConfig,
}

/// Open the data directory, create missing files and seed example animals
pub fn initialize_backend(config: &ZooConfig) -> Result<AppState> {
    info!("Setting up storage in {}", config.data_directory.display());
    let connection = CsvConnection::from_config(config)?;

    let animal_repo: Arc<dyn AnimalStorage> = Arc::new(connection.create_animal_repository());
    let user_repo: Arc<dyn UserStorage> = Arc::new(connection.create_user_repository());

    info!("Setting up domain services");
    let animal_service = AnimalService::new(animal_repo);
    let user_service = UserService::new(user_repo);

    animal_service
        .initialize(config.seed_example_animals)
        .with_context(|| format!("Failed to prepare {}", config.animals_file_path().display()))?;
    user_service
        .initialize()
        .with_context(|| format!("Failed to prepare {}", config.users_file_path().display()))?;

    Ok(AppState {
        animal_service,
        user_service,
        config: config.clone(),
    })
}
