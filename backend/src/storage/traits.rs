//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use shared::{AnimalRecord, UserCredential};

/// Trait defining the interface for animal storage operations
///
/// Implementations own their backing medium exclusively and keep no cache
/// between calls, so every operation observes the latest persisted state.
pub trait AnimalStorage: Send + Sync {
    /// Make sure the backing storage exists (creating an empty table if needed)
    fn initialize(&self) -> Result<()>;

    /// Next identifier to assign: highest stored id + 1, or 1 when empty
    fn next_id(&self) -> Result<u32>;

    /// All readable animals in stored order
    fn list_animals(&self) -> Result<Vec<AnimalRecord>>;

    /// Store a new animal, ignoring the id it carries
    /// Returns the animal with its assigned id
    fn store_animal(&self, animal: &AnimalRecord) -> Result<AnimalRecord>;

    /// Delete the first animal with the given id
    /// Returns true if the animal was found and deleted, false otherwise
    fn delete_animal(&self, animal_id: u32) -> Result<bool>;

    /// Store the given animals only when the storage holds no animals yet
    /// Returns the number of animals stored
    fn seed_if_empty(&self, animals: &[AnimalRecord]) -> Result<usize> {
        if self.next_id()? != 1 {
            return Ok(0);
        }

        for animal in animals {
            self.store_animal(animal)?;
        }
        Ok(animals.len())
    }
}

/// Trait defining the interface for user credential storage operations
pub trait UserStorage: Send + Sync {
    /// Make sure the backing storage exists, bootstrapping the default account
    fn initialize(&self) -> Result<()>;

    /// Exact, case-sensitive match on login and password
    fn authenticate(&self, login: &str, password: &str) -> Result<bool>;

    /// Add a new user unless the login is already taken
    /// Returns false (and stores nothing) for a duplicate login
    fn register(&self, login: &str, password: &str) -> Result<bool>;

    /// All readable users in stored order
    fn list_users(&self) -> Result<Vec<UserCredential>>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories.
pub trait Connection: Send + Sync + Clone {
    /// The type of AnimalStorage this connection creates
    type AnimalRepository: AnimalStorage + 'static;

    /// The type of UserStorage this connection creates
    type UserRepository: UserStorage + 'static;

    /// Create a new animal repository for this connection
    fn create_animal_repository(&self) -> Self::AnimalRepository;

    /// Create a new user repository for this connection
    fn create_user_repository(&self) -> Self::UserRepository;
}
