use anyhow::{Context, Result};
use shared::AnimalRecord;
use tracing::{debug, info};

use super::animal_codec::{self, ANIMAL_HEADER};
use super::connection::CsvConnection;
use super::table_file::CsvTableFile;
use crate::storage::traits::AnimalStorage;

/// CSV-based animal repository backed by a single `animals.csv`
#[derive(Debug, Clone)]
pub struct AnimalRepository {
    table: CsvTableFile,
}

impl AnimalRepository {
    /// Create a new CSV animal repository
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            table: CsvTableFile::new(connection.animals_file_path(), ANIMAL_HEADER),
        }
    }

    /// Read all animals, dropping rows that do not decode
    fn read_animals(&self) -> Result<Vec<AnimalRecord>> {
        let rows = self.table.read_rows()?;
        let total = rows.len();

        let animals: Vec<AnimalRecord> = rows.iter().filter_map(animal_codec::decode).collect();
        if animals.len() < total {
            debug!(
                "Skipped {} unreadable row(s) in {}",
                total - animals.len(),
                self.table.path().display()
            );
        }

        Ok(animals)
    }
}

impl AnimalStorage for AnimalRepository {
    fn initialize(&self) -> Result<()> {
        self.table
            .ensure_exists(&[])
            .context("Failed to initialize the animal file")?;
        Ok(())
    }

    fn next_id(&self) -> Result<u32> {
        self.table.next_id()
    }

    fn list_animals(&self) -> Result<Vec<AnimalRecord>> {
        self.read_animals()
            .context("Failed to read the animal file")
    }

    fn store_animal(&self, animal: &AnimalRecord) -> Result<AnimalRecord> {
        let stored = AnimalRecord {
            id: self.next_id()?,
            ..animal.clone()
        };

        self.table
            .append_row(&animal_codec::encode(&stored))
            .with_context(|| format!("Failed to store animal {}", stored.name))?;

        info!("Stored {} {} with ID: {}", stored.kind(), stored.name, stored.id);
        Ok(stored)
    }

    fn delete_animal(&self, animal_id: u32) -> Result<bool> {
        let mut animals = self.read_animals()?;

        let Some(index) = animals.iter().position(|a| a.id == animal_id) else {
            debug!("Animal {} not found, file left untouched", animal_id);
            return Ok(false);
        };

        let removed = animals.remove(index);
        let rows: Vec<_> = animals.iter().map(animal_codec::encode).collect();
        self.table
            .rewrite(&rows)
            .with_context(|| format!("Failed to delete animal {}", animal_id))?;

        info!("Deleted {} {} with ID: {}", removed.kind(), removed.name, removed.id);
        Ok(true)
    }
}
