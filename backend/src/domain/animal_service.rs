use anyhow::Result;
use shared::{AnimalDetails, AnimalRecord, ZooStatistics};
use std::sync::Arc;
use tracing::{info, warn};

use super::commands::animals::{AddAnimalCommand, DeleteAnimalCommand, DeleteAnimalResult};
use super::models::AnimalValidationError;
use crate::storage::AnimalStorage;

const MAX_NAME_LENGTH: usize = 100;

/// The five animals a brand new zoo starts with, one of each kind
pub fn example_animals() -> Vec<AnimalRecord> {
    vec![
        AnimalRecord::new("Alex", 220.0, AnimalDetails::Lion),
        AnimalRecord::new("Dumbo", 200.0, AnimalDetails::Elephant { trunk_length: 0.5 }),
        AnimalRecord::new("Iago", 0.6, AnimalDetails::Parrot { color: "Red".to_string() }),
        AnimalRecord::new("Melman", 1200.0, AnimalDetails::Giraffe { neck_length: 2.8 }),
        AnimalRecord::new("Skipper", 15.0, AnimalDetails::Penguin { rank: "Captain".to_string() }),
    ]
}

/// Service for managing the animals of the zoo
#[derive(Clone)]
pub struct AnimalService {
    storage: Arc<dyn AnimalStorage>,
}

impl AnimalService {
    pub fn new(storage: Arc<dyn AnimalStorage>) -> Self {
        Self { storage }
    }

    /// Make sure the animal file exists, optionally seeding the examples into an empty zoo
    pub fn initialize(&self, seed_examples: bool) -> Result<()> {
        self.storage.initialize()?;

        if seed_examples {
            let seeded = self.storage.seed_if_empty(&example_animals())?;
            if seeded > 0 {
                info!("Seeded {} example animals", seeded);
            }
        }
        Ok(())
    }

    pub fn list_animals(&self) -> Result<Vec<AnimalRecord>> {
        let animals = self.storage.list_animals()?;
        info!("Listed {} animals", animals.len());
        Ok(animals)
    }

    /// Validate and store a new animal, returning it with its assigned id
    pub fn add_animal(&self, command: AddAnimalCommand) -> Result<AnimalRecord> {
        info!("Adding {}: name={}, weight={}", command.details.kind(), command.name, command.weight);

        self.validate_add_command(&command)?;

        let animal = AnimalRecord::new(command.name.trim(), command.weight, command.details);
        let stored = self.storage.store_animal(&animal)?;

        info!("Added animal: {} with ID: {}", stored.name, stored.id);
        Ok(stored)
    }

    pub fn delete_animal(&self, command: DeleteAnimalCommand) -> Result<DeleteAnimalResult> {
        info!("Deleting animal: {}", command.animal_id);

        let deleted = self.storage.delete_animal(command.animal_id)?;
        if !deleted {
            warn!("Animal not found: {}", command.animal_id);
        }

        Ok(DeleteAnimalResult { deleted })
    }

    /// Count, total weight and feeding metric over the whole zoo; `None` when empty
    pub fn statistics(&self) -> Result<Option<ZooStatistics>> {
        let animals = self.storage.list_animals()?;
        Ok(ZooStatistics::from_animals(&animals))
    }

    fn validate_add_command(&self, command: &AddAnimalCommand) -> Result<(), AnimalValidationError> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(AnimalValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AnimalValidationError::NameTooLong(MAX_NAME_LENGTH));
        }

        if !command.weight.is_finite() || command.weight < 0.0 {
            return Err(AnimalValidationError::InvalidWeight(command.weight));
        }

        if let Some(value) = command.details.numeric_property() {
            if !value.is_finite() || value < 0.0 {
                return Err(AnimalValidationError::InvalidProperty(value));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::ServiceTestHelper;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_initialize_seeds_once() {
        let helper = ServiceTestHelper::new().unwrap();
        let service = &helper.animal_service;

        service.initialize(true).unwrap();
        service.initialize(true).unwrap();

        let animals = service.list_animals().unwrap();
        assert_eq!(animals.len(), 5);
        let ids: Vec<u32> = animals.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(animals[3].details, AnimalDetails::Giraffe { neck_length: 2.8 });
    }

    #[test]
    fn test_initialize_without_seeding_leaves_zoo_empty() {
        let helper = ServiceTestHelper::new().unwrap();
        assert!(helper.animal_service.list_animals().unwrap().is_empty());
        assert!(helper.animal_service.statistics().unwrap().is_none());
    }

    #[test]
    fn test_seeded_statistics() {
        let helper = ServiceTestHelper::new().unwrap();
        helper.animal_service.initialize(true).unwrap();

        let stats = helper.animal_service.statistics().unwrap().unwrap();
        assert_eq!(stats.count, 5);
        assert!(approx(stats.total_weight, 1635.6));
        assert!(approx(stats.total_metric, 129.35));
        assert!(approx(stats.average_metric, 25.87));
    }

    #[test]
    fn test_add_animal_trims_name_and_assigns_id() {
        let helper = ServiceTestHelper::new().unwrap();

        let stored = helper
            .animal_service
            .add_animal(AddAnimalCommand {
                name: "  Gloria ".to_string(),
                weight: 1800.0,
                details: AnimalDetails::Elephant { trunk_length: 1.1 },
            })
            .unwrap();

        assert_eq!(stored.id, 1);
        assert_eq!(stored.name, "Gloria");
        assert_eq!(helper.animal_service.list_animals().unwrap(), vec![stored]);
    }

    #[test]
    fn test_add_animal_validation() {
        let helper = ServiceTestHelper::new().unwrap();
        let service = &helper.animal_service;

        let cases = vec![
            (
                AddAnimalCommand { name: "   ".into(), weight: 1.0, details: AnimalDetails::Lion },
                AnimalValidationError::EmptyName,
            ),
            (
                AddAnimalCommand { name: "Alex".into(), weight: -1.0, details: AnimalDetails::Lion },
                AnimalValidationError::InvalidWeight(-1.0),
            ),
            (
                AddAnimalCommand {
                    name: "Melman".into(),
                    weight: 1200.0,
                    details: AnimalDetails::Giraffe { neck_length: -2.0 },
                },
                AnimalValidationError::InvalidProperty(-2.0),
            ),
            (
                AddAnimalCommand { name: "x".repeat(101), weight: 1.0, details: AnimalDetails::Lion },
                AnimalValidationError::NameTooLong(100),
            ),
        ];

        for (command, expected) in cases {
            let err = service.add_animal(command).unwrap_err();
            assert_eq!(err.downcast_ref::<AnimalValidationError>(), Some(&expected));
        }
        assert!(service.list_animals().unwrap().is_empty());
    }

    #[test]
    fn test_delete_animal_reports_outcome() {
        let helper = ServiceTestHelper::new().unwrap();
        helper.animal_service.initialize(true).unwrap();

        let result = helper
            .animal_service
            .delete_animal(DeleteAnimalCommand { animal_id: 2 })
            .unwrap();
        assert_eq!(result, DeleteAnimalResult { deleted: true });

        let result = helper
            .animal_service
            .delete_animal(DeleteAnimalCommand { animal_id: 2 })
            .unwrap();
        assert!(!result.deleted);
        assert_eq!(helper.animal_service.list_animals().unwrap().len(), 4);
    }
}
