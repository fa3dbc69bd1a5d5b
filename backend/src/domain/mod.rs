//! # Domain Module
//!
//! Business rules of the zoo keeper, independent of the console and of the
//! file format.
//!
//! ## Module Organization
//!
//! - **animal_service**: listing, adding, deleting and summarizing animals,
//!   plus the example animals a new zoo is seeded with
//! - **user_service**: login and registration
//! - **animal_table**: text layout of the animal table and statistics report
//! - **commands**: service inputs and outputs
//! - **models**: validation errors
//!
//! ## Business Rules
//!
//! - Ids are assigned by the store, never by the caller
//! - Names cannot be empty; weights and numeric properties cannot be negative
//! - Logins are unique; passwords are kept and compared in plain text
//! - The feeding metric is derived from kind and weight and never stored

pub mod animal_service;
pub mod animal_table;
pub mod commands;
pub mod models;
pub mod user_service;

pub use animal_service::AnimalService;
pub use models::{AnimalValidationError, UserValidationError};
pub use user_service::UserService;
