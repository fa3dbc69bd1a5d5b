//! # Storage Module
//!
//! Handles all data persistence for the zoo keeper.
//!
//! The domain layer only sees the traits in [`traits`]; the flat-file
//! implementation lives in [`csv`]. Each repository owns exactly one file and
//! re-reads it on every call, so the file on disk is the single source of truth.
//!
//! There is no locking: two processes writing the same data directory can
//! interleave appends or lose a delete. The tool is meant for one user at a time.

pub mod csv;
pub mod traits;

pub use self::csv::{AnimalRepository, CsvConnection, UserRepository};
pub use traits::{AnimalStorage, Connection, UserStorage};
