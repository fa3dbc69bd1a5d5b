//! # CSV Storage
//!
//! Flat-file storage for animals and users.
//!
//! ## File Structure
//!
//! ```text
//! {data_directory}/
//! ├── zoo_config.yaml     (optional)
//! ├── animals.csv         ← AnimalRepository
//! └── users.csv           ← UserRepository
//! ```
//!
//! ## CSV Format
//!
//! ```csv
//! Id,Type,Name,Weight,Extra
//! 1,Lion,Alex,220,
//! 2,Elephant,Dumbo,200,0.5
//! ```
//!
//! ```csv
//! Id,Email,Password
//! 1,admin,admin
//! ```

pub mod animal_codec;
pub mod animal_repository;
pub mod connection;
pub mod table_file;
pub mod user_repository;

#[cfg(test)]
pub mod test_utils;

pub use animal_repository::AnimalRepository;
pub use connection::CsvConnection;
pub use table_file::CsvTableFile;
pub use user_repository::UserRepository;
