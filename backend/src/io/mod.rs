//! # IO Module
//!
//! Interface layer between the user and the domain services. The only
//! front end is the interactive console.

pub mod console;

pub use console::ConsoleSession;
