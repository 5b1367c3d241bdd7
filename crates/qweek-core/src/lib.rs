//! Domain layer for QWeek.
//!
//! Contains the question bank, both matching widgets, the game flow state
//! machine, the participant model and the storage capability trait. Nothing
//! in this crate performs I/O.

pub mod config;
pub mod error;
pub mod game;
pub mod matching;
pub mod participant;
pub mod question;

// Re-export common error type
pub use error::QweekError;
