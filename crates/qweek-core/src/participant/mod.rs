//! Participant domain module.
//!
//! A participant is one person's saved result: their name, the combined
//! score of both rounds and when it was recorded.
//!
//! # Module Structure
//!
//! - `model`: participant record and the validated player name
//! - `repository`: storage capability trait implemented by every backend

mod model;
mod repository;

pub use model::{NewParticipant, Participant, PlayerName, name_key, score_percentage};
pub use repository::ParticipantRepository;
