//! Participant repository trait.
//!
//! Defines the interface for participant persistence operations.

use async_trait::async_trait;

use super::model::{NewParticipant, Participant};
use crate::error::Result;

/// An abstract store for participant results.
///
/// This trait decouples the game and admin use cases from the storage
/// mechanism (flat JSON file, hosted document database, memory). A single
/// instance is built at startup from configuration and shared as
/// `Arc<dyn ParticipantRepository>`.
///
/// # Implementation Notes
///
/// Implementations provide last-writer-wins semantics only. Duplicate-name
/// detection built on `find_by_name` is a convenience check, not an atomic
/// guarantee.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Lists every stored participant, in backend order.
    async fn list(&self) -> Result<Vec<Participant>>;

    /// Finds a participant by name.
    ///
    /// Names are compared case-insensitively after trimming surrounding
    /// whitespace.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Participant))`: a record exists for the name pair
    /// - `Ok(None)`: no record exists
    /// - `Err(_)`: the store could not be read
    async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Participant>>;

    /// Stores a new participant, assigning its id and creation timestamp.
    async fn add(&self, participant: NewParticipant) -> Result<Participant>;

    /// Deletes the participant with the given id.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the record was removed
    /// - `Err(QweekError::NotFound)`: no record has this id
    /// - `Err(_)`: the store could not be written
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}
