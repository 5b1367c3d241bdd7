//! Participant domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QweekError, Result};

/// Normalizes a name pair for comparison: trimmed and lowercased.
pub fn name_key(first_name: &str, last_name: &str) -> (String, String) {
    (
        first_name.trim().to_lowercase(),
        last_name.trim().to_lowercase(),
    )
}

/// Score as a whole percentage of the total, 0 when there were no questions.
pub fn score_percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(score) / f64::from(total) * 100.0).round() as u32
}

/// A saved game result.
///
/// Created once per unique name pair and never mutated afterwards. Field
/// names serialize in camelCase so existing result files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Store-assigned identifier.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Combined correct answers across both rounds.
    pub score: u32,
    /// Combined number of questions across both rounds.
    pub total: u32,
    /// Active play time in seconds, absent on records saved before timing existed.
    #[serde(default, rename = "time", skip_serializing_if = "Option::is_none")]
    pub time_seconds: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    /// Returns true if this record belongs to the given name pair.
    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        name_key(&self.first_name, &self.last_name) == name_key(first_name, last_name)
    }

    pub fn percentage(&self) -> u32 {
        score_percentage(self.score, self.total)
    }

    /// Score cell as shown in the admin table and the CSV export, e.g. `80% (8/10)`.
    pub fn score_label(&self) -> String {
        format!("{}% ({}/{})", self.percentage(), self.score, self.total)
    }
}

/// A result that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub first_name: String,
    pub last_name: String,
    pub score: u32,
    pub total: u32,
    pub time_seconds: Option<u64>,
}

impl NewParticipant {
    /// Completes the record with the identity assigned by a store.
    pub fn into_participant(self, id: impl Into<String>, created_at: DateTime<Utc>) -> Participant {
        Participant {
            id: id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            score: self.score,
            total: self.total,
            time_seconds: self.time_seconds,
            created_at,
        }
    }
}

/// A validated first/last name pair.
///
/// Both parts are trimmed and guaranteed non-empty. This is the entry guard
/// for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerName {
    first_name: String,
    last_name: String,
}

impl PlayerName {
    pub const REQUIRED_MESSAGE: &'static str = "Nombre y apellido son requeridos.";

    /// Validates a name pair.
    ///
    /// # Errors
    ///
    /// Returns `QweekError::Validation` if either part is empty after trimming.
    pub fn new(first_name: &str, last_name: &str) -> Result<Self> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(QweekError::validation(Self::REQUIRED_MESSAGE));
        }
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Full display name, e.g. `Ana Lopez`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
