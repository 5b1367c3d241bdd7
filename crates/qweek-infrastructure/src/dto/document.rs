//! Document database wire format.
//!
//! Documents carry typed field values:
//!
//! ```json
//! {
//!   "name": "projects/p/databases/(default)/documents/participants/abc",
//!   "fields": {
//!     "firstName": { "stringValue": "Ana" },
//!     "score":     { "integerValue": "7" },
//!     "createdAt": { "timestampValue": "2025-10-01T09:30:00Z" }
//!   }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use qweek_core::QweekError;
use qweek_core::error::Result;
use qweek_core::participant::{NewParticipant, Participant};

const FIRST_NAME: &str = "firstName";
const LAST_NAME: &str = "lastName";
const SCORE: &str = "score";
const TOTAL: &str = "total";
const TIME: &str = "time";
const CREATED_AT: &str = "createdAt";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    /// Full resource name, assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// One page of a collection listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<DocumentDto>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl DocumentDto {
    /// Encodes a new participant; the id comes from the server.
    pub fn from_new_participant(participant: &NewParticipant, created_at: DateTime<Utc>) -> Self {
        let mut fields = Map::new();
        fields.insert(FIRST_NAME.into(), json!({ "stringValue": participant.first_name }));
        fields.insert(LAST_NAME.into(), json!({ "stringValue": participant.last_name }));
        fields.insert(SCORE.into(), json!({ "integerValue": participant.score.to_string() }));
        fields.insert(TOTAL.into(), json!({ "integerValue": participant.total.to_string() }));
        if let Some(time) = participant.time_seconds {
            fields.insert(TIME.into(), json!({ "integerValue": time.to_string() }));
        }
        fields.insert(
            CREATED_AT.into(),
            json!({ "timestampValue": created_at.to_rfc3339() }),
        );

        Self {
            name: None,
            fields,
            create_time: None,
        }
    }

    /// Last segment of the resource name.
    pub fn document_id(&self) -> Option<&str> {
        self.name
            .as_deref()
            .and_then(|name| name.rsplit('/').next())
            .filter(|id| !id.is_empty())
    }

    /// Decodes a stored document.
    ///
    /// A missing `createdAt` falls back to the document's create time, and
    /// a missing `time` stays `None`.
    pub fn into_participant(self) -> Result<Participant> {
        let id = self
            .document_id()
            .ok_or_else(|| QweekError::data_access("Document without a name"))?
            .to_string();

        let first_name = string_field(&self.fields, FIRST_NAME)
            .ok_or_else(|| missing_field(&id, FIRST_NAME))?;
        let last_name = string_field(&self.fields, LAST_NAME)
            .ok_or_else(|| missing_field(&id, LAST_NAME))?;
        let score = integer_field(&self.fields, SCORE).ok_or_else(|| missing_field(&id, SCORE))?;
        let total = integer_field(&self.fields, TOTAL).ok_or_else(|| missing_field(&id, TOTAL))?;
        let time_seconds = integer_field(&self.fields, TIME);
        let created_at = timestamp_field(&self.fields, CREATED_AT)
            .or(self.create_time)
            .unwrap_or_else(Utc::now);

        Ok(Participant {
            id,
            first_name,
            last_name,
            score: u32::try_from(score).map_err(|_| invalid_field(SCORE))?,
            total: u32::try_from(total).map_err(|_| invalid_field(TOTAL))?,
            time_seconds: time_seconds.and_then(|t| u64::try_from(t).ok()),
            created_at,
        })
    }
}

fn missing_field(id: &str, field: &str) -> QweekError {
    QweekError::Serialization {
        format: "document".to_string(),
        message: format!("Document '{}' has no '{}' field", id, field),
    }
}

fn invalid_field(field: &str) -> QweekError {
    QweekError::Serialization {
        format: "document".to_string(),
        message: format!("Field '{}' is out of range", field),
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)?
        .get("stringValue")?
        .as_str()
        .map(str::to_string)
}

/// Integers arrive as strings (`"7"`); numbers and doubles are accepted too.
fn integer_field(fields: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = fields.get(key)?;
    if let Some(integer) = value.get("integerValue") {
        return match integer {
            Value::String(s) => s.parse().ok(),
            other => other.as_i64(),
        };
    }
    value
        .get("doubleValue")
        .and_then(Value::as_f64)
        .map(|d| d.round() as i64)
}

fn timestamp_field(fields: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(key)?.get("timestampValue")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
