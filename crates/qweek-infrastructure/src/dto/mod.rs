//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent wire formats of remote stores. They are private to the
//! infrastructure layer; the domain only sees `Participant`.

mod document;

pub use document::{DocumentDto, ListDocumentsResponse};
