//! Application layer for QWeek.
//!
//! Use cases that coordinate the game domain with the participant store:
//! registration, playing a session, and the admin results view.

pub mod admin_service;
pub mod csv_export;
pub mod play_session;
pub mod registration;

pub use admin_service::AdminService;
pub use play_session::{FinishOutcome, PlaySession, SaveStatus};
pub use registration::{Registration, RegistrationService, parse_play_query};
