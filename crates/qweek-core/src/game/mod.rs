//! Game flow: the five-state session machine and its scoring.
//!
//! # Module Structure
//!
//! - `state`: `GameState` and the linear transition order
//! - `scoring`: per-round score rules
//! - `review`: per-question rows shown on the result screens
//! - `summary`: final score, percentage and elapsed time
//! - `controller`: `GameController`, owner of one session's data

mod controller;
mod review;
mod scoring;
mod state;
mod summary;

pub use controller::{GameController, RoundScores};
pub use review::{NOT_ANSWERED, ReviewRow, RoundReview};
pub use scoring::{score_round1, score_round2};
pub use state::GameState;
pub use summary::{FinalSummary, format_elapsed};
