//! Matching widgets for both rounds.
//!
//! - `select`: round 1, one select-style choice per prompt
//! - `connect`: round 2, click-to-connect pairing between two columns
//! - `geometry`: anchor points and connecting lines derived from layout

mod connect;
mod geometry;
mod select;

use std::collections::HashMap;

pub use connect::{ConnectBoard, Connection};
pub use geometry::{AnchorMap, Line, Point, Rect};
pub use select::SelectBoard;

/// Submitted answers of a round: prompt id to chosen value (round 1) or to
/// connected item id (round 2).
pub type Answers = HashMap<String, String>;
