//! Question bank: the static items of both rounds and the shuffle used to
//! present them.

mod bank;
mod model;
mod shuffle;

pub use bank::{QuestionBank, ROUND1_ITEMS, ROUND2_ITEMS};
pub use model::{Round1Item, Round2Item, round1_options};
pub use shuffle::shuffle;
