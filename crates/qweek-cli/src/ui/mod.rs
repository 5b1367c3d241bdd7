pub mod board_view;
pub mod screens;
pub mod terminal;

pub use terminal::{Input, Terminal};
