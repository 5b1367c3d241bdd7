pub mod admin;
pub mod input;
pub mod play;
