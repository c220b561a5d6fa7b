pub mod board;
pub mod item;
