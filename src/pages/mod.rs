//! Page components for Dropdeck.

mod board;

pub use board::Board;
