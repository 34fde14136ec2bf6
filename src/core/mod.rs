pub mod board;
pub mod error;
pub mod types;

pub use board::{Board, MAX_SIZE, MIN_SIZE};
pub use error::GameError;
pub use types::{Position, Symbol};
