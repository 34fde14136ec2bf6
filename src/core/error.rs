use super::types::Position;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("board size {0} is out of range (3-9)")]
    InvalidSize(usize),
    #[error("cell {0} is occupied or out of range")]
    OccupiedOrInvalid(Position),
    #[error("no legal move left on the board")]
    NoLegalMove,
    #[error("input stream closed")]
    InputClosed,
}
