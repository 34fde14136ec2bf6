use crate::core::{Board, GameError, Position};

/// Decision procedure that selects a player's next move.
pub trait PlayerController {
    /// Produce a currently-empty, in-bounds position for this board, or
    /// fail when none can be supplied.
    fn choose_move(&self, board: &Board) -> Result<Position, GameError>;
    fn name(&self) -> &str;
    fn is_bot(&self) -> bool;
}
