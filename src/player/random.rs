use crate::core::{Board, GameError, Position};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// Uniform random choice among the empty cells.
pub struct RandomBot {
    name: String,
}

impl RandomBot {
    pub fn new(name: &str) -> Self {
        RandomBot {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomBot {
    fn choose_move(&self, board: &Board) -> Result<Position, GameError> {
        let mut rng = rand::thread_rng();
        board
            .empty_positions()
            .choose(&mut rng)
            .copied()
            .ok_or(GameError::NoLegalMove)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_bot(&self) -> bool {
        true
    }
}
