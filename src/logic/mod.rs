use crate::core::{Board, Position, Symbol, MAX_SIZE, MIN_SIZE};
use std::sync::OnceLock;

/// A sequence of positions that wins the game when one symbol holds all of them.
pub type Line = Vec<Position>;

// One cache slot per supported board size.
const EMPTY_SLOT: OnceLock<Vec<Line>> = OnceLock::new();
static LINE_CACHE: [OnceLock<Vec<Line>>; MAX_SIZE - MIN_SIZE + 1] =
    [EMPTY_SLOT; MAX_SIZE - MIN_SIZE + 1];

/// All 2N+2 winning lines for a board of the given size: N rows (columns
/// ascending), N columns (rows ascending), the main diagonal, then the
/// anti-diagonal. Built once per size, cached for the process lifetime.
pub fn winning_lines(size: usize) -> &'static [Line] {
    LINE_CACHE[size - MIN_SIZE].get_or_init(|| build_lines(size))
}

fn build_lines(size: usize) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::with_capacity(2 * size + 2);
    for row in 1..=size {
        lines.push((1..=size).map(|col| Position::new(row, col)).collect());
    }
    for col in 1..=size {
        lines.push((1..=size).map(|row| Position::new(row, col)).collect());
    }
    lines.push((1..=size).map(|i| Position::new(i, i)).collect());
    lines.push((1..=size).map(|i| Position::new(i, size - i + 1)).collect());
    lines
}

/// First line in catalog order held entirely by one symbol decides the
/// winner. An all-empty line never counts.
pub fn winner(board: &Board) -> Option<Symbol> {
    for line in winning_lines(board.size()) {
        let first = board.get(line[0]);
        if first.is_some() && line.iter().all(|&pos| board.get(pos) == first) {
            return first;
        }
    }
    None
}
