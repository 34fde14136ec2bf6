use crate::core::{Board, Position, Symbol};
use crossterm::style::Stylize;

/// Print the board: a header row of column numbers, each row prefixed by
/// its row number, `.` for empty cells.
pub fn render_board(board: &Board) {
    let size = board.size();

    print!(" ");
    for col in 1..=size {
        print!(" {}", col);
    }
    println!();

    for row in 1..=size {
        print!("{}", row);
        for col in 1..=size {
            match board.get(Position::new(row, col)) {
                Some(Symbol::X) => print!(" {}", "X".cyan()),
                Some(Symbol::O) => print!(" {}", "O".magenta()),
                None => print!(" ."),
            }
        }
        println!();
    }
}
