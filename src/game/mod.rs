use crate::core::{Board, GameError, Symbol};
use crate::display;
use crate::logic;
use crate::player::{HumanController, PlayerController, RandomBot};
use crossterm::style::Stylize;
use rand::seq::SliceRandom;
use rand::Rng;

/// Terminal outcome of one game. Statistics count any `HumanWin` the same
/// way; the name is kept for the announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    HumanWin(String),
    BotWin,
    Draw,
}

pub struct Game {
    board: Board,
    x_player: Box<dyn PlayerController>,
    o_player: Box<dyn PlayerController>,
}

impl Game {
    pub fn new(
        board: Board,
        x_player: Box<dyn PlayerController>,
        o_player: Box<dyn PlayerController>,
    ) -> Self {
        Game {
            board,
            x_player,
            o_player,
        }
    }

    /// Human-vs-bot game. A coin flip decides who takes X and moves first;
    /// the assignment is fixed for the whole game.
    pub fn versus_bot(size: usize, human_name: &str) -> Result<Self, GameError> {
        let human: Box<dyn PlayerController> = Box::new(HumanController::new(human_name));
        let bot: Box<dyn PlayerController> = Box::new(RandomBot::new("Bot"));
        let (x_player, o_player) = if rand::thread_rng().gen_bool(0.5) {
            (human, bot)
        } else {
            (bot, human)
        };
        Ok(Game::new(Board::new(size)?, x_player, o_player))
    }

    /// Two-human game. The names are shuffled into the X/O seats.
    pub fn two_player(size: usize, first: &str, second: &str) -> Result<Self, GameError> {
        let mut names = [first, second];
        names.shuffle(&mut rand::thread_rng());
        Ok(Game::new(
            Board::new(size)?,
            Box::new(HumanController::new(names[0])),
            Box::new(HumanController::new(names[1])),
        ))
    }

    /// Drive the game to completion: strict X/O alternation, win check then
    /// draw check after every placed move.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        println!(
            "{} plays X and moves first. {} plays O.",
            self.x_player.name(),
            self.o_player.name()
        );

        let mut turn = Symbol::X;
        loop {
            display::render_board(&self.board);

            let seat = match turn {
                Symbol::X => self.x_player.as_ref(),
                Symbol::O => self.o_player.as_ref(),
            };
            if seat.is_bot() {
                println!("{} is thinking...", seat.name());
            }
            let pos = seat.choose_move(&self.board)?;
            self.board.place(pos, turn)?;
            if seat.is_bot() {
                println!("{} plays {}", seat.name(), pos);
            }

            if let Some(winning) = logic::winner(&self.board) {
                display::render_board(&self.board);
                let winner_seat = match winning {
                    Symbol::X => self.x_player.as_ref(),
                    Symbol::O => self.o_player.as_ref(),
                };
                println!("{}", format!("{} wins!", winner_seat.name()).bold().yellow());
                return Ok(if winner_seat.is_bot() {
                    GameResult::BotWin
                } else {
                    GameResult::HumanWin(winner_seat.name().to_string())
                });
            }
            if self.board.is_full() {
                display::render_board(&self.board);
                println!("{}", "Draw!".bold().yellow());
                return Ok(GameResult::Draw);
            }

            turn = turn.opponent();
        }
    }
}
