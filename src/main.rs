use anyhow::Result;
use std::io::{self, Write};
use tictactoe_console::game::Game;
use tictactoe_console::stats::StatsStore;

const STATS_DIR: &str = "stats";

fn main() -> Result<()> {
    let store = StatsStore::new(STATS_DIR);
    store.init()?;

    println!("=== Tic-Tac-Toe ===");
    let size = prompt_board_size()?;

    loop {
        println!();
        println!("Select mode:");
        println!("1. Play against the bot");
        println!("2. Two players");
        println!("0. Quit");
        let choice = prompt_line("Your choice: ")?;

        match choice.as_str() {
            "1" => {
                let name = prompt_line("Enter your name: ")?;
                let mut game = Game::versus_bot(size, &name)?;
                let result = game.play()?;
                store.record(&result)?;
            }
            "2" => {
                let first = prompt_line("First player's name: ")?;
                let second = prompt_line("Second player's name: ")?;
                let mut game = Game::two_player(size, &first, &second)?;
                let result = game.play()?;
                store.record(&result)?;
            }
            "0" => break,
            _ => println!("Invalid choice."),
        }
    }

    let stats = store.load();
    println!();
    println!("FINAL STATISTICS:");
    println!("Human wins (single-player): {}", stats.human_wins);
    println!("Bot wins: {}", stats.bot_wins);
    println!("Draws: {}", stats.draws);
    println!("Total games played: {}", stats.total());
    println!();
    println!("Thanks for playing!");
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(input.trim().to_string())
}

fn prompt_board_size() -> Result<usize> {
    loop {
        let input = prompt_line("Board size (3-9): ")?;
        match input.parse::<usize>() {
            Ok(size) if (3..=9).contains(&size) => return Ok(size),
            Ok(_) => println!("Size must be between 3 and 9."),
            Err(_) => println!("Enter a number!"),
        }
    }
}
