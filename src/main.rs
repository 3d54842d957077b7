//! Terminal blackjack against the dealer.

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Console, Game, GameError, GameOptions, InputProvider, StdinInput};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let mut input = StdinInput::new();
    let mut display = Console::new();

    println!("---- Welcome to BlackJack ----");
    println!();

    let player_name = input.read_line("Enter your name: ")?;

    // Always use at least one deck
    let decks = input
        .read_line("Number of decks: ")?
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|&decks| decks >= 1)
        .unwrap_or(1);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let options = GameOptions::default()
        .with_decks(decks)
        .with_player_name(player_name);

    Game::new(options, seed).run(&mut input, &mut display)
}
