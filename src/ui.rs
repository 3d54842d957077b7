//! Input and display collaborators.
//!
//! The engine talks to the outside world only through [`InputProvider`] and
//! [`DisplaySink`], so the console front-end can be swapped for buffers or
//! test spies.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::card::{Card, Suit};
use crate::hand::Hand;

/// Provides lines of player input.
pub trait InputProvider {
    /// Shows `prompt` and reads one line of input, without the trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read, including end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Receives round-state renders and one-line messages.
pub trait DisplaySink {
    /// Draws the table: both hands and their totals. While `reveal_dealer`
    /// is false only the dealer's first card is shown.
    fn render(&mut self, dealer: &Hand, player: &Hand, player_name: &str, reveal_dealer: bool);

    /// Shows a one-line message.
    fn announce(&mut self, message: &str);

    /// Pacing delay between screens. No-op by default.
    fn pause(&mut self) {}
}

/// Reads player input from standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl StdinInput {
    /// Creates a new stdin input provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("=> {prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            // A closed stdin would otherwise spin in the re-prompt loops.
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }

        Ok(line.trim_end().to_string())
    }
}

/// Renders the table to an ANSI terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Console {
    /// Creates a new console display.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DisplaySink for Console {
    fn render(&mut self, dealer: &Hand, player: &Hand, player_name: &str, reveal_dealer: bool) {
        print!("\u{1b}[2J\u{1b}[H");

        println!("Dealer: ");
        if reveal_dealer {
            println!("{}", format_cards(dealer.cards()));
            println!("Total: {}", dealer.total());
        } else {
            let up_card = dealer.cards().first();
            match up_card {
                Some(card) => println!("{}  ??", format_card(card)),
                None => println!("??"),
            }
            println!("Total: {}", up_card.map_or(0, |card| card.rank.base_value()));
        }

        println!();
        println!("{player_name}:");
        println!("{}", format_cards(player.cards()));
        println!("Total: {}", player.total());
        println!();
    }

    fn announce(&mut self, message: &str) {
        println!("=> {message}");
    }

    fn pause(&mut self) {
        thread::sleep(Duration::from_secs(1));
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join("  ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
