//! A terminal blackjack game engine: one player against the dealer, dealing
//! from a shared multi-deck shoe.
//!
//! [`Game`] runs the session loop of rounds and reshuffles while all input
//! and output go through the [`InputProvider`] and [`DisplaySink`] traits,
//! so the engine never touches the console directly.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Console, Game, GameOptions, StdinInput};
//!
//! let options = GameOptions::default().with_decks(2).with_player_name("Ada");
//! let mut game = Game::new(options, 42);
//! let _ = game.run(&mut StdinInput::new(), &mut Console::new());
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod ui;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::GameError;
pub use game::{Game, RoundState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{RoundOutcome, Score, resolve};
pub use shoe::{MIN_SHOE_SIZE, Shoe};
pub use ui::{Console, DisplaySink, InputProvider, StdinInput};
