//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while running the game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The shoe ran out of cards mid-round.
    ///
    /// Unreachable when the session tops up the shoe before each round;
    /// hitting it means a broken precondition, not a recoverable condition.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
    /// Reading player input failed.
    #[error("failed to read input")]
    Input(#[from] std::io::Error),
}
