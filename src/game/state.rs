//! Round state types.

use crate::result::RoundOutcome;

/// State of a single round.
///
/// A round advances `Dealing` → `PlayerTurn` → `DealerTurn` → `Resolved`;
/// the player and dealer turns are skipped when an earlier state already
/// produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealing the initial two cards to each participant.
    Dealing,
    /// Waiting for the player's hit-or-stand decisions.
    PlayerTurn,
    /// Dealer draws to 17 or more.
    DealerTurn,
    /// Terminal: the round is decided.
    Resolved(RoundOutcome),
}
