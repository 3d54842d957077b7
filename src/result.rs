//! Round outcomes, outcome resolution, and the session score.

use std::cmp::Ordering;

use crate::hand::Hand;

/// Final result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player won the round.
    PlayerWin,
    /// The dealer won the round.
    DealerWin,
    /// A tied round; no winner.
    Push,
}

/// Decides the outcome of a round, or `None` if it cannot be decided yet.
///
/// The rules are checked in order and the first match wins:
///
/// 1. both totals are 21 → push
/// 2. player total is 21 → player wins
/// 3. player busted → dealer wins
/// 4. dealer busted → player wins
/// 5. dealer's turn is finished → compare totals
/// 6. otherwise the round is still in play
///
/// Rules 1-4 apply regardless of `dealer_turn_finished`, so a player 21 or
/// bust ends the round before the dealer acts. With `dealer_turn_finished`
/// set this function always returns a decision.
#[must_use]
pub fn resolve(dealer: &Hand, player: &Hand, dealer_turn_finished: bool) -> Option<RoundOutcome> {
    let dealer_total = dealer.total();
    let player_total = player.total();

    if player_total == 21 && dealer_total == 21 {
        Some(RoundOutcome::Push)
    } else if player_total == 21 {
        Some(RoundOutcome::PlayerWin)
    } else if player_total > 21 {
        Some(RoundOutcome::DealerWin)
    } else if dealer_total > 21 {
        Some(RoundOutcome::PlayerWin)
    } else if dealer_turn_finished {
        Some(match player_total.cmp(&dealer_total) {
            Ordering::Equal => RoundOutcome::Push,
            Ordering::Less => RoundOutcome::DealerWin,
            Ordering::Greater => RoundOutcome::PlayerWin,
        })
    } else {
        None
    }
}

/// Cumulative win/loss/tie tally for a session.
///
/// Exactly one counter increments per completed round, so the counters sum
/// to the number of rounds played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Rounds the player won.
    pub wins: u32,
    /// Rounds the dealer won.
    pub losses: u32,
    /// Pushed rounds.
    pub ties: u32,
}

impl Score {
    /// Creates a zeroed score.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    /// Records the outcome of a completed round.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWin => self.wins += 1,
            RoundOutcome::DealerWin => self.losses += 1,
            RoundOutcome::Push => self.ties += 1,
        }
    }

    /// Returns the number of completed rounds.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}
