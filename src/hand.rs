//! Hand representation and valuation.

use crate::card::{Card, Rank};

/// The cards held by one participant for the duration of a round.
///
/// A hand starts empty, grows by appends, and is discarded when the round
/// ends.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the best total for the hand.
    ///
    /// Aces are counted as 11 and downgraded to 1, one at a time, while the
    /// total exceeds 21. An empty hand totals 0.
    #[must_use]
    pub fn total(&self) -> u8 {
        let mut total: u8 = 0;
        let mut aces: u8 = 0;

        for card in &self.cards {
            if card.rank == Rank::Ace {
                aces += 1;
            }
            total = total.saturating_add(card.rank.base_value());
        }

        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }

        total
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
