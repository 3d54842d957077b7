//! The multi-deck shoe that cards are dealt from.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Minimum shoe size before the next round; a smaller shoe is rebuilt.
pub const MIN_SHOE_SIZE: usize = 10;

/// An ordered stack of shuffled cards, dealt from the end one at a time.
///
/// A shoe only shrinks between rebuilds; cards are never returned to it.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates a shuffled shoe of `decks` full 52-card decks.
    #[must_use]
    pub fn new(decks: u8, rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a shoe with a fixed card order. The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Deals one card, or `None` if the shoe is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the shoe is too shallow for another round.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.len() < MIN_SHOE_SIZE
    }
}
