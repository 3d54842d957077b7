//! Session control and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::GameError;
use crate::options::GameOptions;
use crate::result::Score;
use crate::shoe::Shoe;
use crate::ui::{DisplaySink, InputProvider};

mod round;
pub mod state;

pub use state::RoundState;

/// A blackjack session: one player against the dealer, sharing a shoe.
///
/// The game owns the shoe, the running score, and the RNG used for
/// shuffles. Rounds are played through [`Game::run`] or one at a time with
/// [`Game::play_round`].
pub struct Game {
    /// The shoe cards are dealt from.
    pub shoe: Shoe,
    /// Session options.
    pub options: GameOptions,
    /// Cumulative score across rounds.
    pub score: Score,
    /// Random number generator used for shuffles.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_decks(2), 42);
    /// assert_eq!(game.shoe.len(), 104);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng);

        Self {
            shoe,
            options,
            score: Score::new(),
            rng,
        }
    }

    /// Runs rounds until the player quits.
    ///
    /// Before each round the shoe is rebuilt if it has run low. After each
    /// round the outcome is recorded and the running score announced; any
    /// reply to the play-again prompt continues except a case-insensitive
    /// `"q"`.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or the shoe runs out of
    /// cards mid-round.
    pub fn run<I, D>(&mut self, input: &mut I, display: &mut D) -> Result<(), GameError>
    where
        I: InputProvider,
        D: DisplaySink,
    {
        display.announce(&format!(
            "Shuffling {} deck(s) of cards...",
            self.options.decks
        ));
        display.pause();

        loop {
            self.top_up_shoe(display);

            let outcome = self.play_round(input, display)?;
            self.score.record(outcome);

            display.announce(&format!(
                "Wins: {}    Losses: {}    Ties: {}",
                self.score.wins, self.score.losses, self.score.ties
            ));

            let choice = input.read_line("Press enter to play another hand (q to quit): ")?;
            if choice.trim().eq_ignore_ascii_case("q") {
                break;
            }
        }

        Ok(())
    }

    /// Rebuilds the shoe when it has fallen below the reshuffle threshold.
    ///
    /// Guarantees a round never runs out of cards mid-deal.
    pub fn top_up_shoe<D: DisplaySink>(&mut self, display: &mut D) {
        if !self.shoe.needs_reshuffle() {
            return;
        }

        display.announce(&format!("Deck only has {} cards...", self.shoe.len()));
        display.pause();

        display.announce(&format!(
            "Shuffling {} deck(s) of cards...",
            self.options.decks
        ));
        self.shoe = Shoe::new(self.options.decks, &mut self.rng);
        display.pause();
    }
}
