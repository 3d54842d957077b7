use crate::error::GameError;
use crate::hand::Hand;
use crate::result::{RoundOutcome, resolve};
use crate::shoe::Shoe;
use crate::ui::{DisplaySink, InputProvider};

use super::{Game, RoundState};

/// The player's answer to the hit-or-stand prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Hit,
    Stand,
}

impl Game {
    /// Plays one round and returns its outcome.
    ///
    /// The caller is responsible for topping up the shoe first; see
    /// [`Game::top_up_shoe`].
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or the shoe runs out of
    /// cards mid-round.
    pub fn play_round<I, D>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<RoundOutcome, GameError>
    where
        I: InputProvider,
        D: DisplaySink,
    {
        Round::new().play(&mut self.shoe, input, display, &self.options.player_name)
    }
}

/// One round's state machine. Owns both hands until the round resolves.
struct Round {
    player: Hand,
    dealer: Hand,
    state: RoundState,
}

impl Round {
    fn new() -> Self {
        Self {
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
        }
    }

    fn play<I, D>(
        mut self,
        shoe: &mut Shoe,
        input: &mut I,
        display: &mut D,
        player_name: &str,
    ) -> Result<RoundOutcome, GameError>
    where
        I: InputProvider,
        D: DisplaySink,
    {
        loop {
            self.state = match self.state {
                RoundState::Dealing => self.deal_initial(shoe, display, player_name)?,
                RoundState::PlayerTurn => self.player_turn(shoe, input, display, player_name)?,
                RoundState::DealerTurn => self.dealer_turn(shoe, display, player_name)?,
                RoundState::Resolved(outcome) => {
                    display.announce(self.outcome_message(outcome));
                    return Ok(outcome);
                }
            };
        }
    }

    /// Deals one card each to player, dealer, player, dealer.
    ///
    /// The resolver call here can only ever yield a natural: two cards
    /// cannot exceed 21.
    fn deal_initial<D: DisplaySink>(
        &mut self,
        shoe: &mut Shoe,
        display: &mut D,
        player_name: &str,
    ) -> Result<RoundState, GameError> {
        for _ in 0..2 {
            self.player
                .add_card(shoe.draw().ok_or(GameError::ShoeExhausted)?);
            self.dealer
                .add_card(shoe.draw().ok_or(GameError::ShoeExhausted)?);
        }

        if let Some(outcome) = resolve(&self.dealer, &self.player, false) {
            display.render(&self.dealer, &self.player, player_name, true);
            return Ok(RoundState::Resolved(outcome));
        }
        Ok(RoundState::PlayerTurn)
    }

    /// Renders, prompts, and draws until the player stands or reaches 21.
    fn player_turn<I, D>(
        &mut self,
        shoe: &mut Shoe,
        input: &mut I,
        display: &mut D,
        player_name: &str,
    ) -> Result<RoundState, GameError>
    where
        I: InputProvider,
        D: DisplaySink,
    {
        while self.player.total() < 21 {
            display.render(&self.dealer, &self.player, player_name, false);

            match prompt_decision(input)? {
                Decision::Stand => break,
                Decision::Hit => self
                    .player
                    .add_card(shoe.draw().ok_or(GameError::ShoeExhausted)?),
            }
        }

        display.render(&self.dealer, &self.player, player_name, true);

        // The post-turn check: a bust, or hitting to exactly 21, resolves
        // the round before the dealer acts.
        if let Some(outcome) = resolve(&self.dealer, &self.player, false) {
            return Ok(RoundState::Resolved(outcome));
        }
        Ok(RoundState::DealerTurn)
    }

    /// Dealer draws while under 17, then the round is decided.
    fn dealer_turn<D: DisplaySink>(
        &mut self,
        shoe: &mut Shoe,
        display: &mut D,
        player_name: &str,
    ) -> Result<RoundState, GameError> {
        while self.dealer.total() < 17 {
            self.dealer
                .add_card(shoe.draw().ok_or(GameError::ShoeExhausted)?);
            display.render(&self.dealer, &self.player, player_name, true);
        }

        let outcome = resolve(&self.dealer, &self.player, true)
            .expect("resolver always decides once the dealer's turn is finished");
        Ok(RoundState::Resolved(outcome))
    }

    fn outcome_message(&self, outcome: RoundOutcome) -> &'static str {
        match outcome {
            RoundOutcome::Push => "Push...",
            RoundOutcome::PlayerWin => {
                if self.player.total() == 21 {
                    "21! You win with a BlackJack!"
                } else if self.dealer.total() > 21 {
                    "Dealer busted... You win!"
                } else {
                    "You win!"
                }
            }
            RoundOutcome::DealerWin => {
                if self.player.total() > 21 {
                    "Busted! Better luck next time..."
                } else {
                    "Dealer wins. Better luck next time..."
                }
            }
        }
    }
}

/// Asks for hit-or-stand until the reply is a case-insensitive "h" or "s".
fn prompt_decision<I: InputProvider>(input: &mut I) -> Result<Decision, GameError> {
    loop {
        let choice = input.read_line("(h)it or (s)tand: ")?;
        match choice.trim().to_lowercase().as_str() {
            "h" => return Ok(Decision::Hit),
            "s" => return Ok(Decision::Stand),
            _ => {}
        }
    }
}
