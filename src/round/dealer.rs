use crate::card::Card;
use crate::error::ShowdownError;
use crate::outcome::Outcome;

use super::{Round, RoundState};

/// The dealer draws while under this value.
const DEALER_STAND_VALUE: u8 = 17;

impl Round {
    /// Classifies the round without changing any state.
    ///
    /// In non-final mode (`game_over` false) only the conditions reachable
    /// before showdown are checked, in a fixed order: player bust, dealer
    /// bust, mutual blackjack, player blackjack. In final mode the hands are
    /// compared by raw value; a total over 21 is not re-checked here, so the
    /// earlier bust checks are what keep a busted hand from reaching the
    /// comparison.
    #[must_use]
    pub fn check_winner(&self, game_over: bool) -> Outcome {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        if game_over {
            return if player_value > dealer_value {
                Outcome::PlayerWins
            } else if player_value == dealer_value {
                Outcome::Tie
            } else {
                Outcome::DealerWins
            };
        }

        if player_value > 21 {
            Outcome::PlayerBust
        } else if dealer_value > 21 {
            Outcome::DealerBust
        } else if self.dealer.is_blackjack() && self.player.is_blackjack() {
            Outcome::Tie
        } else if self.player.is_blackjack() {
            Outcome::PlayerBlackjack
        } else {
            Outcome::Unresolved
        }
    }

    /// Checks for a decided round ahead of the dealer's turn.
    ///
    /// Called right after the opening deal and again once the player's turn
    /// ends. A resolved outcome ends the round; an unresolved one moves play
    /// to the dealer once the player has no decisions left, and otherwise
    /// leaves the round in the player's turn.
    pub fn resolve(&mut self) -> Outcome {
        let outcome = self.check_winner(false);

        if outcome.is_resolved() {
            self.state = RoundState::RoundOver;
        } else if !self.player_can_act() {
            self.state = RoundState::DealerTurn;
        }

        outcome
    }

    /// Dealer plays out their hand: draw while under 17.
    ///
    /// Returns the cards drawn. Stops early if the deck runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.value() < DEALER_STAND_VALUE {
            let dealt = self.deck.deal(1);
            if dealt.is_empty() {
                break;
            }
            drawn.extend_from_slice(&dealt);
            self.dealer.add_cards(dealt);
        }

        self.state = RoundState::RoundOver;

        Ok(drawn)
    }

    /// Resolves the round by direct value comparison of the two hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn final_outcome(&self) -> Result<Outcome, ShowdownError> {
        if self.state != RoundState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        Ok(self.check_winner(true))
    }
}
