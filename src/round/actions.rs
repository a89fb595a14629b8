use crate::card::Card;
use crate::error::ActionError;

use super::{Round, RoundState};

impl Round {
    /// Returns whether the round is still waiting on a player decision.
    ///
    /// The player's turn lasts while their hand is under 21 and they have
    /// not stood.
    #[must_use]
    pub fn player_can_act(&self) -> bool {
        self.state == RoundState::PlayerTurn && !self.stood && self.player.value() < 21
    }

    /// Player action: Hit (draw one card).
    ///
    /// Returns the dealt card, or `None` if the deck is exhausted. An empty
    /// deck is not an error; the hand is simply left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting on a player decision.
    pub fn hit(&mut self) -> Result<Option<Card>, ActionError> {
        if !self.player_can_act() {
            return Err(ActionError::InvalidState);
        }

        let dealt = self.deck.deal(1);
        let card = dealt.first().copied();
        self.player.add_cards(dealt);

        Ok(card)
    }

    /// Player action: Stand (end the turn without drawing).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting on a player decision.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if !self.player_can_act() {
            return Err(ActionError::InvalidState);
        }

        self.stood = true;
        Ok(())
    }
}
