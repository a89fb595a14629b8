//! Round orchestration: dealing, turns, and resolution.

use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Cards dealt to each side before any decision is made.
const OPENING_CARDS: usize = 2;

/// One round of blackjack against the automated dealer.
///
/// A round owns its deck and both hands; nothing carries over between
/// rounds. The flow is: opening deal, a check for immediate blackjacks, the
/// player's hit/stand decisions, another check, the dealer drawing to the
/// house policy, and finally a comparison of the two hands.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use twentyone::{Round, RoundState};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let round = Round::new(&mut rng);
/// assert_eq!(round.state(), RoundState::PlayerTurn);
/// ```
#[derive(Debug)]
pub struct Round {
    /// Cards remaining for this round.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Whether the player has chosen to stand.
    stood: bool,
}

impl Round {
    /// Starts a round from a freshly shuffled deck, dealing two cards
    /// alternately to the player and the dealer.
    #[must_use]
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::from_deck(deck)
    }

    /// Starts a round dealing from the given deck as-is, without shuffling.
    ///
    /// Useful for scripting exact card sequences.
    #[must_use]
    pub fn from_deck(mut deck: Deck) -> Self {
        let mut player = Hand::new();
        let mut dealer = Hand::dealer();

        for _ in 0..OPENING_CARDS {
            player.add_cards(deck.deal(1));
            dealer.add_cards(deck.deal(1));
        }

        Self {
            deck,
            player,
            dealer,
            state: RoundState::PlayerTurn,
            stood: false,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
