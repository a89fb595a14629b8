//! A standard 52-card deck.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards, dealt from the top (the end of the sequence).
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, bottom first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck, one of each suit and rank, in a fixed
    /// deterministic order (suits outer, ranks inner).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from the given cards, preserving their order.
    ///
    /// The last card is the top of the deck and will be dealt first. Useful
    /// for scripting exact deal sequences.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        if self.cards.len() > 1 {
            self.cards.shuffle(rng);
        }
    }

    /// Removes and returns up to `count` cards from the top of the deck.
    ///
    /// Returns fewer cards than requested if the deck runs out; exhaustion is
    /// not an error.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let mut dealt = Vec::with_capacity(count.min(self.cards.len()));

        for _ in 0..count {
            let Some(card) = self.cards.pop() else {
                break;
            };
            dealt.push(card);
        }

        dealt
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
