//! Player and dealer hand representation.

use crate::card::{Card, Rank};

/// A hand of cards belonging to the player or the dealer.
///
/// Cards are kept in deal order. The dealer flag is fixed at creation and
/// only affects how the hand is rendered: the dealer's first card stays
/// concealed until the reveal.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
    /// Whether this is the dealer's hand.
    dealer: bool,
}

impl Hand {
    /// Creates an empty player hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            dealer: false,
        }
    }

    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self {
            cards: Vec::new(),
            dealer: true,
        }
    }

    /// Appends the given cards, preserving deal order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether this is the dealer's hand.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        self.dealer
    }

    /// Calculates the total value of the hand. Recomputed on every call.
    ///
    /// Aces count as 11. If the total exceeds 21 and the hand holds at least
    /// one ace, 10 is subtracted exactly once; a hand with several aces is
    /// not softened further and can still bust.
    #[must_use]
    pub fn value(&self) -> u8 {
        let mut value: u8 = 0;
        let mut has_ace = false;

        for card in &self.cards {
            if card.rank == Rank::Ace {
                has_ace = true;
            }
            value = value.saturating_add(card.rank.value());
        }

        if has_ace && value > 21 {
            value -= 10;
        }

        value
    }

    /// Returns whether the hand totals exactly 21.
    ///
    /// Any number of cards qualifies, not only a two-card natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.value() == 21
    }

    /// Renders the hand as display lines: a header, one line per card, and a
    /// trailing value line for the player.
    ///
    /// The dealer's first card is rendered as `hidden` unless
    /// `show_all_dealer_cards` is set or the dealer already holds a
    /// blackjack.
    #[must_use]
    pub fn display_lines(&self, show_all_dealer_cards: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.cards.len() + 2);

        lines.push(if self.dealer { "Dealer's hand:" } else { "Your hand:" }.to_owned());

        let conceal_first = self.dealer && !show_all_dealer_cards && !self.is_blackjack();
        for (index, card) in self.cards.iter().enumerate() {
            if index == 0 && conceal_first {
                lines.push("hidden".to_owned());
            } else {
                lines.push(card.to_string());
            }
        }

        if !self.dealer {
            lines.push(format!("Value: {}", self.value()));
        }

        lines
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
