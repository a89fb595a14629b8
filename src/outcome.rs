//! Round outcome classification.

/// Outcome of a winner check.
///
/// Classification is separate from presentation: a driver maps each tag to
/// whatever text it wants to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No win condition has been reached yet.
    Unresolved,
    /// The player went over 21; the dealer wins.
    PlayerBust,
    /// The dealer went over 21; the player wins.
    DealerBust,
    /// Both hands resolve to the same value.
    Tie,
    /// The player holds a blackjack and the dealer does not.
    PlayerBlackjack,
    /// The player's hand outvalues the dealer's at showdown.
    PlayerWins,
    /// The dealer's hand outvalues the player's at showdown.
    DealerWins,
}

impl Outcome {
    /// Returns whether the round is decided.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}
