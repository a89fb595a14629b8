//! Round state types.

/// Round state. States only advance; a round never branches back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer draws to the house policy.
    DealerTurn,
    /// The round has ended and the final outcome can be read.
    RoundOver,
}
