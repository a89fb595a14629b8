//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not waiting on a player decision.
    #[error("the round is not waiting on a player decision")]
    InvalidState,
}

/// Errors that can occur during the dealer's turn and final resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
}
