//! A single-player blackjack game engine.
//!
//! The crate provides a [`Round`] type that manages one round against the
//! automated dealer: the opening deal, the player's hit/stand decisions, the
//! dealer's fixed drawing policy, and outcome resolution. Each round owns a
//! freshly shuffled [`Deck`] and both hands; nothing carries over between
//! rounds.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use twentyone::Round;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let round = Round::new(&mut rng);
//! assert_eq!(round.player_hand().cards().len(), 2);
//! assert_eq!(round.dealer_hand().cards().len(), 2);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod outcome;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, ShowdownError};
pub use hand::Hand;
pub use outcome::Outcome;
pub use round::{Round, RoundState};
