//! Error types for card decoding and deck operations.

use thiserror::Error;

/// Errors that can occur when decoding a raw card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// No bit is set.
    #[error("card identifier is empty")]
    Empty,
    /// More than one bit is set.
    #[error("card identifier has more than one bit set")]
    MultipleBits,
    /// The set bit lies outside the 52 card positions.
    #[error("card identifier is outside the deck")]
    OutOfRange,
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// Fewer cards left than requested.
    #[error("requested {requested} cards but only {available} are left")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
    /// The card is already in the pool or the peek buffer.
    #[error("card is already in the deck")]
    AlreadyInDeck,
}
