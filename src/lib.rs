//! A 52-card deck packed into a 64-bit bitmask, with optional `no_std`
//! support.
//!
//! Each card is one bit of a `u64`: bit `suit * 13 + value`. The [`Deck`]
//! keeps undrawn cards in a bitmask pool for uniform random draws and in an
//! ordered peek buffer for cards revealed ahead of time.
//!
//! # Example
//!
//! ```
//! use bitdeck::{CardSet, Deck, DeckOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! let peeked = deck.peek_cards(5)?;
//! assert_eq!(deck.cards_left(), 52);
//!
//! let mut hand = CardSet::new();
//! for expected in peeked {
//!     let card = deck.draw_card()?;
//!     assert_eq!(card, expected);
//!     hand.insert(card);
//! }
//! assert_eq!(hand.len(), 5);
//! # Ok::<(), bitdeck::DeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, NUM_SUITS, NUM_VALUES, Suit, Value, get_suit, get_value};
pub use deck::Deck;
pub use error::{CardError, DeckError};
pub use hand::{CardSet, Cards};
pub use options::{DeckOptions, Reseed};
