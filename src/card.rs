//! Card types and the suit/value bit codec.
//!
//! A card is a single set bit in a `u64`. Bit `suit * 13 + value` holds the
//! card, so the four suits occupy contiguous 13-bit bands in ascending bit
//! order: Hearts, Spades, Diamonds, Clubs.

use core::fmt;

use crate::error::CardError;

/// Number of suits in a deck.
pub const NUM_SUITS: usize = 4;

/// Number of values per suit.
pub const NUM_VALUES: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = NUM_SUITS * NUM_VALUES;

/// Card suit, in ascending bit-band order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts (bits 0..13).
    Hearts,
    /// Spades (bits 13..26).
    Spades,
    /// Diamonds (bits 26..39).
    Diamonds,
    /// Clubs (bits 39..52).
    Clubs,
}

impl Suit {
    /// All suits in bit order.
    pub const ALL: [Self; NUM_SUITS] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    /// Returns the band index of the suit (0 for Hearts, 3 for Clubs).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit for a band index, or `None` if `index >= 4`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Hearts),
            1 => Some(Self::Spades),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card value, Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Value {
    /// All values in bit order.
    pub const ALL: [Self; NUM_VALUES] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the offset of the value within its suit band (0 for Ace).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the value for a band offset, or `None` if `index >= 13`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_VALUES {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the value name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card, stored as its single-bit identifier.
///
/// Every `Card` has exactly one bit set, below bit 52. Raw identifiers are
/// validated by [`Card::from_bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u64);

impl Card {
    /// Creates the card for a suit and value.
    #[must_use]
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self(1 << (suit.index() as u32 * NUM_VALUES as u32 + value.index() as u32))
    }

    /// Creates a card from its bit index (`suit * 13 + value`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::OutOfRange`] if `index >= 52`.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        if (index as usize) < DECK_SIZE {
            Ok(Self(1 << index))
        } else {
            Err(CardError::OutOfRange)
        }
    }

    /// Creates a card from a raw single-bit identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Empty`] if no bit is set,
    /// [`CardError::MultipleBits`] if more than one bit is set, and
    /// [`CardError::OutOfRange`] if the bit lies outside the four suit bands.
    pub const fn from_bits(bits: u64) -> Result<Self, CardError> {
        if bits == 0 {
            return Err(CardError::Empty);
        }
        if bits.count_ones() != 1 {
            return Err(CardError::MultipleBits);
        }
        if bits.trailing_zeros() as usize >= DECK_SIZE {
            return Err(CardError::OutOfRange);
        }
        Ok(Self(bits))
    }

    /// Returns the raw single-bit identifier.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns the bit index of the card.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0.trailing_zeros() as u8
    }

    /// Returns the suit, determined by the 13-bit band holding the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        if self.0 < band_end(Suit::Hearts) {
            Suit::Hearts
        } else if self.0 < band_end(Suit::Spades) {
            Suit::Spades
        } else if self.0 < band_end(Suit::Diamonds) {
            Suit::Diamonds
        } else {
            Suit::Clubs
        }
    }

    /// Returns the value, determined by the bit offset within the band.
    #[must_use]
    pub const fn value(self) -> Value {
        let mut bits = self.0;
        while bits >= 1 << NUM_VALUES {
            bits >>= NUM_VALUES;
        }

        match Value::from_index(bits.trailing_zeros() as u8) {
            Some(value) => value,
            // Normalized bits are below 1 << 13.
            None => unreachable!(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.suit(), self.value())
    }
}

impl TryFrom<u64> for Card {
    type Error = CardError;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<Card> for u64 {
    fn from(card: Card) -> Self {
        card.0
    }
}

/// First identifier past the band of `suit`.
const fn band_end(suit: Suit) -> u64 {
    1 << (NUM_VALUES as u32 * (suit.index() as u32 + 1))
}

/// Decodes the suit of a raw card identifier.
///
/// # Errors
///
/// Fails under the same conditions as [`Card::from_bits`].
pub const fn get_suit(bits: u64) -> Result<Suit, CardError> {
    match Card::from_bits(bits) {
        Ok(card) => Ok(card.suit()),
        Err(err) => Err(err),
    }
}

/// Decodes the value of a raw card identifier.
///
/// # Errors
///
/// Fails under the same conditions as [`Card::from_bits`]; in particular an
/// empty identifier yields [`CardError::Empty`].
pub const fn get_value(bits: u64) -> Result<Value, CardError> {
    match Card::from_bits(bits) {
        Ok(card) => Ok(card.value()),
        Err(err) => Err(err),
    }
}
