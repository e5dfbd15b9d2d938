//! Bitmask card sets, used for the deck pool and for player hands.

use core::fmt;
use core::iter::FusedIterator;

use crate::card::{Card, DECK_SIZE};

/// Bits of the 52 valid card positions.
const FULL_MASK: u64 = (1 << DECK_SIZE) - 1;

/// A set of cards packed into a `u64`.
///
/// Bit `i` is set when the card with index `i` is in the set. Bits 52 and
/// above are always clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet(u64);

impl CardSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a set holding all 52 cards.
    #[must_use]
    pub const fn full() -> Self {
        Self(FULL_MASK)
    }

    /// Creates a set from a raw mask. Bits outside the deck are dropped.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & FULL_MASK)
    }

    /// Returns the raw mask.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Adds a card. Returns `true` if it was not already present.
    pub const fn insert(&mut self, card: Card) -> bool {
        let absent = self.0 & card.bits() == 0;
        self.0 |= card.bits();
        absent
    }

    /// Removes a card. Returns `true` if it was present.
    pub const fn remove(&mut self, card: Card) -> bool {
        let present = self.0 & card.bits() != 0;
        self.0 &= !card.bits();
        present
    }

    /// Returns whether the card is in the set.
    #[must_use]
    pub const fn contains(self, card: Card) -> bool {
        self.0 & card.bits() != 0
    }

    /// Returns the number of cards in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the `n`-th card in ascending bit order (0-based), or `None`
    /// if the set holds `n` cards or fewer.
    #[must_use]
    pub const fn nth(self, n: usize) -> Option<Card> {
        let mut bits = self.0;
        let mut skipped = 0;
        while skipped < n && bits != 0 {
            bits &= bits - 1;
            skipped += 1;
        }
        if bits == 0 {
            return None;
        }
        Some(lowest(bits))
    }

    /// Returns an iterator over the cards in ascending bit order: Hearts Ace
    /// through King, then Spades, Diamonds and Clubs.
    #[must_use]
    pub const fn iter(self) -> Cards {
        Cards(self.0)
    }
}

/// Lowest set bit of a non-zero in-deck mask.
const fn lowest(bits: u64) -> Card {
    match Card::from_bits(bits & bits.wrapping_neg()) {
        Ok(card) => card,
        // Masks are kept within the deck bits.
        Err(_) => unreachable!(),
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = Cards;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for CardSet {
    /// Writes one `"  <Suit>, <Value>"` line per card.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.iter() {
            writeln!(f, "  {card}")?;
        }
        Ok(())
    }
}

/// Iterator over the cards of a [`CardSet`].
#[derive(Debug, Clone)]
pub struct Cards(u64);

impl Iterator for Cards {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let card = lowest(self.0);
        self.0 &= self.0 - 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Cards {}

impl FusedIterator for Cards {}
