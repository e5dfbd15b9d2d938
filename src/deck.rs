//! The bitmask deck: a random-draw pool plus an ordered peek buffer.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::mem;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE};
use crate::error::DeckError;
use crate::hand::CardSet;
use crate::options::DeckOptions;
#[cfg(feature = "std")]
use crate::options::Reseed;

/// A single 52-card deck.
///
/// Undrawn cards live either in the pool, from which draws are uniformly
/// random, or in the peek buffer, which holds cards revealed by
/// [`peek_cards`](Self::peek_cards) in the order they were revealed. The two
/// are disjoint, and [`draw_card`](Self::draw_card) empties the peek buffer
/// front to back before touching the pool.
///
/// The random generator is owned by the deck. [`Deck::new`] seeds a
/// `ChaCha8Rng`; [`Deck::with_rng`] accepts any seedable generator and
/// [`Deck::from_rng`] any generator at all.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Cards available to random draws.
    pool: CardSet,
    /// Number of cards in the pool.
    remaining: usize,
    /// Cards revealed ahead of drawing, in reveal order.
    peeked: VecDeque<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: R,
    /// Builds a fresh generator before each random draw, if reseeding.
    #[cfg(feature = "std")]
    reseed: Option<fn(u64) -> R>,
}

impl Deck {
    /// Creates a full deck with a generator seeded from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitdeck::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default(), 42);
    /// assert_eq!(deck.cards_left(), 52);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore + SeedableRng> Deck<R> {
    /// Creates a full deck drawing from the given generator.
    ///
    /// With [`Reseed::PerDraw`](crate::Reseed) the generator is replaced by
    /// a clock-seeded one before every random draw.
    #[must_use]
    pub fn with_rng(options: DeckOptions, rng: R) -> Self {
        let deck = Self::build(options, rng);
        #[cfg(feature = "std")]
        let deck = Self {
            reseed: (options.reseed == Reseed::PerDraw)
                .then_some(R::seed_from_u64 as fn(u64) -> R),
            ..deck
        };
        deck
    }
}

impl<R: RngCore> Deck<R> {
    /// Creates a full deck with default options drawing from the given
    /// generator, which is never reseeded.
    #[must_use]
    pub fn from_rng(rng: R) -> Self {
        Self::build(DeckOptions::default(), rng)
    }

    fn build(options: DeckOptions, rng: R) -> Self {
        Self {
            pool: CardSet::full(),
            remaining: DECK_SIZE,
            peeked: VecDeque::with_capacity(DECK_SIZE),
            options,
            rng,
            #[cfg(feature = "std")]
            reseed: None,
        }
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns the number of undrawn cards, peeked or not.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.remaining + self.peeked.len()
    }

    /// Returns the number of cards in the random pool.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns the random pool.
    #[must_use]
    pub const fn pool(&self) -> CardSet {
        self.pool
    }

    /// Returns the peeked cards, next to be drawn first.
    #[must_use]
    pub const fn peeked(&self) -> &VecDeque<Card> {
        &self.peeked
    }

    /// Returns whether the card is still in the deck (pooled or peeked).
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.pool.contains(card) || self.peeked.contains(&card)
    }

    /// Returns every peeked card to the pool and forgets the peek order.
    ///
    /// Cards that have been drawn stay out of the deck.
    pub fn shuffle(&mut self) {
        let peeked = mem::take(&mut self.peeked);
        debug!(returned = peeked.len(), "shuffling peeked cards into pool");
        for card in peeked {
            self.return_to_pool(card);
        }
    }

    /// Restores all 52 cards to the pool and empties the peek buffer.
    ///
    /// The generator state carries over.
    pub fn reset(&mut self) {
        debug!(cards_left = self.cards_left(), "resetting deck");
        self.pool = CardSet::full();
        self.remaining = DECK_SIZE;
        self.peeked.clear();
    }

    /// Returns a previously drawn card to the random pool.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AlreadyInDeck`] if the card is still in the pool
    /// or the peek buffer.
    pub fn redeck(&mut self, card: Card) -> Result<(), DeckError> {
        if self.contains(card) {
            return Err(DeckError::AlreadyInDeck);
        }
        debug!(%card, "redecking card");
        self.return_to_pool(card);
        Ok(())
    }

    /// Draws the next card.
    ///
    /// Peeked cards come first, in the order they were revealed; after that
    /// cards are drawn uniformly at random from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        if let Some(card) = self.peeked.pop_front() {
            return Ok(card);
        }
        self.draw_random().ok_or(DeckError::Empty)
    }

    /// Draws `count` cards, or none at all if fewer are left.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `count` cards
    /// are left.
    pub fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure_available(count)?;
        (0..count).map(|_| self.draw_card()).collect()
    }

    /// Reveals the next `count` cards without drawing them.
    ///
    /// Cards already peeked keep their place; the buffer is topped up with
    /// random cards from the pool. Asking again for the same or a smaller
    /// count returns the same prefix without touching the pool.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `count` cards
    /// are left.
    pub fn peek_cards(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure_available(count)?;

        while self.peeked.len() < count {
            let card = self.draw_random().ok_or(DeckError::Empty)?;
            trace!(%card, position = self.peeked.len(), "peeked card");
            self.peeked.push_back(card);
        }

        Ok(self.peeked.iter().take(count).copied().collect())
    }

    fn ensure_available(&self, count: usize) -> Result<(), DeckError> {
        let available = self.cards_left();
        if available < count {
            return Err(DeckError::InsufficientCards {
                requested: count,
                available,
            });
        }
        Ok(())
    }

    /// Puts a card that is known to be outside the deck back into the pool.
    fn return_to_pool(&mut self, card: Card) {
        if self.pool.insert(card) {
            self.remaining += 1;
        }
    }

    /// Removes a uniformly chosen card from the pool.
    fn draw_random(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        self.reseed_if_needed();

        let index = self.rng.random_range(0..self.remaining);
        let card = self.pool.nth(index)?;
        self.pool.remove(card);
        self.remaining -= 1;

        trace!(%card, remaining = self.remaining, "random draw");
        Some(card)
    }

    #[cfg(feature = "std")]
    fn reseed_if_needed(&mut self) {
        if let Some(reseed) = self.reseed {
            self.rng = reseed(clock_seed());
        }
    }

    #[cfg(not(feature = "std"))]
    const fn reseed_if_needed(&mut self) {}
}

/// Whole seconds since the Unix epoch.
#[cfg(feature = "std")]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
