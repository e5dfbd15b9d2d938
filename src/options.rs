//! Deck configuration options.

/// When the deck reseeds its random generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Reseed {
    /// Seed once at construction and never again.
    #[default]
    Never,
    /// Reseed from the wall clock (whole seconds) before every random draw.
    ///
    /// Draws within the same second then repeat the same selection index,
    /// so this trades randomness for run-to-run variety without an
    /// external seed.
    #[cfg(feature = "std")]
    PerDraw,
}

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bitdeck::{DeckOptions, Reseed};
///
/// let options = DeckOptions::default().with_reseed(Reseed::Never);
/// assert_eq!(options.reseed, Reseed::Never);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Reseeding policy for random draws.
    pub reseed: Reseed,
}

impl DeckOptions {
    /// Sets the reseeding policy.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "std")]
    /// # {
    /// use bitdeck::{DeckOptions, Reseed};
    ///
    /// let options = DeckOptions::default().with_reseed(Reseed::PerDraw);
    /// assert_eq!(options.reseed, Reseed::PerDraw);
    /// # }
    /// ```
    #[must_use]
    pub const fn with_reseed(mut self, reseed: Reseed) -> Self {
        self.reseed = reseed;
        self
    }
}
