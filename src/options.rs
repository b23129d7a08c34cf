//! Roll-off configuration options.

/// Configuration options for a roll-off.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use rolloff::RollOffOptions;
///
/// let options = RollOffOptions::default()
///     .with_die_sides(4)
///     .with_max_rounds(Some(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollOffOptions {
    /// Faces on each of the two dice (1 through 9).
    pub die_sides: u32,
    /// Maximum number of rounds before giving up. `None` rolls until the tie
    /// breaks.
    pub max_rounds: Option<u32>,
}

/// Default round cap.
pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

impl Default for RollOffOptions {
    fn default() -> Self {
        Self {
            die_sides: 6,
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
        }
    }
}

impl RollOffOptions {
    /// Sets the number of faces on each die.
    ///
    /// # Example
    ///
    /// ```
    /// use rolloff::RollOffOptions;
    ///
    /// let options = RollOffOptions::default().with_die_sides(8);
    /// assert_eq!(options.die_sides, 8);
    /// ```
    #[must_use]
    pub const fn with_die_sides(mut self, sides: u32) -> Self {
        self.die_sides = sides;
        self
    }

    /// Sets the round cap.
    ///
    /// # Example
    ///
    /// ```
    /// use rolloff::RollOffOptions;
    ///
    /// let options = RollOffOptions::default().with_max_rounds(None);
    /// assert_eq!(options.max_rounds, None);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
