//! Seeded die rolling.
//!
//! [`DieRoller`] is the seam the roll-off engine rolls through. The default
//! implementation, [`SeededRoller`], keeps a `ChaCha8` generator behind a
//! mutex so every roll and reseed is atomic with respect to other callers.
//! Rolls are fully reproducible for a fixed seed and call sequence, which lets
//! networked peers replay the same sequence from a shared seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::die::{DieRoll, MAX_FACE};
use crate::error::RollError;
use crate::sync::{Mutex, Once};

/// A source of die rolls.
pub trait DieRoller: Send + Sync {
    /// Rolls a die with `sides` faces, returning a value in `1..=sides`.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidSides`] if `sides` is zero.
    fn roll_die(&self, sides: u32) -> Result<u32, RollError>;

    /// Reseeds the generator without rolling.
    fn set_seed(&self, seed: i64);

    /// Reseeds the generator, then rolls a die.
    ///
    /// The new seed stays in effect for every later roll.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidSides`] if `sides` is zero.
    fn roll_die_with_seed(&self, sides: u32, seed: i64) -> Result<u32, RollError> {
        self.set_seed(seed);
        self.roll_die(sides)
    }

    /// Rolls two dice with `sides` faces each.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidSides`] if `sides` is zero and
    /// [`RollError::TooManySides`] if it is larger than nine.
    fn roll_pair(&self, sides: u32) -> Result<DieRoll, RollError> {
        if sides > MAX_FACE {
            return Err(RollError::TooManySides(sides));
        }
        let first = self.roll_die(sides)?;
        let second = self.roll_die(sides)?;
        DieRoll::new(first, second)
    }
}

struct Generator {
    rng: ChaCha8Rng,
    seed: i64,
}

impl Generator {
    fn seeded(seed: i64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed as u64),
            seed,
        }
    }
}

/// A thread-safe die roller backed by a seeded `ChaCha8` generator.
///
/// # Example
///
/// ```
/// use rolloff::{DieRoller, SeededRoller};
///
/// let a = SeededRoller::new(7);
/// let b = SeededRoller::new(7);
/// assert_eq!(a.roll_die(6).unwrap(), b.roll_die(6).unwrap());
/// ```
pub struct SeededRoller {
    generator: Mutex<Generator>,
}

impl SeededRoller {
    /// Creates a roller with the given seed.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            generator: Mutex::new(Generator::seeded(seed)),
        }
    }

    /// Creates a roller seeded from the wall clock.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Reseeds from the wall clock and returns the seed used.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn new_seed(&self) -> i64 {
        let seed = clock_seed();
        self.set_seed(seed);
        seed
    }

    /// Returns the most recent seed.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.generator.lock().seed
    }
}

impl DieRoller for SeededRoller {
    fn roll_die(&self, sides: u32) -> Result<u32, RollError> {
        if sides == 0 {
            return Err(RollError::InvalidSides);
        }
        Ok(self.generator.lock().rng.random_range(1..=sides))
    }

    fn set_seed(&self, seed: i64) {
        log::trace!("reseeding die roller with {seed}");
        *self.generator.lock() = Generator::seeded(seed);
    }
}

impl core::fmt::Debug for SeededRoller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SeededRoller")
            .field("seed", &self.seed())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "std")]
fn clock_seed() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    i64::try_from(millis).unwrap_or(i64::MAX)
}

#[cfg(not(feature = "std"))]
const fn clock_seed() -> i64 {
    0
}

static SHARED: Once<SeededRoller> = Once::new();

/// Returns the process-wide roller.
///
/// Seeded from the wall clock on first use (zero without `std`). Reseeding it
/// affects every caller in the process; prefer owning a [`SeededRoller`] per
/// game session.
#[must_use]
pub fn shared() -> &'static SeededRoller {
    SHARED.call_once(|| SeededRoller::new(clock_seed()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sides_is_rejected() {
        let roller = SeededRoller::new(1);
        assert_eq!(roller.roll_die(0), Err(RollError::InvalidSides));
    }

    #[test]
    fn one_sided_die_always_rolls_one() {
        let roller = SeededRoller::new(99);
        for _ in 0..32 {
            assert_eq!(roller.roll_die(1), Ok(1));
        }
    }

    #[test]
    fn roll_pair_rejects_large_dice() {
        let roller = SeededRoller::new(3);
        assert_eq!(roller.roll_pair(10), Err(RollError::TooManySides(10)));
        assert_eq!(roller.roll_pair(0), Err(RollError::InvalidSides));
    }

    #[test]
    fn seed_tracks_last_reseed() {
        let roller = SeededRoller::new(5);
        assert_eq!(roller.seed(), 5);
        roller.set_seed(-12);
        assert_eq!(roller.seed(), -12);
    }
}
