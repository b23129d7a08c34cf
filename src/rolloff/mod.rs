//! Multi-player roll-off tie-break.
//!
//! Every player still in the game rolls two dice. Players tied at the highest
//! sum roll again, round after round, until exactly one player holds the
//! maximum. Eliminated players are skipped in every round.

use alloc::vec::Vec;

use crate::die::{DieRoll, MAX_FACE};
use crate::error::RollOffError;
use crate::options::RollOffOptions;
use crate::result::RollOffResult;
use crate::roller::DieRoller;

mod oracle;
mod round;
pub mod state;

pub use oracle::{EliminationOracle, NoneEliminated};
pub use state::RollOffState;

/// A roll-off in progress.
///
/// Drive it one round at a time with [`step`](Self::step), or to completion
/// with [`run`](Self::run).
#[derive(Debug, Clone)]
pub struct RollOff {
    /// Roll-off options.
    options: RollOffOptions,
    /// Roll history per player slot.
    rolls: Vec<Vec<DieRoll>>,
    /// Highest sum rolled in the latest round.
    current_max: Option<u32>,
    /// Rounds rolled so far.
    rounds: u32,
    /// Current state.
    state: RollOffState,
}

impl RollOff {
    /// Creates a roll-off for `players` player slots.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players or the die size is outside
    /// `1..=9`.
    pub fn new(players: usize, options: RollOffOptions) -> Result<Self, RollOffError> {
        if players == 0 {
            return Err(RollOffError::NoPlayers);
        }
        if options.die_sides == 0 || options.die_sides > MAX_FACE {
            return Err(RollOffError::InvalidSides(options.die_sides));
        }

        Ok(Self {
            options,
            rolls: alloc::vec![Vec::new(); players],
            current_max: None,
            rounds: 0,
            state: RollOffState::Rolling,
        })
    }

    /// Rolls one round.
    ///
    /// The first round rolls for every player who is not eliminated. Later
    /// rounds roll only for players tied at the current maximum.
    ///
    /// # Errors
    ///
    /// Returns an error if the roll-off already finished, the round cap is
    /// reached, nobody is left to roll, or the roller fails.
    pub fn step<R, O>(&mut self, roller: &R, oracle: &O) -> Result<RollOffState, RollOffError>
    where
        R: DieRoller + ?Sized,
        O: EliminationOracle + ?Sized,
    {
        if self.state != RollOffState::Rolling {
            return Err(RollOffError::Finished);
        }
        if self.options.max_rounds.is_some_and(|max| self.rounds >= max) {
            return Err(RollOffError::RoundLimit {
                rounds: self.rounds,
            });
        }

        let new_max = self
            .roll_round(roller, oracle)?
            .ok_or(RollOffError::AllEliminated)?;
        self.current_max = Some(new_max);
        self.rounds += 1;

        if self.count_at_max(oracle) > 1 {
            return Ok(RollOffState::Rolling);
        }

        let winner = self
            .index_of_max(oracle)
            .ok_or(RollOffError::AllEliminated)?;
        log::info!(
            "player {winner} won the roll-off with {new_max} after {} rounds",
            self.rounds
        );
        self.state = RollOffState::Done { winner };
        Ok(self.state)
    }

    /// Rolls rounds until one player holds the maximum.
    ///
    /// # Errors
    ///
    /// See [`step`](Self::step).
    pub fn run<R, O>(mut self, roller: &R, oracle: &O) -> Result<RollOffResult, RollOffError>
    where
        R: DieRoller + ?Sized,
        O: EliminationOracle + ?Sized,
    {
        loop {
            if let RollOffState::Done { winner } = self.step(roller, oracle)? {
                return Ok(RollOffResult::new(winner, self.rounds, self.rolls));
            }
        }
    }

    /// Returns the result if the roll-off has finished.
    #[must_use]
    pub fn finish(self) -> Option<RollOffResult> {
        let winner = self.state.winner()?;
        Some(RollOffResult::new(winner, self.rounds, self.rolls))
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RollOffState {
        self.state
    }

    /// Returns the number of rounds rolled so far.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the highest sum of the latest round.
    #[must_use]
    pub const fn current_max(&self) -> Option<u32> {
        self.current_max
    }

    /// Returns every player's roll history so far.
    #[must_use]
    pub fn rolls(&self) -> &[Vec<DieRoll>] {
        &self.rolls
    }

    /// Returns the options this roll-off was created with.
    #[must_use]
    pub const fn options(&self) -> &RollOffOptions {
        &self.options
    }
}

/// Runs a roll-off with default options.
///
/// # Errors
///
/// Returns an error if there are no players, every player is eliminated, the
/// round cap is reached, or the roller fails.
///
/// # Example
///
/// ```
/// use rolloff::{SeededRoller, roll_off};
///
/// let roller = SeededRoller::new(42);
/// let result = roll_off(4, &|seat: usize| seat == 2, &roller).unwrap();
/// assert_ne!(result.winner(), 2);
/// ```
pub fn roll_off<R, O>(players: usize, oracle: &O, roller: &R) -> Result<RollOffResult, RollOffError>
where
    R: DieRoller + ?Sized,
    O: EliminationOracle + ?Sized,
{
    roll_off_with(players, oracle, roller, RollOffOptions::default())
}

/// Runs a roll-off with the given options.
///
/// # Errors
///
/// See [`roll_off`].
pub fn roll_off_with<R, O>(
    players: usize,
    oracle: &O,
    roller: &R,
    options: RollOffOptions,
) -> Result<RollOffResult, RollOffError>
where
    R: DieRoller + ?Sized,
    O: EliminationOracle + ?Sized,
{
    RollOff::new(players, options)?.run(roller, oracle)
}
