use alloc::vec::Vec;

use crate::error::RollOffError;
use crate::roller::DieRoller;

use super::{EliminationOracle, RollOff};

impl RollOff {
    /// Whether `player` is still contending at `max`: not eliminated, has
    /// rolled in every round so far, and the latest roll matches.
    fn at_max<O>(&self, oracle: &O, player: usize, max: u32) -> bool
    where
        O: EliminationOracle + ?Sized,
    {
        if oracle.is_eliminated(player) {
            return false;
        }
        let history = &self.rolls[player];
        history.len() >= self.rounds as usize
            && history.last().is_some_and(|roll| roll.sum() == max)
    }

    /// Counts the players contending at the current maximum.
    pub(super) fn count_at_max<O>(&self, oracle: &O) -> usize
    where
        O: EliminationOracle + ?Sized,
    {
        let Some(max) = self.current_max else {
            return self.rolls.len();
        };
        (0..self.rolls.len())
            .filter(|&player| self.at_max(oracle, player, max))
            .count()
    }

    /// Returns the lowest-indexed player contending at the current maximum.
    pub(super) fn index_of_max<O>(&self, oracle: &O) -> Option<usize>
    where
        O: EliminationOracle + ?Sized,
    {
        let max = self.current_max?;
        (0..self.rolls.len()).find(|&player| self.at_max(oracle, player, max))
    }

    /// Rolls for every contending player and returns the highest new sum, or
    /// `None` if nobody rolled.
    ///
    /// A player rolls when they have no history yet or are at the current
    /// maximum. Histories are only extended once every roll in the round has
    /// succeeded.
    pub(super) fn roll_round<R, O>(
        &mut self,
        roller: &R,
        oracle: &O,
    ) -> Result<Option<u32>, RollOffError>
    where
        R: DieRoller + ?Sized,
        O: EliminationOracle + ?Sized,
    {
        let mut round = Vec::new();

        for player in 0..self.rolls.len() {
            if oracle.is_eliminated(player) {
                continue;
            }
            let contending = self.rolls[player].is_empty()
                || self
                    .current_max
                    .is_some_and(|max| self.at_max(oracle, player, max));
            if !contending {
                continue;
            }

            let roll = roller.roll_pair(self.options.die_sides)?;
            log::trace!("player {player} rolled {roll} ({})", roll.sum());
            round.push((player, roll));
        }

        let new_max = round.iter().map(|(_, roll)| roll.sum()).max();
        log::debug!(
            "roll-off round {}: {} rolled, max {new_max:?}",
            self.rounds + 1,
            round.len()
        );

        for (player, roll) in round {
            self.rolls[player].push(roll);
        }
        Ok(new_max)
    }
}
