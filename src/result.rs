//! Finished roll-off results and their wire form.

use alloc::string::String;
use alloc::vec::Vec;

use crate::die::DieRoll;
use crate::error::DecodeError;
use crate::wire::{TokenReader, TokenWriter};

/// The outcome of a roll-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOffResult {
    winner: usize,
    rounds: u32,
    rolls: Vec<Vec<DieRoll>>,
}

impl RollOffResult {
    pub(crate) const fn new(winner: usize, rounds: u32, rolls: Vec<Vec<DieRoll>>) -> Self {
        Self {
            winner,
            rounds,
            rolls,
        }
    }

    /// Returns the index of the winning player.
    #[must_use]
    pub const fn winner(&self) -> usize {
        self.winner
    }

    /// Returns the number of rounds rolled.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the number of player slots.
    #[must_use]
    pub fn players(&self) -> usize {
        self.rolls.len()
    }

    /// Returns every player's roll history, indexed by player slot.
    #[must_use]
    pub fn rolls(&self) -> &[Vec<DieRoll>] {
        &self.rolls
    }

    /// Returns one player's roll history.
    #[must_use]
    pub fn history(&self, player: usize) -> Option<&[DieRoll]> {
        self.rolls.get(player).map(Vec::as_slice)
    }

    /// Returns a player's most recent roll.
    #[must_use]
    pub fn last_roll(&self, player: usize) -> Option<DieRoll> {
        self.rolls.get(player).and_then(|h| h.last()).copied()
    }

    /// Encodes the result as `winner;count;history_0;...;history_n`.
    ///
    /// # Example
    ///
    /// ```
    /// use rolloff::{RollOffResult, SeededRoller, roll_off};
    ///
    /// let roller = SeededRoller::new(11);
    /// let result = roll_off(3, &|_: usize| false, &roller).unwrap();
    /// let decoded = RollOffResult::decode(&result.encode()).unwrap();
    /// assert_eq!(decoded, result);
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        let mut writer = TokenWriter::new();
        writer.push_int(self.winner);
        writer.push_int(self.rolls.len());
        for history in &self.rolls {
            writer.push_list(history.iter().map(DieRoll::encode));
        }
        writer.finish()
    }

    /// Decodes a result written by [`encode`](Self::encode).
    ///
    /// The round count is not transmitted; it is recovered as the length of
    /// the longest history.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the data is malformed or the winner does
    /// not name a player slot.
    pub fn decode(data: &str) -> Result<Self, DecodeError> {
        let mut reader = TokenReader::new(data);
        let winner: usize = reader.next_int()?;
        let players: usize = reader.next_int()?;

        let rolls = (0..players)
            .map(|_| reader.next_list(DieRoll::decode))
            .collect::<Result<Vec<_>, _>>()?;
        reader.finish()?;

        if winner >= players {
            return Err(DecodeError::WinnerOutOfRange { winner, players });
        }

        let rounds = rolls.iter().map(Vec::len).max().unwrap_or(0) as u32;
        Ok(Self::new(winner, rounds, rolls))
    }
}
