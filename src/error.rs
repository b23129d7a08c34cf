//! Error types for rolling, roll-offs and wire decoding.

use thiserror::Error;

/// Errors from rolling dice or building a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// A die must have at least one side.
    #[error("a die must have at least one side")]
    InvalidSides,
    /// Die face is outside `1..=9`.
    #[error("die face {0} is outside 1..=9")]
    InvalidFace(u32),
    /// A die with this many sides has faces without a single-digit wire form.
    #[error("a die with {0} sides cannot be encoded; at most 9 are allowed")]
    TooManySides(u32),
}

/// Errors that can occur while running a roll-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollOffError {
    /// The roster is empty.
    #[error("no players to roll off")]
    NoPlayers,
    /// Every player on the roster is eliminated.
    #[error("every player is eliminated")]
    AllEliminated,
    /// Configured die size is outside `1..=9`.
    #[error("die must have between 1 and 9 sides, got {0}")]
    InvalidSides(u32),
    /// The tie persisted past the configured round cap.
    #[error("tie not broken after {rounds} rounds")]
    RoundLimit {
        /// Rounds rolled before giving up.
        rounds: u32,
    },
    /// The roll-off has already finished.
    #[error("roll-off already finished")]
    Finished,
    /// The roller failed.
    #[error(transparent)]
    Roll(#[from] RollError),
}

/// Errors that can occur while decoding wire data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A roll token did not have exactly two characters.
    #[error("roll must be two characters, got {0}")]
    WrongLength(usize),
    /// A roll character was not a digit in `1..=9`.
    #[error("invalid die character {0:?}")]
    InvalidDigit(char),
    /// The token stream ended early.
    #[error("missing token")]
    MissingToken,
    /// A token could not be parsed as an integer.
    #[error("invalid integer token")]
    InvalidInteger,
    /// Tokens remained after decoding finished.
    #[error("{0} unexpected trailing tokens")]
    TrailingTokens(usize),
    /// The winner index does not name a player slot.
    #[error("winner {winner} out of range for {players} players")]
    WinnerOutOfRange {
        /// Decoded winner index.
        winner: usize,
        /// Decoded player count.
        players: usize,
    },
}
