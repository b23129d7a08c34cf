//! Roll-off state types.

/// Roll-off state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOffState {
    /// More than one player is tied at the current maximum.
    Rolling,
    /// Exactly one player holds the maximum.
    Done {
        /// Index of the winning player.
        winner: usize,
    },
}

impl RollOffState {
    /// Returns the winner if the roll-off has finished.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match *self {
            Self::Rolling => None,
            Self::Done { winner } => Some(winner),
        }
    }
}
