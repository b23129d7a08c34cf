use alloc::vec::Vec;

/// Reports whether a player is already out of the outer game.
///
/// Eliminated players never roll and can never win a roll-off.
pub trait EliminationOracle {
    /// Returns `true` if the player at `index` is eliminated.
    fn is_eliminated(&self, index: usize) -> bool;
}

impl<F> EliminationOracle for F
where
    F: Fn(usize) -> bool,
{
    fn is_eliminated(&self, index: usize) -> bool {
        self(index)
    }
}

// Slots past the end of the slice count as eliminated.
impl EliminationOracle for [bool] {
    fn is_eliminated(&self, index: usize) -> bool {
        self.get(index).copied().unwrap_or(true)
    }
}

impl<const N: usize> EliminationOracle for [bool; N] {
    fn is_eliminated(&self, index: usize) -> bool {
        self.as_slice().is_eliminated(index)
    }
}

impl EliminationOracle for Vec<bool> {
    fn is_eliminated(&self, index: usize) -> bool {
        self.as_slice().is_eliminated(index)
    }
}

/// Oracle for a roll-off where nobody is eliminated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoneEliminated;

impl EliminationOracle for NoneEliminated {
    fn is_eliminated(&self, _index: usize) -> bool {
        false
    }
}
