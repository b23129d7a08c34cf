//! Seeded dice rolling and multi-player roll-off tie-breaks with optional
//! `no_std` support.
//!
//! The crate provides a [`SeededRoller`] for reproducible die rolls and a
//! [`RollOff`] engine that breaks ties by re-rolling two dice among the
//! players tied at the top, skipping players already eliminated from the
//! surrounding game. Finished roll-offs can be sent to peers in a compact
//! text form.
//!
//! # Example
//!
//! ```
//! use rolloff::{SeededRoller, roll_off};
//!
//! let roller = SeededRoller::new(42);
//! let result = roll_off(3, &[false, false, true], &roller).unwrap();
//! assert!(result.winner() < 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod die;
pub mod error;
pub mod options;
pub mod result;
pub mod roller;
pub mod rolloff;
mod sync;
pub mod wire;

// Re-export main types
pub use die::DieRoll;
pub use error::{DecodeError, RollError, RollOffError};
pub use options::RollOffOptions;
pub use result::RollOffResult;
pub use roller::{DieRoller, SeededRoller, shared};
pub use rolloff::{
    EliminationOracle, NoneEliminated, RollOff, RollOffState, roll_off, roll_off_with,
};
