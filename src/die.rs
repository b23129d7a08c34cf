//! Two-dice roll values and their two-character wire form.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::{DecodeError, RollError};

/// Highest face that has a single-digit wire form.
pub const MAX_FACE: u32 = 9;

/// The result of rolling two dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DieRoll {
    first: u8,
    second: u8,
}

impl DieRoll {
    /// Creates a roll from two faces.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidFace`] if either face is outside `1..=9`.
    ///
    /// # Example
    ///
    /// ```
    /// use rolloff::DieRoll;
    ///
    /// let roll = DieRoll::new(4, 2).unwrap();
    /// assert_eq!(roll.sum(), 6);
    /// ```
    pub const fn new(first: u32, second: u32) -> Result<Self, RollError> {
        if first == 0 || first > MAX_FACE {
            return Err(RollError::InvalidFace(first));
        }
        if second == 0 || second > MAX_FACE {
            return Err(RollError::InvalidFace(second));
        }
        Ok(Self {
            first: first as u8,
            second: second as u8,
        })
    }

    /// Returns the first die.
    #[must_use]
    pub const fn first(&self) -> u32 {
        self.first as u32
    }

    /// Returns the second die.
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second as u32
    }

    /// Returns the sum of both dice.
    #[must_use]
    pub const fn sum(&self) -> u32 {
        self.first as u32 + self.second as u32
    }

    /// Encodes the roll as two ASCII digits, first die then second.
    ///
    /// ```
    /// use rolloff::DieRoll;
    ///
    /// assert_eq!(DieRoll::new(4, 2).unwrap().encode(), "42");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(2);
        out.push(char::from(b'0' + self.first));
        out.push(char::from(b'0' + self.second));
        out
    }

    /// Decodes a roll from its two-digit wire form.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] unless `data` is exactly two digits in `1..=9`.
    pub fn decode(data: &str) -> Result<Self, DecodeError> {
        let mut chars = data.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(DecodeError::WrongLength(data.chars().count()));
        };

        let first = face(first)?;
        let second = face(second)?;
        Ok(Self { first, second })
    }
}

fn face(c: char) -> Result<u8, DecodeError> {
    match c.to_digit(10) {
        Some(d @ 1..=MAX_FACE) => Ok(d as u8),
        _ => Err(DecodeError::InvalidDigit(c)),
    }
}

impl fmt::Display for DieRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl FromStr for DieRoll {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
