//! Delimited token lists used to move results between peers.
//!
//! Top-level tokens are separated by `;` and list items by `,`. An empty list
//! is an empty token. Tokens never contain either delimiter.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::{FromStr, Split};

use crate::error::DecodeError;

const TOKEN_SEP: char = ';';
const ITEM_SEP: char = ',';

/// Builds a token list.
#[derive(Debug, Clone)]
pub struct TokenWriter {
    out: String,
    empty: bool,
}

impl Default for TokenWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            out: String::new(),
            empty: true,
        }
    }

    fn start_token(&mut self) {
        if !self.empty {
            self.out.push(TOKEN_SEP);
        }
        self.empty = false;
    }

    /// Appends an integer token.
    pub fn push_int(&mut self, value: usize) {
        self.start_token();
        self.out.push_str(&value.to_string());
    }

    /// Appends a list token.
    pub fn push_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.start_token();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.out.push(ITEM_SEP);
            }
            self.out.push_str(item.as_ref());
        }
    }

    /// Returns the encoded list.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Reads tokens written by a [`TokenWriter`].
#[derive(Debug)]
pub struct TokenReader<'a> {
    tokens: Split<'a, char>,
}

impl<'a> TokenReader<'a> {
    /// Creates a reader over `data`.
    #[must_use]
    pub fn new(data: &'a str) -> Self {
        Self {
            tokens: data.split(TOKEN_SEP),
        }
    }

    fn next_token(&mut self) -> Result<&'a str, DecodeError> {
        self.tokens.next().ok_or(DecodeError::MissingToken)
    }

    /// Reads an integer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is exhausted or the token is not made
    /// only of ASCII digits.
    pub fn next_int<T: FromStr>(&mut self) -> Result<T, DecodeError> {
        let token = self.next_token()?;
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::InvalidInteger);
        }
        token.parse().map_err(|_| DecodeError::InvalidInteger)
    }

    /// Reads a list token, decoding each item with `item`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is exhausted or any item fails to decode.
    pub fn next_list<T, F>(&mut self, item: F) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&'a str) -> Result<T, DecodeError>,
    {
        let token = self.next_token()?;
        if token.is_empty() {
            return Ok(Vec::new());
        }
        token.split(ITEM_SEP).map(item).collect()
    }

    /// Checks that every token was consumed.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TrailingTokens`] if tokens remain.
    pub fn finish(self) -> Result<(), DecodeError> {
        match self.tokens.count() {
            0 => Ok(()),
            n => Err(DecodeError::TrailingTokens(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_ints_and_lists() {
        let mut writer = TokenWriter::new();
        writer.push_int(2);
        writer.push_list(["a", "b"]);
        writer.push_list(Vec::<String>::new());
        writer.push_int(7);
        assert_eq!(writer.finish(), "2;a,b;;7");
    }

    #[test]
    fn reads_back_tokens() {
        let mut reader = TokenReader::new("2;a,b;;7");
        assert_eq!(reader.next_int::<usize>(), Ok(2));
        assert_eq!(
            reader.next_list(|s| Ok(s.to_string())),
            Ok(alloc::vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(reader.next_list(|s| Ok(s.to_string())), Ok(Vec::new()));
        assert_eq!(reader.next_int::<usize>(), Ok(7));
        assert_eq!(reader.finish(), Ok(()));
    }

    #[test]
    fn reports_missing_and_trailing_tokens() {
        let mut reader = TokenReader::new("x");
        assert_eq!(reader.next_int::<usize>(), Err(DecodeError::InvalidInteger));
        assert_eq!(reader.next_int::<usize>(), Err(DecodeError::MissingToken));

        let mut reader = TokenReader::new("+1;-0; 2;;99999999999999999999999");
        for _ in 0..5 {
            assert_eq!(reader.next_int::<usize>(), Err(DecodeError::InvalidInteger));
        }

        let mut reader = TokenReader::new("1;2;3");
        assert_eq!(reader.next_int::<usize>(), Ok(1));
        assert_eq!(reader.finish(), Err(DecodeError::TrailingTokens(2)));
    }
}
