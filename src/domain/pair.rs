//! The pair catalog: bettable identifiers and their classification.
//!
//! A pair is an atomic bettable identifier in one of two families:
//!
//! - **numeric**: two digits, `"00"` through `"99"`;
//! - **category**: an Ander/Bahar prefix plus one digit, `"A0"`-`"A9"`
//!   and `"B0"`-`"B9"` (the harup bets).
//!
//! [`Pair`] is a validated newtype so everything downstream of the engine
//! can rely on the shape without re-checking it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Harup category: Ander (`A`) or Bahar (`B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ander,
    Bahar,
}

impl Category {
    /// The single-character prefix used in pair identifiers.
    pub const fn prefix(self) -> char {
        match self {
            Self::Ander => 'A',
            Self::Bahar => 'B',
        }
    }
}

/// Pair classification used downstream for payout-rate lookup.
///
/// The rate itself is server-side; the client only labels each wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairKind {
    /// Direct two-digit numeric bet.
    Jodi,
    /// Cross-product-generated numeric pair.
    Crossing,
    /// Category (Ander/Bahar) bet.
    Harup,
}

/// A validated pair identifier.
///
/// The inner String is private; construction goes through [`Pair::parse`]
/// (validating), [`Pair::from_digits`], or [`Pair::category`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair(String);

impl Pair {
    /// Parse an identifier from the outside world, validating its shape.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let bytes = value.as_bytes();
        let valid = match bytes {
            [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => true,
            [p, d] if (*p == b'A' || *p == b'B') && d.is_ascii_digit() => true,
            _ => false,
        };
        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(DomainError::InvalidPair {
                value: value.to_string(),
            })
        }
    }

    /// Build a numeric pair from two ASCII digits.
    ///
    /// Callers in the engine only hand in characters taken from sanitized
    /// digit strings, so this cannot produce an invalid identifier.
    pub(crate) fn from_digits(first: char, second: char) -> Self {
        debug_assert!(first.is_ascii_digit() && second.is_ascii_digit());
        let mut s = String::with_capacity(2);
        s.push(first);
        s.push(second);
        Self(s)
    }

    /// Build a category pair from an ASCII digit character.
    ///
    /// Engine-internal counterpart of [`Pair::from_digits`] for characters
    /// taken from sanitized digit strings.
    pub(crate) fn category_from_digit(category: Category, digit: char) -> Self {
        debug_assert!(digit.is_ascii_digit());
        let mut s = String::with_capacity(2);
        s.push(category.prefix());
        s.push(digit);
        Self(s)
    }

    /// Build a category pair (`A0`-`A9`, `B0`-`B9`).
    pub fn category(category: Category, digit: u8) -> Result<Self, DomainError> {
        if digit > 9 {
            return Err(DomainError::InvalidCategoryDigit { digit });
        }
        Ok(Self(format!("{}{}", category.prefix(), digit)))
    }

    /// Get the pair identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a category (harup) pair rather than a numeric one.
    pub fn is_category(&self) -> bool {
        self.0.starts_with(['A', 'B'])
    }

    /// The pair kind a direct grid entry on this pair carries.
    pub fn grid_kind(&self) -> PairKind {
        if self.is_category() {
            PairKind::Harup
        } else {
            PairKind::Jodi
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Pair {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Pair> for String {
    fn from(pair: Pair) -> Self {
        pair.0
    }
}

/// The 100 numeric pairs `"00"` through `"99"`, zero-padded, ascending.
///
/// Gives the grid a stable iteration order.
pub fn numeric_pairs() -> impl Iterator<Item = Pair> {
    (0..100).map(|n| Pair(format!("{n:02}")))
}

/// The ten category pairs `"{A|B}0"` through `"{A|B}9"`.
pub fn category_pairs(category: Category) -> impl Iterator<Item = Pair> {
    (0..10).map(move |d| Pair(format!("{}{}", category.prefix(), d)))
}
