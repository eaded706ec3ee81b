//! Integer and half-integer angular momenta.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// An angular momentum quantum number: an integer or half-integer.
///
/// Stores twice the value, so `3/2` is `Half::new(3)` and `2` is
/// `Half::from_int(2)`. All arithmetic and ordering is exact; there is
/// no float in the representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Half(i64);

impl Half {
    /// Zero.
    pub const ZERO: Half = Half(0);

    /// Creates a value from twice its magnitude: `Half::new(3)` is `3/2`.
    #[must_use]
    pub fn new(twice: i64) -> Self {
        Self(twice)
    }

    /// Creates a whole-integer value.
    #[must_use]
    pub fn from_int(value: i64) -> Self {
        Self(value * 2)
    }

    /// Twice the value.
    #[must_use]
    pub fn twice(self) -> i64 {
        self.0
    }

    /// Returns true if this is a whole integer.
    #[must_use]
    pub fn is_integer(self) -> bool {
        self.0 % 2 == 0
    }

    /// The value as an integer, or `None` for a half-integer.
    #[must_use]
    pub fn to_integer(self) -> Option<i64> {
        if self.is_integer() {
            Some(self.0 / 2)
        } else {
            None
        }
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Half {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Half {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Add<i64> for Half {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + 2 * rhs)
    }
}

impl Sub<i64> for Half {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - 2 * rhs)
    }
}

impl Neg for Half {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}/2", self.0)
        }
    }
}

/// Failure to parse an angular momentum from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an integer or half-integer: {input}")]
pub struct ParseHalfError {
    input: String,
}

impl FromStr for Half {
    type Err = ParseHalfError;

    /// Accepts `"2"`, `"-3/2"` and the decimal forms `"1.5"` / `"1.0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHalfError {
            input: s.to_string(),
        };
        let s = s.trim();
        if let Some(numerator) = s.strip_suffix("/2") {
            return numerator.parse::<i64>().map(Half::new).map_err(|_| err());
        }
        if let Some(whole) = s.strip_suffix(".5") {
            let whole = if whole.is_empty() || whole == "-" {
                format!("{whole}0")
            } else {
                whole.to_string()
            };
            return whole
                .parse::<i64>()
                .map(|w| {
                    let half = if w < 0 || whole.starts_with('-') {
                        -1
                    } else {
                        1
                    };
                    Half::new(2 * w + half)
                })
                .map_err(|_| err());
        }
        if let Some(whole) = s.strip_suffix(".0") {
            return whole.parse::<i64>().map(Half::from_int).map_err(|_| err());
        }
        s.parse::<i64>().map(Half::from_int).map_err(|_| err())
    }
}
