//! Error kinds for the exact surd engine.
//!
//! Every failure here is deterministic: the same inputs always produce
//! the same error, so nothing is retried or recovered internally.

use surdus_integers::{Integer, SqrtError};
use thiserror::Error;

/// Failure of an exact surd computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurdError {
    /// An exact integer square root failed its post-check.
    #[error(transparent)]
    Sqrt(#[from] SqrtError),

    /// Division by a factored integer carrying the zero marker.
    #[error("cannot divide by a factored zero")]
    DivisionByZero,

    /// The unfactored remainders of two operands do not divide evenly.
    /// Remainder division is exact by the construction contract; this
    /// surfaces a caller violation instead of truncating silently.
    #[error("remainder {dividend} is not evenly divisible by {divisor}")]
    InvalidFactoredDivision {
        /// Remainder of the dividend.
        dividend: Integer,
        /// Remainder of the divisor.
        divisor: Integer,
    },

    /// Surd summation inputs do not share a denominator radicand after
    /// numerator integerization. Sums of arbitrary unrelated surds have
    /// no closed form in this representation.
    #[error("surd terms do not share a denominator radicand: {left} vs {right}")]
    MismatchedRadicand {
        /// Radicand carried by the running sum.
        left: Integer,
        /// Radicand carried by the offending term.
        right: Integer,
    },
}
