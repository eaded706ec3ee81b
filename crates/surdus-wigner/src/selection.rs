//! Selection rules shared by the symbol evaluators.

use surdus_surd::SurdError;
use thiserror::Error;

use crate::half::Half;

/// Invalid input to a Wigner symbol evaluator, or an arithmetic failure
/// propagated from the surd engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WignerError {
    /// `|m|` exceeds its `j`.
    #[error("|m| = |{m}| exceeds j = {j}")]
    ProjectionOutOfRange {
        /// The angular momentum.
        j: Half,
        /// The offending projection.
        m: Half,
    },

    /// `j` and `m` are not both integer or both half-integer.
    #[error("j = {j} and m = {m} must both be integer or both half-integer")]
    MixedParity {
        /// The angular momentum.
        j: Half,
        /// The projection.
        m: Half,
    },

    /// The three projections of a 3j symbol do not cancel.
    #[error("projections must sum to zero, got {sum}")]
    NonZeroProjectionSum {
        /// The actual sum.
        sum: Half,
    },

    /// A triad sums to a half-integer.
    #[error("{a} + {b} + {c} is not an integer")]
    NonIntegerTriadSum {
        /// First member.
        a: Half,
        /// Second member.
        b: Half,
        /// Third member.
        c: Half,
    },

    /// A triad violates the triangle relation.
    #[error("({a}, {b}, {c}) does not satisfy the triangle relation")]
    TriangleViolation {
        /// First member.
        a: Half,
        /// Second member.
        b: Half,
        /// Third member.
        c: Half,
    },

    /// Exact arithmetic failed; with in-table inputs this means a prime
    /// factor beyond the table spoiled a remainder division.
    #[error(transparent)]
    Surd(#[from] SurdError),
}

/// The triangle relation: `|a - b| <= c <= a + b`.
#[must_use]
pub fn triangle(a: Half, b: Half, c: Half) -> bool {
    (a - b).abs() <= c && c <= a + b
}

/// Validates one coupling triad: integer sum plus triangle relation.
///
/// # Errors
///
/// [`WignerError::NonIntegerTriadSum`] or [`WignerError::TriangleViolation`].
pub fn check_triad(a: Half, b: Half, c: Half) -> Result<(), WignerError> {
    if !(a + b + c).is_integer() {
        return Err(WignerError::NonIntegerTriadSum { a, b, c });
    }
    if !triangle(a, b, c) {
        return Err(WignerError::TriangleViolation { a, b, c });
    }
    Ok(())
}

/// The integer value of a spin sum that the selection rules have already
/// proven whole.
pub(crate) fn as_int(h: Half) -> i64 {
    debug_assert!(h.is_integer());
    h.twice() / 2
}
