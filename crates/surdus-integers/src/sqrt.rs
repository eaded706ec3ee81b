//! Exact integer square roots.
//!
//! Two independent algorithms are provided. Both demand a perfect-square
//! input; neither returns a truncated root.
//!
//! - [`exact_sqrt`] runs the integer Newton iteration from a float seed.
//!   The iteration is quadratically convergent but can oscillate between
//!   two neighbouring values when the input is not a perfect square, so
//!   the result is always verified by squaring before it is returned.
//! - [`exact_sqrt_bisect`] bisects a bracketing interval around the float
//!   estimate. It terminates in O(log n) steps for every input and has no
//!   oscillation failure mode.
//!
//! Inputs larger than the f64 range are seeded from the bit length
//! instead: `2^(bits/2 + 1)` always bounds `sqrt(n)` from above.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use thiserror::Error;

use crate::Integer;

/// Failure of an exact square root computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqrtError {
    /// The iteration settled on a value whose square is not the input.
    /// This is the deterministic outcome for any non-square input,
    /// including negative ones.
    #[error("exact square root did not converge: input is not a perfect square")]
    NonConvergence,
}

/// Floor of the float estimate, when it is usable as a big integer.
fn float_seed(estimate: f64) -> Option<Integer> {
    if estimate.is_finite() && estimate >= 1.0 {
        Integer::from_f64_exact(estimate.floor())
    } else {
        None
    }
}

/// An upper bound for `sqrt(n)` derived from the bit length of `n`.
fn bit_len_bound(n: &Integer) -> Integer {
    Integer::pow2(n.bit_len() / 2 + 1)
}

/// Computes the exact square root of a perfect square by Newton iteration.
///
/// # Errors
///
/// Returns [`SqrtError::NonConvergence`] if `n` is negative or not a
/// perfect square.
pub fn exact_sqrt(n: &Integer) -> Result<Integer, SqrtError> {
    if n.is_negative() {
        return Err(SqrtError::NonConvergence);
    }
    if n.is_zero() || n.is_one() {
        return Ok(n.clone());
    }

    let two = Integer::new(2);
    let mut m = float_seed(n.to_f64().sqrt()).unwrap_or_else(|| bit_len_bound(n));
    if m.is_zero() {
        m = Integer::one();
    }

    let mut prev = Integer::zero();
    loop {
        let next = (&m + &(n / &m)) / &two;
        if next == m {
            break;
        }
        if next == prev {
            // Period-two oscillation around a non-integer root. Keep the
            // smaller endpoint and let the post-check decide.
            if next < m {
                m = next;
            }
            break;
        }
        prev = std::mem::replace(&mut m, next);
    }

    if &(&m * &m) == n {
        Ok(m)
    } else {
        Err(SqrtError::NonConvergence)
    }
}

/// Computes the exact square root of a perfect square by binary search.
///
/// The bracket starts at `[sqrt(n/2), sqrt(2n)]` from float estimates and
/// falls back to `[1, 2^(bits/2 + 1)]` when the estimates are unusable.
///
/// # Errors
///
/// Returns [`SqrtError::NonConvergence`] if `n` is negative or not a
/// perfect square.
pub fn exact_sqrt_bisect(n: &Integer) -> Result<Integer, SqrtError> {
    if n.is_negative() {
        return Err(SqrtError::NonConvergence);
    }
    if n.is_zero() || n.is_one() {
        return Ok(n.clone());
    }

    let f = n.to_f64();
    let mut lo = Integer::one();
    let mut hi = bit_len_bound(n);

    if let Some(cand) = float_seed((f / 2.0).sqrt()) {
        if &(&cand * &cand) <= n {
            lo = cand;
        }
    }
    if let Some(cand) = float_seed((f * 2.0).sqrt()) {
        let cand = cand + Integer::one();
        if &(&cand * &cand) >= n {
            hi = cand;
        }
    }

    let two = Integer::new(2);
    while lo <= hi {
        let mid = (&lo + &hi) / &two;
        let sq = &mid * &mid;
        match sq.cmp(n) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => lo = mid + Integer::one(),
            Ordering::Greater => hi = mid - Integer::one(),
        }
    }

    Err(SqrtError::NonConvergence)
}
