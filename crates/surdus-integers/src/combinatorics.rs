//! Factorials and binomial coefficients.
//!
//! Ordinary big-integer arithmetic; these feed the angular-momentum
//! formula evaluators. The binomial is evaluated multiplicatively so
//! every intermediate division is exact.

use num_traits::{One, Zero};

use crate::Integer;

/// Computes `n!`.
///
/// # Panics
///
/// Panics if `n` is negative.
#[must_use]
pub fn factorial(n: i64) -> Integer {
    assert!(n >= 0, "factorial of a negative integer");
    let mut acc = Integer::one();
    for i in 2..=n {
        acc = acc * Integer::new(i);
    }
    acc
}

/// Computes the binomial coefficient `C(n, k)`.
///
/// Returns zero when `k < 0` or `k > n`, matching the convention used by
/// the coupling-coefficient sums, whose loop bounds can touch either edge.
#[must_use]
pub fn binomial(n: i64, k: i64) -> Integer {
    if n < 0 || k < 0 || k > n {
        return Integer::zero();
    }
    let k = k.min(n - k);
    let mut acc = Integer::one();
    for i in 1..=k {
        // C(m, i) = C(m-1, i-1) * m / i with m = n-k+i, always exact.
        acc = acc * Integer::new(n - k + i) / Integer::new(i);
    }
    acc
}
