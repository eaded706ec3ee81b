//! The Wigner 3j symbol.

use num_traits::Zero;
use surdus_integers::{binomial, factorial, Integer};
use surdus_surd::FactoredInteger;

use crate::half::Half;
use crate::selection::{as_int, check_triad, WignerError};

/// Evaluates the Wigner 3j symbol
/// `(j1 j2 j3; m1 m2 m3)` via the Racah binomial sum.
///
/// The result is the symbol's squared value with its sign retained: the
/// symbol itself is the [`surdus_surd::RationalSurd`] of the returned
/// factored integer.
///
/// # Errors
///
/// A [`WignerError`] selection-rule variant when the inputs are
/// unphysical, or a propagated surd error from the exact arithmetic.
pub fn wigner_3j(
    j1: Half,
    j2: Half,
    j3: Half,
    m1: Half,
    m2: Half,
    m3: Half,
) -> Result<FactoredInteger, WignerError> {
    for (j, m) in [(j1, m1), (j2, m2), (j3, m3)] {
        if m.abs() > j {
            return Err(WignerError::ProjectionOutOfRange { j, m });
        }
        if !(j + m).is_integer() {
            return Err(WignerError::MixedParity { j, m });
        }
    }
    let projection_sum = m1 + m2 + m3;
    if projection_sum != Half::ZERO {
        return Err(WignerError::NonZeroProjectionSum {
            sum: projection_sum,
        });
    }
    check_triad(j1, j2, j3)?;

    let q1 = as_int(j1 - m1);
    let q2 = as_int(j2 + m2);
    let q3 = as_int(j1 + j2 - j3);
    let q4 = as_int(j3 + j1 - j2);
    let q5 = as_int(j2 + j3 - j1);
    let kmax = q1.min(q2).min(q3);
    let kmin = 0.max(q1 - q4).max(q2 - q5);

    let mut sum = Integer::zero();
    for k in kmin..=kmax {
        let z = binomial(q3, k) * binomial(q4, q1 - k) * binomial(q5, q2 - k);
        sum = if k % 2 == 0 { sum + z } else { sum - z };
    }

    // Carry the sum's sign alongside its square.
    let negative_sum = sum.is_negative();
    let q8 = as_int(j1 + m1);
    let q9 = as_int(j2 - m2);
    let q10 = as_int(j3 + m3);
    let q11 = as_int(j3 - m3);
    let mut z2 = &sum * &sum;
    z2 = z2 * factorial(q8) * factorial(q1) * factorial(q2) * factorial(q9);
    z2 = z2 * factorial(q10) * factorial(q11);
    if negative_sum {
        z2 = -z2;
    }
    if (q8 - q9) % 2 != 0 {
        z2 = -z2;
    }

    let q12 = as_int(j1 + j2 + j3 + 1);
    let z2d = factorial(q3) * factorial(q4) * factorial(q5) * factorial(q12);

    let numerator = FactoredInteger::new(&z2);
    let denominator = FactoredInteger::new(&z2d);
    Ok(numerator.divide(&denominator)?)
}
