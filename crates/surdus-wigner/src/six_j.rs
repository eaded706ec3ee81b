//! The Wigner 6j symbol.

use num_traits::Zero;
use surdus_integers::{binomial, factorial, Integer};
use surdus_surd::{FactoredInteger, SurdError};

use crate::half::Half;
use crate::selection::{as_int, check_triad, WignerError};

/// Evaluates the Wigner 6j symbol `{j1 j2 j3; j4 j5 j6}`.
///
/// The result is the symbol's squared value with its sign retained, as a
/// factored integer (see [`crate::wigner_3j`]).
///
/// # Errors
///
/// A [`WignerError`] selection-rule variant for any of the four invalid
/// triads, or a propagated surd error.
pub fn wigner_6j(
    j1: Half,
    j2: Half,
    j3: Half,
    j4: Half,
    j5: Half,
    j6: Half,
) -> Result<FactoredInteger, WignerError> {
    check_triad(j1, j2, j3)?;
    check_triad(j1, j5, j6)?;
    check_triad(j2, j4, j6)?;
    check_triad(j3, j4, j5)?;
    Ok(evaluate(j1, j2, j3, j4, j5, j6)?)
}

/// 6j evaluation that yields the factored zero when a selection rule
/// fails, as required for the intermediate couplings of a 9j sum.
pub(crate) fn wigner_6j_or_zero(
    j1: Half,
    j2: Half,
    j3: Half,
    j4: Half,
    j5: Half,
    j6: Half,
) -> Result<FactoredInteger, WignerError> {
    let triads_hold = check_triad(j1, j2, j3).is_ok()
        && check_triad(j1, j5, j6).is_ok()
        && check_triad(j2, j4, j6).is_ok()
        && check_triad(j3, j4, j5).is_ok();
    if triads_hold {
        Ok(evaluate(j1, j2, j3, j4, j5, j6)?)
    } else {
        Ok(FactoredInteger::zero())
    }
}

fn evaluate(
    j1: Half,
    j2: Half,
    j3: Half,
    j4: Half,
    j5: Half,
    j6: Half,
) -> Result<FactoredInteger, SurdError> {
    let q1 = as_int(j1 + j2 - j3);
    let q2 = as_int(j4 + j5 - j3);
    let q3 = as_int(j4 + j2 - j6);
    let q4 = as_int(j1 + j5 - j6);
    let kmax = q1.min(q2).min(q3).min(q4);
    let q5 = as_int(j1 + j4 - j3 - j6);
    let q6 = as_int(j2 + j5 - j3 - j6);
    let kmin = 0.max(q5).max(q6);
    let q7 = as_int(j1 + j2 + j4 + j5);
    let q8 = as_int(j1 + j2 + j3 + 1);

    let mut sum = Integer::zero();
    for k in kmin..=kmax {
        let z = binomial(q1, k)
            * binomial(q7 + 1 - k, q8)
            * binomial(q3 - q5, q3 - k)
            * binomial(q4 - q6, q4 - k);
        sum = if k % 2 == 0 { sum + z } else { sum - z };
    }

    let negative_sum = sum.is_negative();
    let mut z2 = &sum * &sum;
    z2 = z2 * factorial(q8) * factorial(q2) * factorial(q3) * factorial(q4);
    let q9 = as_int(j4 - j5 + j3);
    let q10 = as_int(j5 - j4 + j3);
    z2 = z2 * factorial(q9) * factorial(q10);
    let q11 = as_int(j1 - j5 + j6);
    let q12 = as_int(j5 - j1 + j6);
    z2 = z2 * factorial(q11) * factorial(q12);
    let q13 = as_int(j4 - j2 + j6);
    let q14 = as_int(j2 - j4 + j6);
    z2 = z2 * factorial(q13) * factorial(q14);
    if negative_sum {
        z2 = -z2;
    }
    if q7 % 2 != 0 {
        z2 = -z2;
    }

    let q15 = as_int(j3 + j2 - j1);
    let q16 = as_int(j3 + j1 - j2);
    let q17 = as_int(j3 + j4 + j5 + 1);
    let q18 = as_int(j2 + j4 + j6 + 1);
    let q19 = as_int(j1 + j5 + j6 + 1);
    let z2d = factorial(q1)
        * factorial(q15)
        * factorial(q16)
        * factorial(q17)
        * factorial(q18)
        * factorial(q19);

    let numerator = FactoredInteger::new(&z2);
    let denominator = FactoredInteger::new(&z2d);
    numerator.divide(&denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use surdus_surd::RationalSurd;

    fn j(n: i64) -> Half {
        Half::from_int(n)
    }

    fn rendered(result: &FactoredInteger) -> String {
        RationalSurd::from_factored(result).unwrap().to_string()
    }

    #[test]
    fn test_all_ones() {
        // {1 1 1; 1 1 1} = 1/6
        let result = wigner_6j(j(1), j(1), j(1), j(1), j(1), j(1)).unwrap();
        assert_eq!(rendered(&result), "1 / 6");
    }

    #[test]
    fn test_zero_corner() {
        // {1 2 3; 0 3 2} = 1/√35
        let result = wigner_6j(j(1), j(2), j(3), j(0), j(3), j(2)).unwrap();
        assert_eq!(rendered(&result), "1 / √35");
    }

    #[test]
    fn test_triangle_violation() {
        assert!(matches!(
            wigner_6j(j(1), j(1), j(3), j(1), j(1), j(1)),
            Err(WignerError::TriangleViolation { .. })
        ));
    }

    #[test]
    fn test_or_zero_swallows_selection_failures() {
        let result = wigner_6j_or_zero(j(1), j(1), j(3), j(1), j(1), j(1)).unwrap();
        assert!(result.is_zero());
    }

    #[test]
    fn test_agreement_with_closed_form() {
        // {a b c; 0 c b} = (-1)^(a+b+c) / √((2b+1)(2c+1))
        for (a, b, c) in [(1i64, 1, 1), (1, 2, 2), (2, 2, 3), (1, 2, 3)] {
            let result = wigner_6j(j(a), j(b), j(c), j(0), j(c), j(b)).unwrap();
            let value = RationalSurd::from_factored(&result).unwrap().to_f64();
            let magnitude = 1.0 / (((2 * b + 1) * (2 * c + 1)) as f64).sqrt();
            let sign = if (a + b + c) % 2 == 0 { 1.0 } else { -1.0 };
            assert!((value - sign * magnitude).abs() < 1e-12);
        }
    }
}
