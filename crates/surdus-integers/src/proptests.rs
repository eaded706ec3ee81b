//! Property-based tests for exact square roots and big integer arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{binomial, exact_sqrt, exact_sqrt_bisect, factorial, Integer, SqrtError};

    fn root() -> impl Strategy<Value = i64> {
        0i64..3_000_000_000i64
    }

    proptest! {
        #[test]
        fn sqrt_round_trip(m in root()) {
            let m = Integer::new(m);
            let n = &m * &m;
            prop_assert_eq!(exact_sqrt(&n), Ok(m));
        }

        #[test]
        fn sqrt_algorithms_agree(m in root(), shift in 0usize..6) {
            // Scale past the u64 range so the float seed is inexact.
            let m = Integer::new(m) * Integer::pow2(shift * 12);
            let n = &m * &m;
            let a = exact_sqrt(&n);
            let b = exact_sqrt_bisect(&n);
            prop_assert_eq!(a, Ok(m.clone()));
            prop_assert_eq!(b, Ok(m));
        }

        #[test]
        fn sqrt_rejects_between_squares(m in 2i64..2_000_000, offset in 1i64..3) {
            // m^2 + offset for small offsets is never a perfect square
            // (the next square is m^2 + 2m + 1).
            let n = Integer::new(m * m + offset);
            prop_assert_eq!(exact_sqrt(&n), Err(SqrtError::NonConvergence));
            prop_assert_eq!(exact_sqrt_bisect(&n), Err(SqrtError::NonConvergence));
        }

        #[test]
        fn binomial_symmetry(n in 0i64..60, k in 0i64..60) {
            prop_assert_eq!(binomial(n, k), binomial(n, n - k));
        }

        #[test]
        fn binomial_factorial_consistency(n in 0i64..25, k in 0i64..25) {
            if k <= n {
                let lhs = binomial(n, k) * factorial(k) * factorial(n - k);
                prop_assert_eq!(lhs, factorial(n));
            }
        }
    }
}
