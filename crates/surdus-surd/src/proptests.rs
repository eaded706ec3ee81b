//! Property-based tests for the factored representation and surd form.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use surdus_integers::{Integer, Rational};

    use crate::table::{FIRST_PRIME, NUM_PRIMES};
    use crate::{sum_surds, FactoredInteger, RationalSurd};

    fn value() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000i64
    }

    fn non_zero() -> impl Strategy<Value = i64> {
        prop_oneof![(-1_000_000i64..=-1i64), (1i64..=1_000_000i64)]
    }

    /// Positive values whose prime factors all sit in the table, so
    /// their factored form carries no remainder and their square root is
    /// a pure surd.
    fn smooth() -> impl Strategy<Value = i64> {
        (0u32..6, 0u32..4, 0u32..3, 0u32..3, 0u32..2).prop_map(|(a, b, c, d, e)| {
            2i64.pow(a) * 3i64.pow(b) * 5i64.pow(c) * 7i64.pow(d) * 11i64.pow(e)
        })
    }

    fn smooth_signed() -> impl Strategy<Value = i64> {
        (smooth(), any::<bool>()).prop_map(|(v, neg)| if neg { -v } else { v })
    }

    fn factored(n: i64) -> FactoredInteger {
        FactoredInteger::new(&Integer::new(n))
    }

    /// Trial division against the table: no prime may divide twice.
    fn is_squarefree(n: &Integer) -> bool {
        for i in FIRST_PRIME..NUM_PRIMES {
            let p = crate::table::prime(i);
            let sq = &p * &p;
            let (_, r) = n.div_rem(&sq);
            if r.is_zero() {
                return false;
            }
        }
        true
    }

    proptest! {
        #[test]
        fn reconstruction_identity(a in value()) {
            let f = factored(a);
            prop_assert_eq!(f.to_rational(), Rational::from_integer(Integer::new(a)));
        }

        #[test]
        fn multiply_matches_integer_product(a in value(), b in value()) {
            let product = factored(a).multiply(&factored(b));
            prop_assert_eq!(
                product.to_rational(),
                Rational::from_integer(Integer::new(a) * Integer::new(b))
            );
        }

        #[test]
        fn multiply_divide_round_trip(a in value(), b in non_zero()) {
            let fa = factored(a);
            let fb = factored(b);
            prop_assert_eq!(fa.multiply(&fb).divide(&fb).unwrap(), fa);
        }

        #[test]
        fn square_matches_multiply(a in value()) {
            let f = factored(a);
            prop_assert_eq!(f.square(), f.multiply(&f));
        }

        #[test]
        fn surd_radicands_are_squarefree(a in smooth_signed(), b in smooth()) {
            let f = factored(a).divide(&factored(b)).unwrap();
            let s = RationalSurd::from_factored(&f).unwrap();
            prop_assert!(is_squarefree(s.n2()));
            prop_assert!(is_squarefree(s.d2()));
            prop_assert!(!s.d1().is_negative() && !s.d1().is_zero());
        }

        #[test]
        fn surd_resquares_to_input(a in smooth_signed()) {
            // n1²·n2 / (d1²·d2) must reproduce |a| exactly.
            let s = RationalSurd::from_factored(&factored(a)).unwrap();
            let num = s.n1() * s.n1() * s.n2().clone();
            let den = s.d1() * s.d1() * s.d2().clone();
            prop_assert_eq!(
                Rational::new(num, den),
                Rational::from_integer(Integer::new(a.abs()))
            );
            prop_assert_eq!(s.n1().is_negative(), a < 0);
        }

        #[test]
        fn integerize_preserves_value(a in smooth_signed()) {
            let s = RationalSurd::from_factored(&factored(a)).unwrap();
            let t = s.integerize_numerator();
            prop_assert!(t.n2().is_one());
            prop_assert!((s.to_f64() - t.to_f64()).abs() < 1e-9 * s.to_f64().abs().max(1.0));
        }

        #[test]
        fn surd_approximates_square_root(a in smooth()) {
            let s = RationalSurd::from_factored(&factored(a)).unwrap();
            let expected = (a as f64).sqrt();
            prop_assert!((s.to_f64() - expected).abs() < 1e-9 * expected);
        }

        #[test]
        fn surd_product_cross_check(a in smooth(), b in smooth()) {
            // √a·√b must match √(a·b) numerically.
            let sa = RationalSurd::from_factored(&factored(a)).unwrap();
            let sb = RationalSurd::from_factored(&factored(b)).unwrap();
            let sab = RationalSurd::from_factored(&factored(a * b)).unwrap();
            let drift = (sa.to_f64() * sb.to_f64() - sab.to_f64()).abs();
            prop_assert!(drift < 1e-9 * sab.to_f64());
        }

        #[test]
        fn sum_of_two_integer_roots(a in 0i64..1000, b in 0i64..1000) {
            // √(a²) + √(b²) = a + b, carried in squared form.
            let total = sum_surds(&[
                factored(a * a),
                factored(b * b),
            ]).unwrap();
            let s = RationalSurd::from_factored(&total).unwrap();
            prop_assert_eq!(s.n1(), &Integer::new(a + b));
            prop_assert!(s.n2().is_one() && s.d1().is_one() && s.d2().is_one());
        }

        #[test]
        fn sum_with_shared_radicand(a in 1i64..200, b in 1i64..200, r in 2i64..30) {
            // a·√r + b·√r = (a+b)·√r whenever r is squarefree.
            let r_int = Integer::new(r);
            if is_squarefree(&r_int) {
                let total = sum_surds(&[
                    factored(a * a * r),
                    factored(b * b * r),
                ]).unwrap();
                let expected = factored((a + b) * (a + b) * r);
                prop_assert_eq!(total, expected);
            }
        }
    }
}
