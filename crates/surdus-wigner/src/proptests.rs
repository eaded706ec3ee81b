//! Property-based tests for the symbol evaluators: the classical
//! symmetry relations, checked exactly through the rational form of the
//! squared results.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{triangle, wigner_3j, wigner_6j, Half};

    fn spin() -> impl Strategy<Value = Half> {
        (0i64..=6).prop_map(Half::new)
    }

    fn projection() -> impl Strategy<Value = Half> {
        (-6i64..=6).prop_map(Half::new)
    }

    proptest! {
        #[test]
        fn triangle_is_symmetric_in_first_two(a in spin(), b in spin(), c in spin()) {
            prop_assert_eq!(triangle(a, b, c), triangle(b, a, c));
        }

        #[test]
        fn three_j_cyclic_invariance(
            j1 in spin(), j2 in spin(), j3 in spin(),
            m1 in projection(), m2 in projection(),
        ) {
            let m3 = -(m1 + m2);
            let Ok(a) = wigner_3j(j1, j2, j3, m1, m2, m3) else { return Ok(()) };
            let b = wigner_3j(j2, j3, j1, m2, m3, m1).unwrap();
            prop_assert_eq!(a.to_rational(), b.to_rational());
        }

        #[test]
        fn three_j_projection_negation(
            j1 in spin(), j2 in spin(), j3 in spin(),
            m1 in projection(), m2 in projection(),
        ) {
            // Negating all projections multiplies by (-1)^(j1+j2+j3); on
            // the signed squares that is a plain sign flip when the sum
            // is odd.
            let m3 = -(m1 + m2);
            let Ok(a) = wigner_3j(j1, j2, j3, m1, m2, m3) else { return Ok(()) };
            let b = wigner_3j(j1, j2, j3, -m1, -m2, -m3).unwrap();
            let expected = if (j1 + j2 + j3).twice() % 4 == 0 {
                a.to_rational()
            } else {
                -a.to_rational()
            };
            prop_assert_eq!(b.to_rational(), expected);
        }

        #[test]
        fn six_j_column_exchange(
            j1 in spin(), j2 in spin(), j3 in spin(),
            j4 in spin(), j5 in spin(), j6 in spin(),
        ) {
            let Ok(a) = wigner_6j(j1, j2, j3, j4, j5, j6) else { return Ok(()) };
            let b = wigner_6j(j2, j1, j3, j5, j4, j6).unwrap();
            prop_assert_eq!(a.to_rational(), b.to_rational());
        }

        #[test]
        fn six_j_row_swap_in_two_columns(
            j1 in spin(), j2 in spin(), j3 in spin(),
            j4 in spin(), j5 in spin(), j6 in spin(),
        ) {
            // Swapping upper and lower entries of two columns at once
            // leaves the symbol unchanged.
            let Ok(a) = wigner_6j(j1, j2, j3, j4, j5, j6) else { return Ok(()) };
            let b = wigner_6j(j4, j5, j3, j1, j2, j6).unwrap();
            prop_assert_eq!(a.to_rational(), b.to_rational());
        }
    }
}
