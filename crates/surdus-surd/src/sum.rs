//! Exact summation of surd terms over one shared denominator radicand.

use surdus_integers::Integer;

use crate::error::SurdError;
use crate::factored::FactoredInteger;
use crate::surd::RationalSurd;

/// Sums a sequence of surd terms into one exact factored result.
///
/// Each term is a factored integer in squared-and-signed form: the value
/// it contributes to the sum is its [`RationalSurd`], and the returned
/// accumulator is in the same form, so chained sums compose.
///
/// After numerator integerization every non-zero term must carry the
/// same denominator radicand. That holds for the telescoping recurrences
/// this engine was built for; it is not a property of arbitrary surds,
/// and a general sum of unrelated square roots has no closed form here.
/// The requirement is checked term by term.
///
/// Zero terms are skipped; an empty (or all-zero) input sums to the
/// factored zero.
///
/// # Errors
///
/// [`SurdError::MismatchedRadicand`] when a term's denominator radicand
/// differs from the running sum's; any [`SurdError`] surfaced by the
/// intermediate conversions and divisions.
pub fn sum_surds(terms: &[FactoredInteger]) -> Result<FactoredInteger, SurdError> {
    let mut acc = FactoredInteger::zero();
    let mut acc_surd = RationalSurd::from_factored(&acc)?.integerize_numerator();

    for term in terms {
        if term.is_zero() {
            continue;
        }
        let term_surd = RationalSurd::from_factored(term)?.integerize_numerator();

        if acc.is_zero() {
            acc = term.clone();
            acc_surd = term_surd;
            continue;
        }
        if acc_surd.d2() != term_surd.d2() {
            return Err(SurdError::MismatchedRadicand {
                left: acc_surd.d2().clone(),
                right: term_surd.d2().clone(),
            });
        }

        // Combine the rational numerators over the common denominator:
        //   n1/d1 + n1'/d1' = (n1·d1' + n1'·d1) / (d1·d1')
        // then square the new value back into accumulator form. Squaring
        // destroys the sign of n, so it is re-injected afterwards, and
        // one factor of the shared radicand squares away with it.
        let n = acc_surd.n1() * term_surd.d1() + term_surd.n1() * acc_surd.d1();
        let denominator: Integer = acc_surd.d1() * term_surd.d1();

        let mut next = FactoredInteger::new(&n)
            .divide(&FactoredInteger::new(&denominator))?
            .square();
        if n.is_negative() {
            next = next.negated();
        }
        next = next.divide(&FactoredInteger::new(term_surd.d2()))?;

        acc = next;
        acc_surd = RationalSurd::from_factored(&acc)?.integerize_numerator();
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factored(n: i64) -> FactoredInteger {
        FactoredInteger::new(&Integer::new(n))
    }

    fn rendered_sum(terms: &[FactoredInteger]) -> String {
        let total = sum_surds(terms).unwrap();
        RationalSurd::from_factored(&total).unwrap().to_string()
    }

    #[test]
    fn test_sum_of_roots_of_squares() {
        // √4 + √9 = 5
        assert_eq!(rendered_sum(&[factored(4), factored(9)]), "5");
    }

    #[test]
    fn test_zero_terms_are_identity() {
        let total = sum_surds(&[FactoredInteger::zero(), factored(9)]).unwrap();
        assert_eq!(total, factored(9));
        assert!(sum_surds(&[]).unwrap().is_zero());
    }

    #[test]
    fn test_shared_radicand_sum() {
        // √8 + √2 = 3·√2, carried as its signed square 18.
        let total = sum_surds(&[factored(8), factored(2)]).unwrap();
        assert_eq!(total, factored(18));
        assert_eq!(rendered_sum(&[factored(8), factored(2)]), "3 √2");
    }

    #[test]
    fn test_negative_term() {
        // √4 - √9 = -1
        assert_eq!(
            rendered_sum(&[factored(4), factored(9).negated()]),
            "-1"
        );
    }

    #[test]
    fn test_cancellation_to_zero() {
        let total = sum_surds(&[factored(2), factored(2).negated()]).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_cancellation_then_reseed() {
        // √2 - √2 + √9 = 3
        let terms = [factored(2), factored(2).negated(), factored(9)];
        assert_eq!(rendered_sum(&terms), "3");
    }

    #[test]
    fn test_mismatched_radicand() {
        // √2 + √3 has no representation over one radicand.
        assert!(matches!(
            sum_surds(&[factored(2), factored(3)]),
            Err(SurdError::MismatchedRadicand { .. })
        ));
    }

    #[test]
    fn test_rational_terms_with_denominators() {
        // √(1/4) + √(1/9) = 1/2 + 1/3 = 5/6, squared form 25/36.
        let quarter = factored(1).divide(&factored(4)).unwrap();
        let ninth = factored(1).divide(&factored(9)).unwrap();
        let total = sum_surds(&[quarter, ninth]).unwrap();
        let expected = factored(25).divide(&factored(36)).unwrap();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_order_independence() {
        let forward = sum_surds(&[factored(8), factored(2), factored(32)]).unwrap();
        let backward = sum_surds(&[factored(32), factored(2), factored(8)]).unwrap();
        assert_eq!(forward, backward);
        // √8 + √2 + √32 = 2√2 + √2 + 4√2 = 7√2, squared 98.
        assert_eq!(forward, factored(98));
    }
}
