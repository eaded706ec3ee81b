//! The canonical `n1·√n2 / (d1·√d2)` closed form.

use num_traits::{One, Zero};
use std::fmt;
use surdus_integers::{exact_sqrt, Integer};

use crate::error::SurdError;
use crate::factored::FactoredInteger;
use crate::table::{prime, FIRST_PRIME, NUM_PRIMES};

/// Notation for the square root in rendered output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurdStyle {
    /// `sqrt(2)`
    Functional,
    /// `√2`
    Radical,
}

/// The exact square root of a factored value, in canonical surd form.
///
/// Represents `n1·√n2 / (d1·√d2)` where `n2` and `d2` are squarefree
/// positive integers, `d1 > 0`, and `n1` carries the overall sign. A
/// value of zero is encoded as `n1 = 0` with every other part 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalSurd {
    n1: Integer,
    n2: Integer,
    d1: Integer,
    d2: Integer,
}

impl RationalSurd {
    /// Takes the square root of a factored value.
    ///
    /// Each prime exponent splits into its even half, which joins the
    /// rational coefficient (`n1` or `d1`), and an odd leftover, which
    /// joins the squarefree radicand (`n2` or `d2`). The unfactored
    /// remainder must be a perfect square consistent with the factored
    /// value's construction; its exact root joins `n1`, negated when the
    /// factored value is negative.
    ///
    /// # Errors
    ///
    /// Returns [`SurdError::Sqrt`] if the remainder is not a perfect
    /// square, which means the construction contract was violated.
    pub fn from_factored(value: &FactoredInteger) -> Result<Self, SurdError> {
        if value.is_zero() {
            return Ok(Self {
                n1: Integer::zero(),
                n2: Integer::one(),
                d1: Integer::one(),
                d2: Integer::one(),
            });
        }

        let root = exact_sqrt(value.remainder())?;
        let mut n1 = if value.is_negative() { -root } else { root };
        let mut n2 = Integer::one();
        let mut d1 = Integer::one();
        let mut d2 = Integer::one();

        for i in FIRST_PRIME..NUM_PRIMES {
            let e = value.exponent(i);
            if e == 0 {
                continue;
            }
            let p = prime(i);
            let even_half = p.pow((e.unsigned_abs() / 2) as u32);
            if e > 0 {
                n1 = n1 * even_half;
                if e % 2 != 0 {
                    n2 = n2 * &p;
                }
            } else {
                d1 = d1 * even_half;
                if e % 2 != 0 {
                    d2 = d2 * &p;
                }
            }
        }

        Ok(Self { n1, n2, d1, d2 })
    }

    /// The rational numerator coefficient, carrying the sign.
    #[must_use]
    pub fn n1(&self) -> &Integer {
        &self.n1
    }

    /// The squarefree numerator radicand.
    #[must_use]
    pub fn n2(&self) -> &Integer {
        &self.n2
    }

    /// The rational denominator coefficient, always positive.
    #[must_use]
    pub fn d1(&self) -> &Integer {
        &self.d1
    }

    /// The squarefree denominator radicand.
    #[must_use]
    pub fn d2(&self) -> &Integer {
        &self.d2
    }

    /// Folds the numerator radicand away:
    /// `n1·√n2 / (d1·√d2)` becomes `(n1·n2) / (d1·√(d2·n2))`.
    ///
    /// The value is unchanged; the numerator becomes rational at the
    /// price of a larger denominator radicand. Summation relies on this
    /// normalization to line terms up over one shared radicand.
    #[must_use]
    pub fn integerize_numerator(&self) -> Self {
        Self {
            n1: &self.n1 * &self.n2,
            n2: Integer::one(),
            d1: self.d1.clone(),
            d2: &self.d2 * &self.n2,
        }
    }

    /// Floating point approximation, for diagnostics and tests only.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let num = self.n1.to_f64() * self.n2.to_f64().sqrt();
        let den = self.d1.to_f64() * self.d2.to_f64().sqrt();
        num / den
    }

    /// Renders the surd in the requested notation.
    ///
    /// A radicand of 1 omits its root factor entirely; a coefficient of
    /// ±1 next to a real radicand shows only its sign.
    #[must_use]
    pub fn render(&self, style: SurdStyle) -> String {
        let (open, close) = match style {
            SurdStyle::Functional => ("sqrt(", ")"),
            SurdStyle::Radical => ("\u{221a}", ""),
        };

        let minus_one = -Integer::one();
        let mut out = if self.n1.is_one() {
            if self.n2.is_one() {
                "1".to_string()
            } else {
                format!("{open}{}{close}", self.n2)
            }
        } else if self.n1 == minus_one {
            if self.n2.is_one() {
                "-1".to_string()
            } else {
                format!("-{open}{}{close}", self.n2)
            }
        } else if self.n2.is_one() {
            self.n1.to_string()
        } else {
            format!("{} {open}{}{close}", self.n1, self.n2)
        };

        if self.d1.is_one() {
            if !self.d2.is_one() {
                out.push_str(&format!(" / {open}{}{close}", self.d2));
            }
        } else {
            out.push_str(&format!(" / {}", self.d1));
            if !self.d2.is_one() {
                out.push_str(&format!(" {open}{}{close}", self.d2));
            }
        }
        out
    }
}

impl fmt::Display for RationalSurd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(SurdStyle::Radical))
    }
}
