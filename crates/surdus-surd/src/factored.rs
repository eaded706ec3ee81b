//! Signed integers represented by their factorization over the prime table.

use num_traits::{One, Zero};
use std::fmt;
use surdus_integers::{Integer, Rational};

use crate::error::SurdError;
use crate::table::{prime, FIRST_PRIME, NUM_PRIMES, PRIMES, SIGN_MARKER, ZERO_MARKER};

/// A signed rational value held in factored form.
///
/// The represented value is `remainder × ∏ PRIMES[i]^exponents[i]`, with
/// the sign folded into the parity of the sign-marker exponent and
/// zero-ness encoded by a nonzero zero-marker exponent. Negative
/// exponents represent division, so arbitrary products and quotients of
/// factored values stay exact without ever expanding them.
///
/// Values are immutable: every operation builds a fresh instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoredInteger {
    exponents: [i64; NUM_PRIMES],
    remainder: Integer,
}

impl FactoredInteger {
    /// Factors `value` over the prime table.
    #[must_use]
    pub fn new(value: &Integer) -> Self {
        Self::with_power(value, 1)
    }

    /// Factors `value^power`, applying `power` uniformly to every prime
    /// exponent and to the remainder. The value itself is never raised to
    /// `power`, which is what keeps enormous perfect powers affordable.
    ///
    /// # Panics
    ///
    /// Panics if `power < 1`.
    #[must_use]
    pub fn with_power(value: &Integer, power: i64) -> Self {
        assert!(power >= 1, "power must be a positive integer");
        let mut exponents = [0i64; NUM_PRIMES];

        if value.is_zero() {
            exponents[ZERO_MARKER] = 1;
            return Self {
                exponents,
                remainder: Integer::one(),
            };
        }
        if value.is_negative() {
            exponents[SIGN_MARKER] = power;
        }

        let mut n = value.abs();
        for (i, slot) in exponents.iter_mut().enumerate().skip(FIRST_PRIME) {
            if n.is_one() {
                break;
            }
            let p = prime(i);
            loop {
                let (q, r) = n.div_rem(&p);
                if !r.is_zero() {
                    break;
                }
                *slot += power;
                n = q;
            }
        }

        let remainder = if n.is_one() {
            Integer::one()
        } else {
            n.pow(power as u32)
        };
        Self {
            exponents,
            remainder,
        }
    }

    /// The canonical factored zero.
    #[must_use]
    pub fn zero() -> Self {
        let mut exponents = [0i64; NUM_PRIMES];
        exponents[ZERO_MARKER] = 1;
        Self {
            exponents,
            remainder: Integer::one(),
        }
    }

    /// Returns true if the zero marker is set.
    ///
    /// When it is, every other field of the value is meaningless.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.exponents[ZERO_MARKER] != 0
    }

    /// Returns true if the sign-marker exponent is odd.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.exponents[SIGN_MARKER] % 2 != 0
    }

    /// The exponent of the i-th table entry.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn exponent(&self, index: usize) -> i64 {
        self.exponents[index]
    }

    /// The unfactored remainder.
    #[must_use]
    pub fn remainder(&self) -> &Integer {
        &self.remainder
    }

    /// Multiplies two factored values by adding exponents index-wise.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut exponents = self.exponents;
        for i in SIGN_MARKER..NUM_PRIMES {
            exponents[i] += other.exponents[i];
        }
        Self {
            exponents,
            remainder: &self.remainder * &other.remainder,
        }
    }

    /// Divides by another factored value.
    ///
    /// # Errors
    ///
    /// [`SurdError::DivisionByZero`] if `other` carries the zero marker;
    /// [`SurdError::InvalidFactoredDivision`] if the remainders do not
    /// divide evenly.
    pub fn divide(&self, other: &Self) -> Result<Self, SurdError> {
        if other.is_zero() {
            return Err(SurdError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let (q, r) = self.remainder.div_rem(&other.remainder);
        if !r.is_zero() {
            return Err(SurdError::InvalidFactoredDivision {
                dividend: self.remainder.clone(),
                divisor: other.remainder.clone(),
            });
        }
        let mut exponents = self.exponents;
        for i in SIGN_MARKER..NUM_PRIMES {
            exponents[i] -= other.exponents[i];
        }
        Ok(Self {
            exponents,
            remainder: q,
        })
    }

    /// Squares the value by doubling every exponent.
    ///
    /// Doubling the sign-marker exponent makes it even, so a squared
    /// value is never negative.
    #[must_use]
    pub fn square(&self) -> Self {
        let mut exponents = self.exponents;
        for e in &mut exponents {
            *e *= 2;
        }
        Self {
            exponents,
            remainder: &self.remainder * &self.remainder,
        }
    }

    /// Flips the sign by bumping the sign-marker exponent.
    ///
    /// Zero stays zero.
    #[must_use]
    pub fn negated(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let mut exponents = self.exponents;
        exponents[SIGN_MARKER] += 1;
        Self {
            exponents,
            remainder: self.remainder.clone(),
        }
    }

    /// Expands the factored form back into an exact rational.
    #[must_use]
    pub fn to_rational(&self) -> Rational {
        if self.is_zero() {
            return Rational::zero();
        }
        let mut num = self.remainder.clone();
        let mut den = Integer::one();
        if self.is_negative() {
            num = -num;
        }
        for i in FIRST_PRIME..NUM_PRIMES {
            let e = self.exponents[i];
            if e > 0 {
                num = num * prime(i).pow(e as u32);
            } else if e < 0 {
                den = den * prime(i).pow((-e) as u32);
            }
        }
        Rational::new(num, den)
    }
}

impl fmt::Display for FactoredInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut parts = Vec::new();
        for i in FIRST_PRIME..NUM_PRIMES {
            match self.exponents[i] {
                0 => {}
                1 => parts.push(PRIMES[i].to_string()),
                e => parts.push(format!("{}^{e}", PRIMES[i])),
            }
        }
        if !self.remainder.is_one() {
            parts.push(self.remainder.to_string());
        }
        let sign = if self.is_negative() { "-" } else { "" };
        if parts.is_empty() {
            write!(f, "{sign}1")
        } else {
            write!(f, "{sign}{}", parts.join(" * "))
        }
    }
}
