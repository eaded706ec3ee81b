//! # surdus-surd
//!
//! Exact arithmetic on rational multiples of square roots.
//!
//! Values are carried as a [`FactoredInteger`]: signed exponents over a
//! fixed table of small primes plus one unfactored remainder. From that
//! representation a [`RationalSurd`] renders the canonical closed form
//! `n1·√n2 / (d1·√d2)` with squarefree radicands, and [`sum_surds`] folds
//! a sequence of terms sharing one denominator radicand into a single
//! exact result.
//!
//! Nothing in this crate approximates: floats appear only in the
//! diagnostic [`RationalSurd::to_f64`] rendering.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod factored;
pub mod sum;
pub mod surd;
pub mod table;

#[cfg(test)]
mod proptests;

pub use error::SurdError;
pub use factored::FactoredInteger;
pub use sum::sum_surds;
pub use surd::{RationalSurd, SurdStyle};
pub use table::{NUM_PRIMES, PRIMES};
