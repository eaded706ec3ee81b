//! # surdus-integers
//!
//! Arbitrary precision arithmetic for the Surdus exact surd engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Exact integer square roots (`exact_sqrt`, `exact_sqrt_bisect`)
//! - Factorials and binomial coefficients (`factorial`, `binomial`)
//!
//! Everything here is exact: floating point only ever appears as a seed
//! for the square root iterations or as a diagnostic approximation, never
//! in a result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinatorics;
pub mod integer;
pub mod rational;
pub mod sqrt;

#[cfg(test)]
mod proptests;

pub use combinatorics::{binomial, factorial};
pub use integer::Integer;
pub use rational::Rational;
pub use sqrt::{exact_sqrt, exact_sqrt_bisect, SqrtError};
