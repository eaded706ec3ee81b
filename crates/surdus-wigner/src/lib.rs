//! # surdus-wigner
//!
//! Exact Wigner 3j, 6j and 9j symbols for arbitrary integer and
//! half-integer angular momenta.
//!
//! Each symbol evaluates to a rational multiple of the square root of a
//! rational. The evaluators here assemble the Racah binomial sums with
//! big-integer arithmetic and hand the squared-and-signed result to the
//! `surdus-surd` engine as a [`surdus_surd::FactoredInteger`]; rendering
//! it through [`surdus_surd::RationalSurd`] gives the exact closed form
//! with no floating point anywhere in the pipeline.
//!
//! Spins are passed as [`Half`], which stores twice the value and so
//! represents half-integers without rounding.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod half;
pub mod nine_j;
#[cfg(test)]
mod proptests;
pub mod selection;
pub mod six_j;
pub mod three_j;

pub use half::{Half, ParseHalfError};
pub use nine_j::wigner_9j;
pub use selection::{triangle, WignerError};
pub use six_j::wigner_6j;
pub use three_j::wigner_3j;
