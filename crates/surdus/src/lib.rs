//! # Surdus
//!
//! Exact arithmetic with rational square roots, built for angular
//! momentum recoupling coefficients.
//!
//! Quantities of the form `n1·√n2 / (d1·√d2)` are represented without
//! floating point: integers carry their prime factorizations, square
//! roots are extracted exactly, and sums of compatible surds fold into
//! a single closed form. On top of that engine sit exact evaluators for
//! the Wigner 3j, 6j, and 9j symbols at arbitrary (half-)integer spins.
//!
//! ## Quick Start
//!
//! ```rust
//! use surdus::prelude::*;
//!
//! let j = Half::from_int(1);
//! let zero = Half::ZERO;
//! let squared = wigner_3j(j, j, Half::from_int(2), zero, zero, zero)?;
//! let symbol = RationalSurd::from_factored(&squared)?;
//! assert_eq!(symbol.to_string(), "\u{221a}2 / \u{221a}15");
//! # Ok::<(), surdus::wigner::WignerError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use surdus_integers as integers;
pub use surdus_surd as surd;
pub use surdus_wigner as wigner;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use surdus_integers::{exact_sqrt, Integer, Rational};
    pub use surdus_surd::{sum_surds, FactoredInteger, RationalSurd, SurdStyle};
    pub use surdus_wigner::{wigner_3j, wigner_6j, wigner_9j, Half};
}
