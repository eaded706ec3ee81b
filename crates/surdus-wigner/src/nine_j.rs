//! The Wigner 9j symbol.

use rayon::prelude::*;
use surdus_integers::Integer;
use surdus_surd::{sum_surds, FactoredInteger};

use crate::half::Half;
use crate::selection::{check_triad, WignerError};
use crate::six_j::wigner_6j_or_zero;

/// Evaluates the Wigner 9j symbol `{j1 j2 j3; j4 j5 j6; j7 j8 j9}` as a
/// sum over products of three 6j symbols:
///
/// ```text
/// {..} = Σ_k (-1)^(2k) (2k+1) {j1 j4 j7; j8 j9 k}{j2 j5 j8; j4 k j6}{j3 j6 j9; k j1 j2}
/// ```
///
/// The k-terms are independent and are evaluated in parallel; they all
/// share one denominator radicand after integerization, which is exactly
/// the shape [`sum_surds`] folds without approximation. The result is
/// the symbol's squared value with its sign retained, as a factored
/// integer (see [`crate::wigner_3j`]).
///
/// # Errors
///
/// A [`WignerError`] selection-rule variant for any invalid row or
/// column triad, or a propagated surd error.
#[allow(clippy::too_many_arguments)]
#[allow(clippy::similar_names)]
pub fn wigner_9j(
    j1: Half,
    j2: Half,
    j3: Half,
    j4: Half,
    j5: Half,
    j6: Half,
    j7: Half,
    j8: Half,
    j9: Half,
) -> Result<FactoredInteger, WignerError> {
    check_triad(j1, j2, j3)?;
    check_triad(j4, j5, j6)?;
    check_triad(j7, j8, j9)?;
    check_triad(j1, j4, j7)?;
    check_triad(j2, j5, j8)?;
    check_triad(j3, j6, j9)?;

    // k ranges over the triangle overlap of (j4, j8), (j1, j9), (j2, j6),
    // stepping by whole units; twice-values keep the loop integral.
    let tk_min = (j4 - j8)
        .abs()
        .max((j1 - j9).abs())
        .max((j2 - j6).abs())
        .twice();
    let tk_max = (j4 + j8).min(j1 + j9).min(j2 + j6).twice();

    let ks: Vec<i64> = (tk_min..=tk_max).step_by(2).collect();
    let terms: Vec<FactoredInteger> = ks
        .into_par_iter()
        .map(|tk| -> Result<FactoredInteger, WignerError> {
            let k = Half::new(tk);
            let mut term = wigner_6j_or_zero(j1, j4, j7, j8, j9, k)?;
            term = term.multiply(&wigner_6j_or_zero(j2, j5, j8, j4, k, j6)?);
            term = term.multiply(&wigner_6j_or_zero(j3, j6, j9, k, j1, j2)?);
            if tk % 2 != 0 {
                // (-1)^(2k) for half-integer k.
                term = term.negated();
            }
            let weight = FactoredInteger::with_power(&Integer::new(tk + 1), 2);
            Ok(term.multiply(&weight))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(sum_surds(&terms)?)
}
