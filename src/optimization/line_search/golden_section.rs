//! line_search::golden_section — derivative-free 1-D minimization.
//!
//! Purpose
//! -------
//! Locate the minimizer of a unimodal one-dimensional function on a bounded
//! interval by golden-section narrowing, reusing one interior probe per
//! round so every round after the first costs a single evaluation.
//!
//! Key behaviors
//! -------------
//! - Probes sit at the fractions `ρ ≈ 0.382` and `1 − ρ ≈ 0.618` of the
//!   current bracket, with `ρ = (3 − √5)/2` exactly, so the reused probe
//!   lands on the correct fraction of the next bracket.
//! - The side of the worse probe is discarded; ties keep the left part.
//! - The search stops once the bracket width is at most `epsilon` and
//!   returns the bracket midpoint.
//!
//! Invariants & assumptions
//! ------------------------
//! - For unimodal `f` the minimizer never leaves the bracket, so the result
//!   is within `epsilon / 2` of it.
//! - Bracket widths shrink by `1 − ρ` per round; the round count is
//!   `⌈ln(ε / (b₀ − a₀)) / ln(1 − ρ)⌉`.
use crate::optimization::{
    errors::OptResult,
    validation::{verify_interval, verify_line_tol},
};

/// Probe fraction `ρ = (3 − √5) / 2 ≈ 0.381966`.
pub const GOLDEN_FRACTION: f64 = 0.381_966_011_250_105_1;

/// golden_section — minimizer of a unimodal function on `[a0, b0]`.
///
/// Parameters
/// ----------
/// - `f`: `F`
///   One-dimensional function, assumed unimodal on the interval. Errors
///   abort the search and are returned unchanged.
/// - `a0`, `b0`: `f64`
///   Finite interval bounds with `a0 < b0`.
/// - `epsilon`: `f64`
///   Final bracket width; finite and strictly positive.
///
/// Returns
/// -------
/// `OptResult<f64>`
///   Midpoint of the final bracket.
///
/// Errors
/// ------
/// - `OptError::InvalidInterval` for non-finite or unordered bounds.
/// - `OptError::InvalidLineTol` for a non-finite or non-positive `epsilon`.
/// - Any error returned by `f`.
///
/// Examples
/// --------
/// ```rust
/// # use quasi_newton::optimization::line_search::golden_section;
/// let t = golden_section(|t| Ok((t - 1.25_f64).powi(2)), 0.0, 3.0, 1e-6).unwrap();
/// assert!((t - 1.25).abs() < 1e-6);
/// ```
pub fn golden_section<F>(f: F, a0: f64, b0: f64, epsilon: f64) -> OptResult<f64>
where
    F: FnMut(f64) -> OptResult<f64>,
{
    golden_section_counted(f, a0, b0, epsilon).map(|(t, _)| t)
}

/// golden_section_counted — [`golden_section`] plus the evaluation count.
///
/// Returns `(minimizer, evaluations)` where `evaluations = 2 + rounds`.
pub fn golden_section_counted<F>(
    mut f: F, a0: f64, b0: f64, epsilon: f64,
) -> OptResult<(f64, usize)>
where
    F: FnMut(f64) -> OptResult<f64>,
{
    verify_interval(a0, b0)?;
    verify_line_tol(epsilon)?;

    let (mut lo, mut hi) = (a0, b0);
    let mut left = lo + GOLDEN_FRACTION * (hi - lo);
    let mut right = hi - GOLDEN_FRACTION * (hi - lo);
    let mut f_left = f(left)?;
    let mut f_right = f(right)?;
    let mut evals = 2;

    while hi - lo > epsilon {
        if f_left <= f_right {
            hi = right;
            right = left;
            f_right = f_left;
            left = lo + GOLDEN_FRACTION * (hi - lo);
            f_left = f(left)?;
        } else {
            lo = left;
            left = right;
            f_left = f_right;
            right = hi - GOLDEN_FRACTION * (hi - lo);
            f_right = f(right)?;
        }
        evals += 1;
    }

    Ok((0.5 * (lo + hi), evals))
}
