//! High-level entry points for minimizing an [`Objective`].
//!
//! [`minimize`] is the plain interface: start at the origin of `ℝⁿ`, strict
//! curvature handling, default finite-difference step, and return only the
//! final point. [`minimize_with`] accepts any starting point and a full
//! [`BfgsOptions`] and returns the complete [`BfgsOutcome`].
use crate::optimization::{
    bfgs::{
        adapter::ObjectiveProblem,
        run::run_bfgs,
        solver::GoldenBfgs,
        traits::{BfgsOptions, BfgsOutcome, CurvaturePolicy},
    },
    errors::{OptError, OptResult},
    traits::Objective,
    types::{DEFAULT_STEP, Point},
    validation::verify_point,
};

/// Minimize `objective` over `ℝⁿ` starting from the origin.
///
/// # Parameters
/// - `objective`: function to minimize.
/// - `n_features`: dimension `n ≥ 1`.
/// - `epsilon`: stop once the gradient norm is below this value
///   (`DEFAULT_EPSILON = 1e-6`).
/// - `distance`: upper bound of each line-search interval
///   (`DEFAULT_DISTANCE = 3`).
/// - `maximum`: iteration cap (`DEFAULT_MAXIMUM = 1000`).
///
/// # Returns
/// The final iterate: the minimizer estimate when the tolerance was met,
/// otherwise the last point reached after `maximum` iterations.
///
/// # Errors
/// - [`OptError::EmptyPoint`] if `n_features == 0`.
/// - Option validation errors for `epsilon`, `distance`, `maximum`.
/// - Objective errors and strict curvature errors raised while iterating.
///
/// # Example
/// ```rust
/// use quasi_newton::optimization::{bfgs::minimize, types::Point};
///
/// let f = |x: &Point| (x[0] + 3.0).powi(2) + (x[1] + 4.0).powi(2);
/// let x = minimize(&f, 2, 1e-6, 3.0, 1000)?;
/// assert!((x[0] + 3.0).abs() < 1e-4 && (x[1] + 4.0).abs() < 1e-4);
/// # Ok::<(), quasi_newton::optimization::errors::OptError>(())
/// ```
pub fn minimize<O: Objective + ?Sized>(
    objective: &O, n_features: usize, epsilon: f64, distance: f64, maximum: usize,
) -> OptResult<Point> {
    if n_features == 0 {
        return Err(OptError::EmptyPoint);
    }
    let opts =
        BfgsOptions::new(epsilon, distance, maximum, DEFAULT_STEP, CurvaturePolicy::Strict, false)?;
    minimize_with(objective, Point::zeros(n_features), &opts).map(|out| out.point)
}

/// Minimize `objective` from `x0` with explicit options.
///
/// # Errors
/// - [`OptError::EmptyPoint`] if `x0` is empty.
/// - Errors from [`run_bfgs`].
pub fn minimize_with<O: Objective + ?Sized>(
    objective: &O, x0: Point, opts: &BfgsOptions,
) -> OptResult<BfgsOutcome> {
    verify_point(&x0)?;
    let problem = ObjectiveProblem::new(objective, opts.step);
    let solver = GoldenBfgs::new(opts);
    run_bfgs(x0, opts, problem, solver)
}
