//! Integration tests for the BFGS minimizer and its numerical building blocks.
//!
//! Purpose
//! -------
//! - Validate complete minimizations through the public entry points, from
//!   objective definition to the returned point and diagnostics.
//! - Exercise realistic objectives (coupled quadratics, Rosenbrock, fallible
//!   objectives) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `optimization::bfgs`:
//!   - `minimize` from the origin and `minimize_with` from arbitrary starts.
//!   - Termination tagging, iteration counts and evaluation counters.
//!   - Returning the last iterate, checked against the solver driven by hand.
//!   - Determinism of repeated runs.
//! - `optimization::differentiation`:
//!   - Gradient and Hessian estimates at a minimizer found by the solver.
//! - `optimization::errors`:
//!   - Objective failures surfacing unchanged through the `argmin` executor.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (validation
//!   routines, golden-section bracketing, the rank-two update); these are
//!   covered by unit tests.
//! - Python bindings; those are expected to be tested from Python.
use approx::assert_abs_diff_eq;
use argmin::core::{Problem, Solver, State};
use ndarray::{Array1, Array2, array};
use quasi_newton::optimization::{
    bfgs::{
        BfgsOptions, CurvaturePolicy, Stage, Termination, adapter::ObjectiveProblem, minimize,
        minimize_with, solver::GoldenBfgs, types::BfgsState,
    },
    differentiation::{gradient, hessian},
    errors::{OptError, OptResult},
    traits::Objective,
    types::{Hessian, Point},
};

/// Purpose
/// -------
/// Coupled three-dimensional quadratic `½ xᵀA x + bᵀx` with a known
/// minimizer `−A⁻¹b`.
///
/// Invariants
/// ----------
/// - `A` is symmetric positive definite, so the minimizer is unique.
struct CoupledQuadratic {
    a: Array2<f64>,
    b: Array1<f64>,
}

impl CoupledQuadratic {
    fn new() -> Self {
        Self {
            a: array![[4.0, 1.0, 0.5], [1.0, 3.0, 0.2], [0.5, 0.2, 2.0]],
            b: array![1.0, -2.0, 0.5],
        }
    }

    fn minimizer() -> Array1<f64> {
        array![-0.427_900_422_7, 0.824_330_671_7, -0.225_457_961_5]
    }
}

impl Objective for CoupledQuadratic {
    fn value(&self, x: &Point) -> OptResult<f64> {
        Ok(0.5 * x.dot(&self.a.dot(x)) + self.b.dot(x))
    }
}

fn rosenbrock(x: &Point) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

#[test]
// Purpose
// -------
// A coupled quadratic is minimized from the origin.
//
// Given
// -----
// - `CoupledQuadratic` with default settings via `minimize`.
//
// Expect
// ------
// - The returned point matches `−A⁻¹b` within `1e-5`.
fn coupled_quadratic_reaches_analytic_minimizer() {
    // Arrange
    let f = CoupledQuadratic::new();

    // Act
    let x = minimize(&f, 3, 1e-6, 3.0, 1000).unwrap();

    // Assert
    let expected = CoupledQuadratic::minimizer();
    for i in 0..3 {
        assert_abs_diff_eq!(x[i], expected[i], epsilon = 1e-5);
    }
}

#[test]
// Purpose
// -------
// The halved shifted quadratic converges to its center.
//
// Given
// -----
// - `f(x, y) = ((x + 3)² + (y + 4)²) / 2` from the origin.
//
// Expect
// ------
// - `(−3, −4)` within `1e-4`, tagged `Converged(AfterStep)`, and the
//   returned gradient norm is below the tolerance.
fn halved_quadratic_converges_after_a_step() {
    let f = |x: &Point| ((x[0] + 3.0).powi(2) + (x[1] + 4.0).powi(2)) / 2.0;

    let out = minimize_with(&f, Array1::zeros(2), &BfgsOptions::default()).unwrap();

    assert_abs_diff_eq!(out.point[0], -3.0, epsilon = 1e-4);
    assert_abs_diff_eq!(out.point[1], -4.0, epsilon = 1e-4);
    assert_eq!(out.termination, Termination::Converged(Stage::AfterStep));
    assert!(out.grad_norm.unwrap() < 1e-6);
}

#[test]
// Purpose
// -------
// The curved Rosenbrock valley is followed to its minimum from two classic
// starting points.
//
// Given
// -----
// - Rosenbrock from `(0, 0)` and `(−1.2, 1)`, default settings.
//
// Expect
// ------
// - Converged within the iteration cap, at `(1, 1)` within `1e-4`.
fn rosenbrock_converges_from_classic_starts() {
    for start in [array![0.0, 0.0], array![-1.2, 1.0]] {
        // Act
        let out = minimize_with(&rosenbrock, start, &BfgsOptions::default()).unwrap();

        // Assert
        assert!(out.converged, "status: {}", out.status);
        assert!(out.iterations < 1000);
        assert_abs_diff_eq!(out.point[0], 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(out.point[1], 1.0, epsilon = 1e-4);
    }
}

#[test]
// Purpose
// -------
// Runs are deterministic.
//
// Given
// -----
// - Two Rosenbrock runs from the same start with the same options.
//
// Expect
// ------
// - Bit-identical points, iteration counts and evaluation counters.
fn repeated_runs_are_identical() {
    let opts = BfgsOptions::default();

    let first = minimize_with(&rosenbrock, array![-1.2, 1.0], &opts).unwrap();
    let second = minimize_with(&rosenbrock, array![-1.2, 1.0], &opts).unwrap();

    assert_eq!(first.point, second.point);
    assert_eq!(first.iterations, second.iterations);
    assert_eq!(first.fn_evals, second.fn_evals);
}

#[test]
// Purpose
// -------
// A tolerance above the initial gradient norm returns the start point
// without a line search.
//
// Given
// -----
// - `CoupledQuadratic` at the origin, where `‖∇f‖ = ‖b‖ ≈ 2.29`, and
//   `epsilon = 5`.
//
// Expect
// ------
// - The origin, zero iterations, `Converged(InitialPoint)`.
fn tolerance_above_initial_gradient_returns_origin() {
    let f = CoupledQuadratic::new();
    let opts = BfgsOptions::new(5.0, 3.0, 1000, 1e-6, CurvaturePolicy::Strict, false).unwrap();

    let out = minimize_with(&f, Array1::zeros(3), &opts).unwrap();

    assert_eq!(out.point, Array1::<f64>::zeros(3));
    assert_eq!(out.iterations, 0);
    assert_eq!(out.termination, Termination::Converged(Stage::InitialPoint));
    assert_eq!(minimize(&f, 3, 5.0, 3.0, 1000).unwrap(), Array1::<f64>::zeros(3));
}

#[test]
// Purpose
// -------
// The iteration cap stops a run that has not converged and returns the
// last point reached.
//
// Given
// -----
// - Rosenbrock from `(−1.2, 1)` with `maximum = 2`.
// - The same solver driven by hand for one `init` and two `next_iter` calls.
//
// Expect
// ------
// - `MaxIterations`, exactly two iterations, not converged.
// - The returned point and value are bit-identical to the hand-driven
//   second iterate.
fn iteration_cap_returns_last_point() {
    // Arrange
    let opts = BfgsOptions { maximum: 2, ..BfgsOptions::default() };
    let x0 = array![-1.2, 1.0];
    let mut solver = GoldenBfgs::new(&opts);
    let mut problem = Problem::new(ObjectiveProblem::new(&rosenbrock, opts.step));
    let state = BfgsState::new().param(x0.clone()).hessian(Hessian::eye(2));
    let (mut state, _) = solver.init(&mut problem, state).unwrap();
    for _ in 0..2 {
        state = solver.next_iter(&mut problem, state).unwrap().0;
    }

    // Act
    let out = minimize_with(&rosenbrock, x0, &opts).unwrap();

    // Assert
    assert_eq!(out.termination, Termination::MaxIterations);
    assert_eq!(out.iterations, 2);
    assert!(!out.converged);
    assert_eq!(&out.point, state.get_param().unwrap());
    assert_eq!(out.value, state.get_cost());
}

#[test]
// Purpose
// -------
// The returned point is the last iterate even when an earlier iterate had
// a lower objective value.
//
// Given
// -----
// - `f(x) = x − sin 3x` from `x = 0` (where `f = 0`) with `maximum = 1`.
//   The first golden-section search along `[0, 3]` settles in the valley
//   at `x = (2π + arccos(1/3)) / 3 ≈ 2.5047`, where `f ≈ 1.5619`.
//
// Expect
// ------
// - One iteration, the point `≈ 2.5047`, and a value above `f(0)`.
fn last_iterate_is_returned_over_lower_start() {
    let f = |x: &Point| x[0] - (3.0 * x[0]).sin();
    let opts = BfgsOptions { maximum: 1, ..BfgsOptions::default() };
    let valley = (2.0 * std::f64::consts::PI + (1.0_f64 / 3.0).acos()) / 3.0;

    let out = minimize_with(&f, array![0.0], &opts).unwrap();

    assert_eq!(out.iterations, 1);
    assert_abs_diff_eq!(out.point[0], valley, epsilon = 1e-4);
    assert_abs_diff_eq!(out.value, valley - (3.0 * valley).sin(), epsilon = 1e-6);
    assert!(out.value > 1.5);
}

#[test]
// Purpose
// -------
// An objective error raised mid-run surfaces unchanged through the
// executor.
//
// Given
// -----
// - `f(x) = (x₀ + 5)²`, failing for `x₀ < −0.5`. The first line search
//   from the origin probes beyond that bound.
//
// Expect
// ------
// - `minimize` returns the objective's `ObjectiveFailed` error.
fn objective_errors_surface_unchanged() {
    struct Fallible;

    impl Objective for Fallible {
        fn value(&self, x: &Point) -> OptResult<f64> {
            if x[0] < -0.5 {
                return Err(OptError::ObjectiveFailed { text: format!("x0 = {}", x[0]) });
            }
            Ok((x[0] + 5.0).powi(2))
        }
    }

    match minimize(&Fallible, 1, 1e-6, 3.0, 1000) {
        Err(OptError::ObjectiveFailed { text }) => assert!(text.starts_with("x0 = ")),
        other => panic!("Expected ObjectiveFailed, got {other:?}"),
    }
}

#[test]
// Purpose
// -------
// The standalone estimators agree with the solver at a minimizer.
//
// Given
// -----
// - `CoupledQuadratic` at its analytic minimizer.
//
// Expect
// ------
// - Gradient `≈ 0` within `1e-6` and Hessian `≈ A` within `1e-3`.
fn estimators_agree_at_minimizer() {
    let f = CoupledQuadratic::new();
    let x = CoupledQuadratic::minimizer();

    let g = gradient(&f, &x, 1e-6).unwrap();
    let h = hessian(&f, &x, 1e-4).unwrap();

    for gi in g.iter() {
        assert_abs_diff_eq!(*gi, 0.0, epsilon = 1e-6);
    }
    for ((i, j), &v) in h.indexed_iter() {
        assert_abs_diff_eq!(v, f.a[[i, j]], epsilon = 1e-3);
    }
}
