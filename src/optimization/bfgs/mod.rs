//! bfgs — quasi-Newton minimizer with golden-section step lengths.
//!
//! Purpose
//! -------
//! Minimize a scalar objective over `ℝⁿ` without analytic derivatives:
//! gradients come from central finite differences, the curvature is tracked
//! by BFGS updates, and each step length is chosen by a golden-section search
//! over a fixed interval.
//!
//! Key behaviors
//! -------------
//! - [`minimize`] starts at the origin and returns the final point;
//!   [`minimize_with`] takes a starting point and [`BfgsOptions`] and returns
//!   a [`BfgsOutcome`].
//! - [`adapter::ObjectiveProblem`] exposes an [`Objective`] to `argmin`.
//! - [`solver::GoldenBfgs`] implements `argmin::core::Solver`; the
//!   `argmin` executor in [`run::run_bfgs`] drives it and enforces the
//!   iteration cap.
//! - [`linalg`] holds the direction solve and the rank-two update.
//!
//! Invariants & assumptions
//! ------------------------
//! - The curvature approximation starts at the identity and is owned by one
//!   run; concurrent runs never share state.
//! - A start point that already meets the tolerance is returned without any
//!   line search; otherwise convergence is checked after every step.
//! - Under [`CurvaturePolicy::Strict`] (the default) degenerate curvature,
//!   singular approximations and non-finite gradients are errors. Under
//!   [`CurvaturePolicy::Permissive`] they propagate as non-finite numbers.
//!
//! Conventions
//! -----------
//! - Runs are deterministic: identical inputs give bit-identical outcomes.
//! - Objective errors abort the run and are returned unchanged.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover option validation, the linear algebra,
//!   single solver steps and the public entry points.
//! - `tests/integration_bfgs_pipeline.rs` exercises full runs on standard
//!   test functions.
//!
//! [`Objective`]: crate::optimization::traits::Objective

pub mod adapter;
pub mod api;
pub mod linalg;
pub mod run;
pub mod solver;
pub mod traits;
pub mod types;

pub use self::api::{minimize, minimize_with};
pub use self::traits::{BfgsOptions, BfgsOutcome, CurvaturePolicy, Stage, Termination};
pub use self::types::{DEFAULT_DISTANCE, DEFAULT_EPSILON, DEFAULT_MAXIMUM, LINE_SEARCH_TOL};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use quasi_newton::optimization::bfgs::prelude::*;
//
// to import the minimizer surface in a single line.

pub mod prelude {
    pub use super::api::{minimize, minimize_with};
    pub use super::traits::{BfgsOptions, BfgsOutcome, CurvaturePolicy, Stage, Termination};
}
