//! optimization — derivative-free quasi-Newton minimization and its numerics.
//!
//! Purpose
//! -------
//! Provide a self-contained minimization layer for smooth scalar objectives
//! `f: ℝⁿ → ℝ` for which only function values are available. Callers
//! implement (or pass a closure for) [`traits::Objective`] and obtain a
//! minimizer estimate plus diagnostics without touching backend solver
//! details.
//!
//! Key behaviors
//! -------------
//! - [`differentiation`] estimates gradients and Hessians by finite
//!   differences, either with a caller-chosen step or with `finitediff`'s
//!   machine-scaled steps.
//! - [`line_search`] provides the golden-section search used to choose step
//!   lengths.
//! - [`bfgs`] combines both into an `argmin`-driven BFGS iterator and exposes
//!   the `minimize` / `minimize_with` entry points.
//! - Configuration issues, objective failures and backend solver errors are
//!   normalized into a single enum ([`errors::OptError`]) with a common
//!   result alias ([`errors::OptResult`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Objectives are pure: the same point always yields the same value.
//! - Numeric settings (tolerances, steps, distances, iteration caps) are
//!   validated before any objective evaluation; invalid settings are
//!   reported as `OptError`, never as panics or endless loops.
//!
//! Conventions
//! -----------
//! - Points, gradients and Hessians use the `ndarray` aliases in [`types`].
//! - Public entry points that can fail return `OptResult<T>`; callers never
//!   see raw `argmin` errors.
//! - This module performs no I/O; progress logging is opt-in through the
//!   `obs_slog` feature.
//!
//! Downstream usage
//! ----------------
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`, which forwards the BFGS prelude, the
//!   differentiation helpers and the core error types.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns (validation,
//!   derivative accuracy, line-search precision, solver steps).
//! - Integration tests exercise complete minimizations and verify that
//!   failures surface as the documented `OptError` variants.

pub mod bfgs;
pub mod differentiation;
pub mod errors;
pub mod line_search;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use quasi_newton::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::bfgs::prelude::*;
    pub use super::differentiation::{gradient, hessian};
    pub use super::errors::{OptError, OptResult};
    pub use super::line_search::golden_section;
    pub use super::traits::Objective;
    pub use super::types::{DEFAULT_STEP, Grad, Hessian, Point};
}
