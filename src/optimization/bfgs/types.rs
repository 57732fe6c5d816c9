//! bfgs::types — solver state alias and iterator defaults.
//!
//! Purpose
//! -------
//! Pin the `argmin` state type the BFGS iterator runs on and collect the
//! numeric defaults of the public entry points in one place.
//!
//! Conventions
//! -----------
//! - The Hessian approximation lives in the state's Hessian slot, so it is
//!   owned by the single run in progress and replaced, never shared.
//! - Jacobian and residual slots are unused (`()`).
use crate::optimization::types::{Grad, Hessian, Point};
use argmin::core::IterState;

/// `argmin` iteration state: current point, gradient, Hessian approximation
/// and objective value.
pub type BfgsState = IterState<Point, Grad, (), Hessian, (), f64>;

/// Default gradient-norm convergence tolerance.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default upper bound of the line-search interval `[0, distance]`.
pub const DEFAULT_DISTANCE: f64 = 3.0;

/// Default cap on outer iterations.
pub const DEFAULT_MAXIMUM: usize = 1000;

/// Precision of every golden-section step-length search, independent of the
/// convergence tolerance.
pub const LINE_SEARCH_TOL: f64 = 1e-6;
