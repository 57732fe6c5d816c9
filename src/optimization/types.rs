//! optimization::types — shared numeric aliases.
//!
//! Purpose
//! -------
//! Centralize the numeric containers used by the differentiator, the line
//! search and the BFGS iterator so the rest of the code stays agnostic to
//! `ndarray` generics.
//!
//! Conventions
//! -----------
//! - `Point` and `Grad` are column vectors of length `n`.
//! - `Hessian` is a dense `n × n` matrix, used both for finite-difference
//!   Hessians and for the BFGS curvature approximation.
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Point `x ∈ ℝⁿ` at which an objective is evaluated.
pub type Point = Array1<f64>;

/// Gradient vector `∇f(x)`, matching the shape of `Point`.
pub type Grad = Array1<f64>;

/// Dense second-order matrix; `n × n` for `n = Point.len()`.
pub type Hessian = Array2<f64>;

/// Scalar objective value.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps counter names (e.g., `"cost_count"`, `"gradient_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default finite-difference perturbation `dx`.
pub const DEFAULT_STEP: f64 = 1e-6;
