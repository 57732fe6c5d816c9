//! Validation helpers for the optimization stack.
//!
//! This module centralizes the consistency checks used across the
//! differentiator, the line search and the BFGS iterator:
//!
//! - **Option checks**: [`verify_epsilon`], [`verify_distance`],
//!   [`verify_step`], [`verify_line_tol`], [`verify_max_iter`] ensure
//!   numeric settings are finite and strictly positive.
//! - **Interval checks**: [`verify_interval`] enforces finite bounds with
//!   `lower < upper`.
//! - **Shape checks**: [`verify_point`] rejects empty points.
//! - **Derivative validation**: [`validate_grad`] and [`validate_hessian`]
//!   enforce dimensions and finite entries.
//!
//! All helpers return domain-specific [`OptError`] variants so higher-level
//! code reports failures uniformly.
use crate::optimization::{
    errors::{OptError, OptResult},
    types::{Grad, Hessian, Point},
};

/// Validate the gradient-norm convergence tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidEpsilon`] if the value is non-finite or ≤ 0.0.
pub fn verify_epsilon(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidEpsilon { value, reason: "Tolerance must be finite." });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidEpsilon { value, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the upper bound of the line-search interval `[0, distance]`.
///
/// # Errors
/// Returns [`OptError::InvalidDistance`] if the value is non-finite or ≤ 0.0.
pub fn verify_distance(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidDistance { value, reason: "Distance must be finite." });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidDistance { value, reason: "Distance must be positive." });
    }
    Ok(())
}

/// Validate a finite-difference perturbation `dx`.
///
/// # Errors
/// Returns [`OptError::InvalidStep`] if the value is non-finite or ≤ 0.0.
pub fn verify_step(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidStep { value, reason: "Step must be finite." });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidStep { value, reason: "Step must be positive." });
    }
    Ok(())
}

/// Validate the precision of a golden-section search.
///
/// A non-positive precision would keep the bracket from ever being
/// narrow enough, so it is rejected before any evaluation.
///
/// # Errors
/// Returns [`OptError::InvalidLineTol`] if the value is non-finite or ≤ 0.0.
pub fn verify_line_tol(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidLineTol { value, reason: "Precision must be finite." });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidLineTol { value, reason: "Precision must be positive." });
    }
    Ok(())
}

/// Validate the outer-iteration cap.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate a search interval `[lower, upper]`.
///
/// # Errors
/// Returns [`OptError::InvalidInterval`] unless both bounds are finite and
/// `lower < upper`.
pub fn verify_interval(lower: f64, upper: f64) -> OptResult<()> {
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(OptError::InvalidInterval { lower, upper });
    }
    Ok(())
}

/// Validate that a point has at least one coordinate.
///
/// # Errors
/// Returns [`OptError::EmptyPoint`] if `x` has no coordinates.
pub fn verify_point(x: &Point) -> OptResult<()> {
    if x.is_empty() {
        return Err(OptError::EmptyPoint);
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate the shape and entries of a Hessian matrix.
///
/// # Errors
/// - [`OptError::HessianDimMismatch`] if dimensions do not match `dim`.
/// - [`OptError::InvalidHessian`] if any entry is non-finite, with offending
///   row/col indices and value.
pub fn validate_hessian(hessian: &Hessian, dim: usize) -> OptResult<()> {
    if hessian.nrows() != dim || hessian.ncols() != dim {
        return Err(OptError::HessianDimMismatch {
            expected: dim,
            found: (hessian.nrows(), hessian.ncols()),
        });
    }
    for ((i, j), &value) in hessian.indexed_iter() {
        if !value.is_finite() {
            return Err(OptError::InvalidHessian { row: i, col: j, value });
        }
    }
    Ok(())
}
