//! differentiation::auto_step — finitediff-backed derivatives with automatic steps.
//!
//! Purpose
//! -------
//! Complement the fixed-`dx` estimators in [`finite_diff`](super::finite_diff)
//! with derivatives whose perturbation is chosen by the `finitediff` crate
//! from machine precision, plus validation and symmetry cleanup.
//!
//! Key behaviors
//! -------------
//! - [`auto_gradient`] computes a central-difference gradient, retrying with
//!   forward differences if the central estimate fails validation. Errors
//!   raised by the objective are captured through a `RefCell` side channel
//!   (the `finitediff` closures must return plain `f64`) and returned.
//! - [`hessian_from_gradient`] differentiates a gradient map, preferring the
//!   central scheme and falling back to forward differences, then
//!   symmetrizes the result in place. Intended for analytic gradients:
//!   nesting it over [`auto_gradient`] amplifies rounding noise.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returned gradients satisfy [`validate_grad`] and returned Hessians
//!   satisfy [`validate_hessian`].
//! - The first objective error wins; later ones are dropped.
use crate::optimization::{
    errors::{OptError, OptResult},
    traits::Objective,
    types::{Grad, Hessian, Point},
    validation::{validate_grad, validate_hessian, verify_point},
};
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// auto_gradient — central-difference gradient with machine-scaled step.
///
/// Parameters
/// ----------
/// - `f`: `&O`
///   Objective to differentiate.
/// - `x`: `&Point`
///   Evaluation point; its length defines the gradient dimension.
///
/// Returns
/// -------
/// `OptResult<Grad>`
///   - `Ok(grad)` when no evaluation failed and the gradient is finite.
///   - `Err(e)` otherwise.
///
/// Errors
/// ------
/// - `OptError::EmptyPoint` if `x` is empty.
/// - The first error raised by `f` during differencing.
/// - `OptError::InvalidGradient` when neither the central nor the forward
///   estimate is finite.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use quasi_newton::optimization::{differentiation::auto_gradient, types::Point};
/// let f = |x: &Point| x.dot(x);
/// let g = auto_gradient(&f, &array![1.0, -2.0]).unwrap();
/// assert!((g[0] - 2.0).abs() < 1e-6);
/// assert!((g[1] + 4.0).abs() < 1e-6);
/// ```
pub fn auto_gradient<O: Objective + ?Sized>(f: &O, x: &Point) -> OptResult<Grad> {
    verify_point(x)?;
    let dim = x.len();
    let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
    let func = |p: &Point| -> f64 {
        match f.value(p) {
            Ok(v) => v,
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                f64::NAN
            }
        }
    };
    let central = x.central_diff(&func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    match validate_grad(&central, dim) {
        Ok(()) => Ok(central),
        Err(_) => run_forward_diff(x, &func, &closure_err),
    }
}

/// hessian_from_gradient — finite-difference Hessian of a gradient map.
///
/// Approximates the Jacobian of `grad` at `x`, preferring central
/// differences and falling back to forward differences when the central
/// matrix fails validation. The accepted matrix is symmetrized in place.
///
/// # Errors
/// - `OptError::EmptyPoint` if `x` is empty.
/// - `OptError::HessianDimMismatch` / `OptError::InvalidHessian` when the
///   forward-difference fallback also fails validation.
pub fn hessian_from_gradient<F: Fn(&Point) -> Grad>(grad: &F, x: &Point) -> OptResult<Hessian> {
    verify_point(x)?;
    let dim = x.len();
    let mut cent_hess = x.central_hessian(grad);
    match validate_hessian(&cent_hess, dim) {
        Ok(_) => {
            symmetrize_hess(&mut cent_hess);
            Ok(cent_hess)
        }
        Err(_) => {
            let mut forward_hess = x.forward_hessian(grad);
            validate_hessian(&forward_hess, dim)?;
            symmetrize_hess(&mut forward_hess);
            Ok(forward_hess)
        }
    }
}

// ---- Helper methods ----

fn run_forward_diff<G: Fn(&Point) -> f64>(
    x: &Point, func: &G, closure_err: &RefCell<Option<OptError>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = x.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, x.len())?;
    Ok(fd_grad)
}

/// Replace each off-diagonal pair with its average; the diagonal is kept.
fn symmetrize_hess(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}
