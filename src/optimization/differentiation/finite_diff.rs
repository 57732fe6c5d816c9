//! differentiation::finite_diff — centered-difference gradients and Hessians.
//!
//! Purpose
//! -------
//! Estimate first and second partial derivatives of an arbitrary scalar
//! objective with a caller-chosen perturbation `dx`, by restricting the
//! objective to one coordinate at a time and differentiating the resulting
//! one-dimensional function.
//!
//! Key behaviors
//! -------------
//! - [`CoordinateSlice`] captures a copy of the base point and the index of
//!   the coordinate being varied; every probe builds its own point from that
//!   copy, so the caller's point is never perturbed in place.
//! - [`central_derivative`] applies `(g(t + dx) − g(t − dx)) / (2dx)` to any
//!   fallible one-dimensional function.
//! - [`gradient`] returns one centered derivative per coordinate.
//! - [`hessian`] nests two centered derivatives: the inner one along
//!   coordinate `i`, evaluated with coordinate `j` moved by the outer one.
//!
//! Invariants & assumptions
//! ------------------------
//! - Results are deterministic in `(f, x, dx)`; there is no adaptive step
//!   control, so accuracy is governed by `dx` and the smoothness of `f`.
//! - The first objective error encountered aborts the computation and is
//!   returned unchanged.
//!
//! Testing notes
//! -------------
//! - Unit tests check exactness on affine objectives, the `2A` Hessian of
//!   quadratic forms, error propagation and input validation.
use crate::optimization::{
    errors::{OptError, OptResult},
    traits::Objective,
    types::{Grad, Hessian, Point},
    validation::{verify_point, verify_step},
};

/// One-dimensional restriction of an objective along a single coordinate.
///
/// Holds an owned copy of the base point together with the coordinate
/// index, so `t ↦ f(x₁, …, xᵢ₋₁, t, xᵢ₊₁, …, xₙ)` can be evaluated without
/// sharing any mutable state with the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSlice {
    base: Point,
    index: usize,
}

impl CoordinateSlice {
    /// Capture `base` and the varying coordinate `index`.
    ///
    /// # Errors
    /// Returns [`OptError::CoordinateOutOfRange`] if `index >= base.len()`.
    pub fn new(base: &Point, index: usize) -> OptResult<Self> {
        if index >= base.len() {
            return Err(OptError::CoordinateOutOfRange { index, dim: base.len() });
        }
        Ok(Self { base: base.clone(), index })
    }

    /// Value of the varying coordinate in the base point.
    pub fn origin(&self) -> f64 {
        self.base[self.index]
    }

    /// Base point with the varying coordinate replaced by `t`.
    pub fn point_at(&self, t: f64) -> Point {
        let mut x = self.base.clone();
        x[self.index] = t;
        x
    }

    /// Evaluate the objective along the slice.
    pub fn eval<O: Objective + ?Sized>(&self, f: &O, t: f64) -> OptResult<f64> {
        f.value(&self.point_at(t))
    }
}

/// central_derivative — centered difference of a one-dimensional function.
///
/// Returns `(g(t + dx) − g(t − dx)) / (2dx)`. `dx` is used as given;
/// callers validate it.
///
/// # Errors
/// Propagates the first error returned by `g`.
pub fn central_derivative<G>(mut g: G, t: f64, dx: f64) -> OptResult<f64>
where
    G: FnMut(f64) -> OptResult<f64>,
{
    let plus = g(t + dx)?;
    let minus = g(t - dx)?;
    Ok((plus - minus) / (2.0 * dx))
}

/// gradient — centered-difference gradient of `f` at `x`.
///
/// Parameters
/// ----------
/// - `f`: `&O`
///   Objective to differentiate.
/// - `x`: `&Point`
///   Evaluation point; its length `n` is the gradient length.
/// - `dx`: `f64`
///   Perturbation size, typically [`DEFAULT_STEP`](crate::optimization::types::DEFAULT_STEP).
///
/// Returns
/// -------
/// `OptResult<Grad>`
///   Length-`n` vector whose `i`-th entry is the centered derivative of the
///   coordinate-`i` slice of `f` through `x`. Uses `2n` objective
///   evaluations.
///
/// Errors
/// ------
/// - `OptError::EmptyPoint` if `x` is empty.
/// - `OptError::InvalidStep` if `dx` is non-finite or ≤ 0.
/// - Any error returned by `f` at a probe point.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use quasi_newton::optimization::{differentiation::gradient, types::Point};
/// let f = |x: &Point| 3.0 * x[0] - x[1];
/// let g = gradient(&f, &array![1.0, 2.0], 1e-6).unwrap();
/// assert!((g[0] - 3.0).abs() < 1e-6);
/// assert!((g[1] + 1.0).abs() < 1e-6);
/// ```
pub fn gradient<O: Objective + ?Sized>(f: &O, x: &Point, dx: f64) -> OptResult<Grad> {
    verify_point(x)?;
    verify_step(dx)?;
    let mut grad = Grad::zeros(x.len());
    for i in 0..x.len() {
        let slice = CoordinateSlice::new(x, i)?;
        grad[i] = central_derivative(|t| slice.eval(f, t), slice.origin(), dx)?;
    }
    Ok(grad)
}

/// hessian — nested centered-difference Hessian of `f` at `x`.
///
/// Parameters
/// ----------
/// - `f`: `&O`
///   Objective to differentiate twice.
/// - `x`: `&Point`
///   Evaluation point of length `n`.
/// - `dx`: `f64`
///   Perturbation size used by both the inner and the outer difference.
///
/// Returns
/// -------
/// `OptResult<Hessian>`
///   `n × n` matrix whose `(i, j)` entry is the centered derivative, along
///   coordinate `j`, of the centered derivative along coordinate `i`. Uses
///   `4n²` objective evaluations. The result is not symmetrized.
///
/// Errors
/// ------
/// - `OptError::EmptyPoint` if `x` is empty.
/// - `OptError::InvalidStep` if `dx` is non-finite or ≤ 0.
/// - Any error returned by `f` at a probe point.
///
/// Notes
/// -----
/// - Rounding error grows like `ε·|f| / dx²`; the default `dx = 1e-6`
///   gives roughly three to five correct digits for well-scaled objectives.
///   Larger steps (e.g. `1e-4`) are more accurate for smooth objectives.
/// - This is a standalone utility; the BFGS iterator builds its own
///   curvature approximation instead.
pub fn hessian<O: Objective + ?Sized>(f: &O, x: &Point, dx: f64) -> OptResult<Hessian> {
    verify_point(x)?;
    verify_step(dx)?;
    let n = x.len();
    let mut hess = Hessian::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let outer = CoordinateSlice::new(x, j)?;
            hess[[i, j]] = central_derivative(
                |xj| -> OptResult<f64> {
                    let inner = CoordinateSlice::new(&outer.point_at(xj), i)?;
                    central_derivative(|xi| inner.eval(f, xi), inner.origin(), dx)
                },
                outer.origin(),
                dx,
            )?;
        }
    }
    Ok(hess)
}
