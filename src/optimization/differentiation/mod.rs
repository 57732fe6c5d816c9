//! differentiation — numerical first and second derivatives.
//!
//! Purpose
//! -------
//! Estimate gradients and Hessians of arbitrary scalar objectives from
//! function values alone. This is the leaf of the optimization stack: it
//! depends on nothing but the [`Objective`](crate::optimization::traits::Objective)
//! contract.
//!
//! Key behaviors
//! -------------
//! - [`gradient`] / [`hessian`]: centered differences with a caller-chosen
//!   perturbation `dx` (default [`DEFAULT_STEP`](crate::optimization::types::DEFAULT_STEP)),
//!   built from explicit per-coordinate restrictions ([`CoordinateSlice`]).
//! - [`auto_gradient`] / [`hessian_from_gradient`]: `finitediff`-backed
//!   estimates with machine-precision steps, validation and symmetrization.
//!
//! Testing notes
//! -------------
//! - Affine objectives pin down gradient exactness; quadratic forms pin down
//!   the `2A` Hessian; failing objectives pin down error propagation.

pub mod auto_step;
pub mod finite_diff;

pub use self::auto_step::{auto_gradient, hessian_from_gradient};
pub use self::finite_diff::{CoordinateSlice, central_derivative, gradient, hessian};
