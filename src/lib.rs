//! quasi_newton — derivative-free BFGS minimization with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the minimizer and the finite-difference estimators to Python via the
//! `_quasi_newton` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`optimization`) as the public crate
//!   surface.
//! - When the `python-bindings` feature is enabled, define the `#[pyfunction]`
//!   wrappers `minimize`, `gradient` and `hessian` and the `#[pymodule]`
//!   initializer for `_quasi_newton`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in `optimization`; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - Python objectives are called with a fresh 1-D `float64` array per
//!   evaluation and must return something convertible to `float`.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as `OptError` internally and
//!   converted to `ValueError` at the PyO3 boundary. Exceptions raised by a
//!   Python objective are carried through as `OptError::ObjectiveFailed`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on `optimization` (or its prelude) and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by `tests/integration_bfgs_pipeline.rs`.

pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::{
        bfgs::{self, DEFAULT_DISTANCE, DEFAULT_EPSILON, DEFAULT_MAXIMUM},
        differentiation,
        types::DEFAULT_STEP,
    },
    utils::{PyObjective, extract_point},
};

/// minimize — BFGS minimization of a Python callable from the origin.
///
/// Parameters
/// ----------
/// - `func`: callable `f(x: numpy.ndarray) -> float`.
/// - `n_features`: dimension of `x`.
/// - `epsilon`: gradient-norm tolerance, default `1e-6`.
/// - `distance`: line-search interval bound, default `3.0`.
/// - `maximum`: iteration cap, default `1000`.
///
/// Returns
/// -------
/// `numpy.ndarray` holding the final iterate.
///
/// Raises
/// ------
/// - `TypeError` if `func` is not callable.
/// - `ValueError` for invalid settings, degenerate curvature, or an
///   exception raised by `func` (its message is included).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "minimize",
    signature = (
        func,
        n_features,
        epsilon = DEFAULT_EPSILON,
        distance = DEFAULT_DISTANCE,
        maximum = DEFAULT_MAXIMUM,
    )
)]
fn py_minimize<'py>(
    py: Python<'py>, func: &Bound<'py, PyAny>, n_features: usize, epsilon: f64, distance: f64,
    maximum: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let objective = PyObjective::new(func)?;
    let x = bfgs::minimize(&objective, n_features, epsilon, distance, maximum)?;
    Ok(x.into_pyarray_bound(py))
}

/// gradient — centered-difference gradient of a Python callable at `x`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "gradient", signature = (func, x, dx = DEFAULT_STEP))]
fn py_gradient<'py>(
    py: Python<'py>, func: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>, dx: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let objective = PyObjective::new(func)?;
    let point = extract_point(x)?;
    let grad = differentiation::gradient(&objective, &point, dx)?;
    Ok(grad.into_pyarray_bound(py))
}

/// hessian — nested centered-difference Hessian of a Python callable at `x`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "hessian", signature = (func, x, dx = DEFAULT_STEP))]
fn py_hessian<'py>(
    py: Python<'py>, func: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>, dx: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let objective = PyObjective::new(func)?;
    let point = extract_point(x)?;
    let hess = differentiation::hessian(&objective, &point, dx)?;
    Ok(hess.into_pyarray_bound(py))
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _quasi_newton<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_minimize, m)?)?;
    m.add_function(wrap_pyfunction!(py_gradient, m)?)?;
    m.add_function(wrap_pyfunction!(py_hessian, m)?)?;
    Ok(())
}
