//! PyO3 glue: input conversion and a Python-callable objective.
#[cfg(feature = "python-bindings")]
use crate::optimization::{
    errors::{OptError, OptResult},
    traits::Objective,
    types::Point,
};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray, // Array1 → PyArray
    PyReadonlyArray1,
};

/// Convert a 1-D `numpy.ndarray`, `pandas.Series` or float sequence into an
/// owned [`Point`].
#[cfg(feature = "python-bindings")]
pub fn extract_point(raw: &Bound<'_, PyAny>) -> PyResult<Point> {
    if let Ok(arr_ro) = raw.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series_ro.as_array().to_owned());
        }
    }

    let vec: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(Point::from(vec))
}

/// A Python callable `f(x: numpy.ndarray) -> float` used as an [`Objective`].
///
/// Exceptions raised by the callable, and return values that cannot be
/// converted to `float`, become [`OptError::ObjectiveFailed`] carrying the
/// Python error message.
#[cfg(feature = "python-bindings")]
pub struct PyObjective<'py> {
    func: Bound<'py, PyAny>,
}

#[cfg(feature = "python-bindings")]
impl<'py> PyObjective<'py> {
    /// Wrap `func`, rejecting non-callables with `TypeError`.
    pub fn new(func: &Bound<'py, PyAny>) -> PyResult<Self> {
        if !func.is_callable() {
            return Err(PyTypeError::new_err("objective must be callable"));
        }
        Ok(Self { func: func.clone() })
    }
}

#[cfg(feature = "python-bindings")]
impl Objective for PyObjective<'_> {
    fn value(&self, x: &Point) -> OptResult<f64> {
        let arg = x.clone().into_pyarray_bound(self.func.py());
        self.func
            .call1((arg,))
            .and_then(|out| out.extract::<f64>())
            .map_err(|err| OptError::ObjectiveFailed { text: err.to_string() })
    }
}

#[cfg(all(test, feature = "python-bindings"))]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // Interpreter-free checks of the PyO3 glue. Behavior with live Python
    // objects is expected to be tested from Python.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Arrays handed to and from `numpy` are the crate's own `Point` type, so
    // `into_pyarray_bound` and `PyReadonlyArray1::as_array` need no
    // conversion.
    //
    // Given
    // -----
    // - A `Point` moved into a binding typed with numpy's `ndarray` re-export.
    //
    // Expect
    // ------
    // - The move type-checks and the values are preserved.
    fn numpy_shares_the_point_array_type() {
        let point: Point = Point::from(vec![1.0, -2.0]);

        let shared: numpy::ndarray::Array1<f64> = point;

        assert_eq!(shared.to_vec(), vec![1.0, -2.0]);
    }
}
