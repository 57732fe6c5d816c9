//! optimization::errors — unified error surface for the optimization stack.
//!
//! Purpose
//! -------
//! Collect every failure the differentiator, the line search and the BFGS
//! iterator can report into a single enum, [`OptError`], with a crate-wide
//! result alias [`OptResult`]. Backend errors raised inside the `argmin`
//! executor are normalized back into [`OptError`] at the API boundary.
//!
//! Conventions
//! -----------
//! - Configuration problems carry the offending value and a static reason.
//! - Errors raised by a user objective travel through `argmin` as boxed
//!   [`OptError`] values and are recovered unchanged by
//!   `From<argmin::core::Error>`.
//! - With the `python-bindings` feature, every variant maps to a Python
//!   `ValueError` carrying the `Display` message.
use argmin::core::{ArgminError, Error};

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Options ----
    /// Convergence tolerance needs to be positive and finite.
    InvalidEpsilon {
        value: f64,
        reason: &'static str,
    },
    /// Line-search interval scale needs to be positive and finite.
    InvalidDistance {
        value: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// Finite-difference perturbation needs to be positive and finite.
    InvalidStep {
        value: f64,
        reason: &'static str,
    },
    /// Invalid curvature policy name.
    InvalidCurvaturePolicy {
        name: String,
        reason: &'static str,
    },

    // ---- Line search ----
    /// Line-search precision needs to be positive and finite.
    InvalidLineTol {
        value: f64,
        reason: &'static str,
    },
    /// Search interval must be finite with a strictly smaller lower bound.
    InvalidInterval {
        lower: f64,
        upper: f64,
    },

    // ---- Shapes ----
    /// Points must have at least one coordinate.
    EmptyPoint,
    /// Coordinate index lies outside the point.
    CoordinateOutOfRange {
        index: usize,
        dim: usize,
    },
    /// Gradient dimensions do not match point dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },
    /// Hessian matrix dimensions do not match point dimensions.
    HessianDimMismatch {
        expected: usize,
        found: (usize, usize),
    },

    // ---- Numerics ----
    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },
    /// Hessian values need to be finite.
    InvalidHessian {
        row: usize,
        col: usize,
        value: f64,
    },
    /// `yᵀd` (or `dᵀBd`) was not strictly positive in the BFGS update.
    CurvatureConditionViolated {
        iteration: u64,
        curvature: f64,
    },
    /// The Hessian approximation could not be factorized.
    SingularHessianApprox {
        iteration: u64,
    },

    // ---- Objective ----
    /// The objective could not be evaluated at a probe point.
    ObjectiveFailed {
        text: String,
    },

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Options ----
            OptError::InvalidEpsilon { value, reason } => {
                write!(f, "Invalid convergence tolerance {value}: {reason}")
            }
            OptError::InvalidDistance { value, reason } => {
                write!(f, "Invalid line-search distance {value}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::InvalidStep { value, reason } => {
                write!(f, "Invalid finite-difference step {value}: {reason}")
            }
            OptError::InvalidCurvaturePolicy { name, reason } => {
                write!(f, "Invalid curvature policy '{name}': {reason}")
            }

            // ---- Line search ----
            OptError::InvalidLineTol { value, reason } => {
                write!(f, "Invalid line-search precision {value}: {reason}")
            }
            OptError::InvalidInterval { lower, upper } => {
                write!(f, "Invalid search interval [{lower}, {upper}]: bounds must be finite with lower < upper")
            }

            // ---- Shapes ----
            OptError::EmptyPoint => {
                write!(f, "Point must have at least one coordinate")
            }
            OptError::CoordinateOutOfRange { index, dim } => {
                write!(f, "Coordinate index {index} out of range for a point of dimension {dim}")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::HessianDimMismatch { expected, found } => {
                write!(
                    f,
                    "Hessian dimension mismatch: expected ({expected}, {expected}), found {found:?}"
                )
            }

            // ---- Numerics ----
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }
            OptError::InvalidHessian { row, col, value } => {
                write!(f, "Invalid Hessian at ({row}, {col}): {value}, must be finite")
            }
            OptError::CurvatureConditionViolated { iteration, curvature } => {
                write!(
                    f,
                    "Curvature condition violated at iteration {iteration}: {curvature} is not strictly positive"
                )
            }
            OptError::SingularHessianApprox { iteration } => {
                write!(f, "Hessian approximation is singular at iteration {iteration}")
            }

            // ---- Objective ----
            OptError::ObjectiveFailed { text } => {
                write!(f, "Objective evaluation failed: {text}")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<OptError> for PyErr {
    fn from(err: OptError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
