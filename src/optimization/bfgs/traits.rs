//! Public configuration and result types for the BFGS iterator.
//!
//! - [`BfgsOptions`]: tolerances, line-search distance, iteration cap,
//!   finite-difference step and curvature policy.
//! - [`CurvaturePolicy`]: whether degenerate curvature is an error.
//! - [`Termination`] / [`Stage`]: why and where a run stopped.
//! - [`BfgsOutcome`]: normalized result returned by `minimize_with`.
use crate::optimization::{
    bfgs::types::{BfgsState, DEFAULT_DISTANCE, DEFAULT_EPSILON, DEFAULT_MAXIMUM},
    errors::{OptError, OptResult},
    types::{DEFAULT_STEP, FnEvalMap, Hessian, Point},
    validation::{verify_distance, verify_epsilon, verify_max_iter, verify_step},
};
use argmin::core::{State, TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// Handling of numerically degenerate BFGS steps.
///
/// Variants:
/// - `Strict`: a non-positive or non-finite curvature term (`yᵀd` or
///   `dᵀBd`) fails the run with `OptError::CurvatureConditionViolated`, a
///   singular Hessian approximation fails it with
///   `OptError::SingularHessianApprox`, and a non-finite gradient fails it
///   with `OptError::InvalidGradient`.
/// - `Permissive`: the update is applied regardless and non-finite values
///   propagate through the remaining iterations; a singular approximation
///   yields a `NaN` direction.
///
/// Parsing:
/// Accepts case-insensitive `"strict"` and `"permissive"`. Unknown names
/// return `OptError::InvalidCurvaturePolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurvaturePolicy {
    #[default]
    Strict,
    Permissive,
}

impl CurvaturePolicy {
    pub fn is_strict(self) -> bool {
        matches!(self, CurvaturePolicy::Strict)
    }
}

impl FromStr for CurvaturePolicy {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(CurvaturePolicy::Strict),
            "permissive" => Ok(CurvaturePolicy::Permissive),
            _ => Err(OptError::InvalidCurvaturePolicy {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'strict' or 'permissive'.",
            }),
        }
    }
}

/// Iterator configuration.
///
/// Fields:
/// - `epsilon`: stop once the gradient norm is below this value.
/// - `distance`: upper bound of every line-search interval `[0, distance]`,
///   measured in multiples of the descent direction.
/// - `maximum`: cap on outer iterations.
/// - `step`: finite-difference perturbation used for gradients.
/// - `curvature`: see [`CurvaturePolicy`].
/// - `verbose`: with the `obs_slog` feature, log the initial state and
///   attach a terminal observer.
///
/// Default:
/// - `epsilon = 1e-6`, `distance = 3`, `maximum = 1000`, `step = 1e-6`,
///   `curvature = Strict`, `verbose = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct BfgsOptions {
    pub epsilon: f64,
    pub distance: f64,
    pub maximum: usize,
    pub step: f64,
    pub curvature: CurvaturePolicy,
    pub verbose: bool,
}

impl BfgsOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`OptError::InvalidEpsilon`], [`OptError::InvalidDistance`],
    ///   [`OptError::InvalidStep`] for non-finite or non-positive values.
    /// - [`OptError::InvalidMaxIter`] if `maximum == 0`.
    pub fn new(
        epsilon: f64, distance: f64, maximum: usize, step: f64, curvature: CurvaturePolicy,
        verbose: bool,
    ) -> OptResult<Self> {
        verify_epsilon(epsilon)?;
        verify_distance(distance)?;
        verify_max_iter(maximum)?;
        verify_step(step)?;
        Ok(Self { epsilon, distance, maximum, step, curvature, verbose })
    }
}

impl Default for BfgsOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            distance: DEFAULT_DISTANCE,
            maximum: DEFAULT_MAXIMUM,
            step: DEFAULT_STEP,
            curvature: CurvaturePolicy::Strict,
            verbose: false,
        }
    }
}

/// Check at which a converged run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The starting point already satisfied the tolerance; no line search ran.
    InitialPoint,
    /// The point produced by a line-search step satisfied the tolerance.
    AfterStep,
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    Converged(Stage),
    MaxIterations,
    /// Any other executor-level stop (e.g. an interrupt), with its description.
    Stopped(String),
}

impl Termination {
    fn from_status(status: &TerminationStatus, iterations: u64) -> Self {
        match status {
            TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
                if iterations == 0 {
                    Termination::Converged(Stage::InitialPoint)
                } else {
                    Termination::Converged(Stage::AfterStep)
                }
            }
            TerminationStatus::Terminated(TerminationReason::MaxItersReached) => {
                Termination::MaxIterations
            }
            other => Termination::Stopped(format!("{other:?}")),
        }
    }
}

/// Canonical result returned by `minimize_with`.
///
/// - `point`: last iterate (the minimizer estimate when converged).
/// - `value`: objective value at `point`.
/// - `termination`: why the run stopped; `converged` mirrors
///   `Termination::Converged(_)`.
/// - `status`: human-readable termination status.
/// - `iterations`: completed outer iterations (line searches).
/// - `fn_evals`: argmin counters (`cost_count`, `gradient_count`); each
///   gradient costs `2n` objective evaluations on top of `cost_count`.
/// - `grad_norm`: Euclidean norm of the gradient at `point`.
/// - `hessian_approx`: final BFGS curvature approximation.
#[derive(Debug, Clone, PartialEq)]
pub struct BfgsOutcome {
    pub point: Point,
    pub value: f64,
    pub termination: Termination,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
    pub hessian_approx: Option<Hessian>,
}

impl BfgsOutcome {
    /// Build an outcome from the final solver state.
    ///
    /// # Errors
    /// - [`OptError::NotInitialized`] if the state carries no point.
    pub fn from_state(mut state: BfgsState) -> OptResult<Self> {
        let iterations = state.get_iter();
        let termination = Termination::from_status(state.get_termination_status(), iterations);
        let status = format!("{:?}", state.get_termination_status());
        let fn_evals = state.get_func_counts().clone();
        let value = state.get_cost();
        let grad_norm = state.take_gradient().map(|g| g.l2_norm());
        let hessian_approx = state.take_hessian();
        let point = state.take_param().ok_or_else(|| OptError::NotInitialized {
            text: "solver state holds no point".to_string(),
        })?;
        let converged = matches!(termination, Termination::Converged(_));
        Ok(Self {
            point,
            value,
            termination,
            converged,
            status,
            iterations: iterations as usize,
            fn_evals,
            grad_norm,
            hessian_approx,
        })
    }
}
