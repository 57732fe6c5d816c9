//! bfgs::solver — quasi-Newton iterator driven by `argmin`.
//!
//! Purpose
//! -------
//! Implement `argmin::core::Solver` for a BFGS iteration whose step length
//! comes from a golden-section search over a fixed interval, with gradients
//! supplied by the problem (finite differences in this crate).
//!
//! Key behaviors
//! -------------
//! - `init` evaluates the gradient at the starting point and seeds the
//!   curvature approximation with the identity (unless the caller supplied
//!   one). A starting point whose gradient norm is already below `epsilon`
//!   terminates before any line search.
//! - Each `next_iter`:
//!   1. solves `B p = −g` for the direction,
//!   2. minimizes `t ↦ f(x + t p)` over `[0, distance]` to precision
//!      [`LINE_SEARCH_TOL`],
//!   3. moves to `x₁ = x + λ p` and evaluates `g₁`,
//!   4. stops if `‖g₁‖ < epsilon`, otherwise applies the BFGS update with
//!      `y = g₁ − g` and `d = λ p`.
//! - The iteration cap is enforced by the executor through `max_iters`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The state always carries the point, its gradient and the curvature
//!   approximation belonging to that point after `init` and after every
//!   iteration.
//! - With `CurvaturePolicy::Strict`, gradients are finite and every stored
//!   approximation is symmetric positive definite.
use crate::optimization::{
    bfgs::{
        linalg::{bfgs_update, descent_direction},
        traits::{BfgsOptions, CurvaturePolicy},
        types::{BfgsState, LINE_SEARCH_TOL},
    },
    errors::{OptError, OptResult},
    line_search::golden_section,
    types::{Grad, Hessian, Point},
    validation::{validate_grad, verify_point},
};
use argmin::core::{
    CostFunction, Error, Gradient, KV, Problem, Solver, State, TerminationReason,
    TerminationStatus,
};
use argmin::kv;
use argmin_math::ArgminL2Norm;
use ndarray::Array1;

/// BFGS with a golden-section line search.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenBfgs {
    epsilon: f64,
    distance: f64,
    curvature: CurvaturePolicy,
}

impl GoldenBfgs {
    pub fn new(opts: &BfgsOptions) -> Self {
        Self { epsilon: opts.epsilon, distance: opts.distance, curvature: opts.curvature }
    }

    fn check_gradient(&self, g: &Grad, dim: usize) -> OptResult<()> {
        if self.curvature.is_strict() {
            validate_grad(g, dim)?;
        }
        Ok(())
    }

    fn converged(&self, g: &Grad) -> bool {
        g.l2_norm() < self.epsilon
    }
}

/// Restriction of an objective to the ray `t ↦ origin + t · direction`.
#[derive(Debug, Clone, Copy)]
pub struct Ray<'p> {
    origin: &'p Point,
    direction: &'p Array1<f64>,
}

impl<'p> Ray<'p> {
    pub fn new(origin: &'p Point, direction: &'p Array1<f64>) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, t: f64) -> Point {
        let mut x = self.origin.clone();
        x.scaled_add(t, self.direction);
        x
    }
}

impl<O> Solver<O, BfgsState> for GoldenBfgs
where
    O: CostFunction<Param = Point, Output = f64> + Gradient<Param = Point, Gradient = Grad>,
{
    const NAME: &'static str = "BFGS (golden-section)";

    fn init(
        &mut self, problem: &mut Problem<O>, mut state: BfgsState,
    ) -> Result<(BfgsState, Option<KV>), Error> {
        let x0 = state.take_param().ok_or_else(|| OptError::NotInitialized {
            text: "BFGS requires an initial point".to_string(),
        })?;
        verify_point(&x0)?;
        let n = x0.len();
        let g0 = problem.gradient(&x0)?;
        self.check_gradient(&g0, n)?;
        let b0 = match state.take_hessian() {
            Some(b) if b.dim() == (n, n) => b,
            _ => Hessian::eye(n),
        };
        let cost = problem.cost(&x0)?;
        let converged = self.converged(&g0);

        let state = state.param(x0).gradient(g0).hessian(b0).cost(cost);
        if converged {
            return Ok((state.terminate_with(TerminationReason::SolverConverged), None));
        }
        Ok((state, None))
    }

    fn next_iter(
        &mut self, problem: &mut Problem<O>, mut state: BfgsState,
    ) -> Result<(BfgsState, Option<KV>), Error> {
        let iteration = state.get_iter();
        let missing = |what: &str| OptError::NotInitialized {
            text: format!("BFGS state holds no {what}"),
        };
        let x0 = state.take_param().ok_or_else(|| missing("point"))?;
        let g0 = state.take_gradient().ok_or_else(|| missing("gradient"))?;
        let b0 = state.take_hessian().ok_or_else(|| missing("Hessian approximation"))?;

        let direction = descent_direction(&b0, &g0, self.curvature, iteration)?;
        let ray = Ray::new(&x0, &direction);
        let step_length = golden_section(
            |t| problem.cost(&ray.point_at(t)).map_err(OptError::from),
            0.0,
            self.distance,
            LINE_SEARCH_TOL,
        )?;

        let step = &direction * step_length;
        let x1 = &x0 + &step;
        let g1 = problem.gradient(&x1)?;
        self.check_gradient(&g1, x1.len())?;
        let cost = problem.cost(&x1)?;
        let grad_norm = g1.l2_norm();
        let kv = kv!(
            "step_length" => step_length;
            "grad_norm" => grad_norm;
        );

        if self.converged(&g1) {
            let state = state.param(x1).gradient(g1).hessian(b0).cost(cost);
            return Ok((state.terminate_with(TerminationReason::SolverConverged), Some(kv)));
        }
        let y = &g1 - &g0;
        let b1 = bfgs_update(&b0, &y, &step, self.curvature, iteration)?;
        Ok((state.param(x1).gradient(g1).hessian(b1).cost(cost), Some(kv)))
    }

    fn terminate(&mut self, state: &BfgsState) -> TerminationStatus {
        match state.get_gradient() {
            Some(g) if self.converged(g) => {
                TerminationStatus::Terminated(TerminationReason::SolverConverged)
            }
            _ => TerminationStatus::NotTerminated,
        }
    }
}
