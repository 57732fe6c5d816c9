//! Execution helper that runs [`GoldenBfgs`] on an objective and returns a
//! crate-friendly [`BfgsOutcome`].
use crate::optimization::{
    bfgs::{
        adapter::ObjectiveProblem,
        solver::GoldenBfgs,
        traits::{BfgsOptions, BfgsOutcome},
        types::BfgsState,
    },
    errors::OptResult,
    traits::Objective,
    types::{Hessian, Point},
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::Executor;
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Run the BFGS iteration from `x0` under `opts`.
///
/// Wires up:
/// - the objective via [`ObjectiveProblem`],
/// - the starting point and identity curvature approximation,
/// - the iteration cap `opts.maximum`,
/// - optional observers (behind the `obs_slog` feature),
///
/// then executes the solver and converts the final state into a
/// [`BfgsOutcome`]. The outcome holds the last iterate, not the best point
/// seen.
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always` and a one-time
/// pre-iteration line logs `f(x₀)` and, if available, `‖g₀‖`.
///
/// # Errors
/// - Propagates objective errors raised during any evaluation.
/// - Propagates `CurvatureConditionViolated`, `SingularHessianApprox` and
///   `InvalidGradient` raised under the strict curvature policy.
/// - Propagates any other `argmin` runtime error via
///   `From<argmin::core::Error> for OptError`.
pub fn run_bfgs<'a, O>(
    x0: Point, opts: &BfgsOptions, problem: ObjectiveProblem<'a, O>, solver: GoldenBfgs,
) -> OptResult<BfgsOutcome>
where
    O: Objective + ?Sized,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&x0, &problem)?;
    }
    let n = x0.len();
    let max_iters = opts.maximum as u64;
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state: BfgsState| {
        state.param(x0).hessian(Hessian::eye(n)).max_iters(max_iters)
    });
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let result = optimizer.run()?.state().clone();
    BfgsOutcome::from_state(result)
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<O>(x0: &Point, problem: &ObjectiveProblem<'_, O>) -> OptResult<()>
where
    O: Objective + ?Sized,
{
    let f0 = problem.cost(x0)?;
    let g0n = problem.gradient(x0).ok().map(|g| g.l2_norm());

    eprintln!(
        "init: f(x0) = {:.6}{}",
        f0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
