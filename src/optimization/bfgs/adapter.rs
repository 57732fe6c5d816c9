//! Adapter that exposes a user [`Objective`] as an `argmin` problem.
//!
//! The cost is the objective value itself and the gradient is the central
//! finite-difference estimate from
//! [`differentiation::gradient`](crate::optimization::differentiation::gradient)
//! with the configured perturbation. Objective errors travel through
//! `argmin::core::Error` and are recovered unchanged by
//! `From<argmin::core::Error> for OptError`.
use crate::optimization::{
    differentiation::gradient,
    traits::Objective,
    types::{Cost, Grad, Point},
};
use argmin::core::{CostFunction, Error, Gradient};

/// Bridges an [`Objective`] to `argmin`'s `CostFunction` and `Gradient`.
#[derive(Debug)]
pub struct ObjectiveProblem<'a, O: Objective + ?Sized> {
    pub objective: &'a O,
    pub step: f64,
}

impl<'a, O: Objective + ?Sized> ObjectiveProblem<'a, O> {
    pub fn new(objective: &'a O, step: f64) -> Self {
        Self { objective, step }
    }
}

impl<'a, O: Objective + ?Sized> CostFunction for ObjectiveProblem<'a, O> {
    type Param = Point;
    type Output = Cost;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.objective.value(x)?)
    }
}

impl<'a, O: Objective + ?Sized> Gradient for ObjectiveProblem<'a, O> {
    type Param = Point;
    type Gradient = Grad;

    /// Central-difference gradient, `2n` objective evaluations.
    ///
    /// # Errors
    /// Propagates objective failures and shape errors from the estimator.
    fn gradient(&self, x: &Self::Param) -> Result<Self::Gradient, Error> {
        Ok(gradient(self.objective, x, self.step)?)
    }
}
