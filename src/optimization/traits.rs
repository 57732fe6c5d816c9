//! The objective interface shared by every optimizer component.
//!
//! - [`Objective`]: scalar function of `n` real variables, evaluated
//!   point-wise. Implemented automatically for any `Fn(&Point) -> f64`
//!   closure; implement it by hand when evaluation can fail (e.g., a
//!   logarithm outside its domain).
//!
//! Convention: objectives are pure. Repeated evaluation at the same point
//! must return the same value, because the differentiator and the line
//! search probe the same neighbourhood many times.
use crate::optimization::{errors::OptResult, types::Point};

/// User-implemented scalar objective `f: ℝⁿ → ℝ`.
///
/// Required:
/// - `value(&Point) -> OptResult<f64>`: evaluate `f(x)`.
///   - Errors: return a descriptive `OptError` when `x` lies outside the
///     objective's domain. The error propagates unchanged to the caller of
///     whichever operation was probing `x`; it is never retried.
pub trait Objective {
    fn value(&self, x: &Point) -> OptResult<f64>;
}

impl<F> Objective for F
where
    F: Fn(&Point) -> f64,
{
    fn value(&self, x: &Point) -> OptResult<f64> {
        Ok(self(x))
    }
}
