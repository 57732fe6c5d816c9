//! bfgs::linalg — search direction and curvature update.
//!
//! Purpose
//! -------
//! Provide the two dense linear-algebra steps of a BFGS iteration:
//! solving `B p = −g` for the search direction and the rank-two update of
//! the curvature approximation `B`.
//!
//! Key behaviors
//! -------------
//! - [`descent_direction`] copies `B` into a `nalgebra::DMatrix`, solves by
//!   Cholesky when `B` is symmetric positive definite and falls back to LU
//!   otherwise.
//! - [`bfgs_update`] applies
//!   `B₁ = B₀ + y yᵀ / (yᵀd) − (B₀ d)(dᵀ B₀) / (dᵀ B₀ d)`.
//! - Degenerate inputs are handled according to [`CurvaturePolicy`]: errors
//!   under `Strict`, propagated non-finite values under `Permissive`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `B` is `n × n` and `g`, `y`, `d` have length `n`; callers guarantee
//!   shapes.
//! - Under `Strict`, a returned matrix is the update of a matrix whose
//!   curvature terms `yᵀd` and `dᵀ B₀ d` were finite and strictly positive,
//!   so positive definiteness is preserved.
use crate::optimization::{
    bfgs::traits::CurvaturePolicy,
    errors::{OptError, OptResult},
    types::{Grad, Hessian},
};
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;

/// descent_direction — solve `B p = −g`.
///
/// Parameters
/// ----------
/// - `b`: `&Hessian`
///   Current curvature approximation.
/// - `g`: `&Grad`
///   Gradient at the current point.
/// - `policy`: `CurvaturePolicy`
///   Handling of a singular `b`.
/// - `iteration`: `u64`
///   Reported in errors.
///
/// Returns
/// -------
/// `OptResult<Array1<f64>>`
///   The direction `p`. Under `Permissive`, a singular `b` yields a
///   direction filled with `NaN`.
///
/// Errors
/// ------
/// - `OptError::SingularHessianApprox` under `Strict` when neither
///   decomposition produces a finite solution.
pub fn descent_direction(
    b: &Hessian, g: &Grad, policy: CurvaturePolicy, iteration: u64,
) -> OptResult<Array1<f64>> {
    let n = g.len();
    let mut b_nalg = DMatrix::<f64>::zeros(n, n);
    fill_dmatrix(b, &mut b_nalg);
    let rhs = DVector::from_iterator(n, g.iter().map(|v| -v));

    let solution = match b_nalg.clone().cholesky() {
        Some(chol) => Some(chol.solve(&rhs)),
        None => b_nalg.lu().solve(&rhs),
    };
    match solution {
        Some(p) if p.iter().all(|v| v.is_finite()) => Ok(Array1::from_iter(p.iter().copied())),
        _ if policy.is_strict() => Err(OptError::SingularHessianApprox { iteration }),
        _ => Ok(Array1::from_elem(n, f64::NAN)),
    }
}

/// bfgs_update — rank-two BFGS update of the curvature approximation.
///
/// `y = g₁ − g₀` is the gradient change and `d = x₁ − x₀` the step taken.
///
/// # Errors
/// - [`OptError::CurvatureConditionViolated`] under `Strict` when `yᵀd` or
///   `dᵀ B₀ d` is non-finite or not strictly positive. The offending value is
///   reported.
pub fn bfgs_update(
    b0: &Hessian, y: &Array1<f64>, d: &Array1<f64>, policy: CurvaturePolicy, iteration: u64,
) -> OptResult<Hessian> {
    let b0d = b0.dot(d);
    let db0 = d.dot(b0);
    let yd = y.dot(d);
    let db0d = d.dot(&b0d);

    if policy.is_strict() {
        for curvature in [yd, db0d] {
            if !curvature.is_finite() || curvature <= 0.0 {
                return Err(OptError::CurvatureConditionViolated { iteration, curvature });
            }
        }
    }

    Ok(Hessian::from_shape_fn(b0.raw_dim(), |(i, j)| {
        b0[[i, j]] + y[i] * y[j] / yd - b0d[i] * db0[j] / db0d
    }))
}

// ---- Helper methods ----

/// Copy an `ndarray` matrix into a preallocated `DMatrix` of equal shape.
fn fill_dmatrix(src: &Hessian, dst: &mut DMatrix<f64>) {
    for ((i, j), &v) in src.indexed_iter() {
        dst[(i, j)] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Direction solves for identity, SPD and indefinite matrices.
    // - Singular matrices under both curvature policies.
    // - The secant property and symmetry of the update.
    // - Curvature rejection under `Strict`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // With the identity the direction is the negative gradient.
    //
    // Given
    // -----
    // - `B = I`, `g = (2, −4)`.
    //
    // Expect
    // ------
    // - `p = (−2, 4)` exactly.
    fn identity_gives_steepest_descent() {
        let p = descent_direction(&Hessian::eye(2), &array![2.0, -4.0], CurvaturePolicy::Strict, 0)
            .unwrap();
        assert_eq!(p, array![-2.0, 4.0]);
    }

    #[test]
    // Purpose
    // -------
    // SPD and indefinite (but nonsingular) systems are both solved.
    //
    // Given
    // -----
    // - SPD `[[4, 1], [1, 3]]` and indefinite `[[1, 2], [2, 1]]`.
    //
    // Expect
    // ------
    // - `B p = −g` holds to `1e-12`.
    fn spd_and_indefinite_systems_are_solved() {
        let g = array![1.0, -2.0];
        for b in [array![[4.0, 1.0], [1.0, 3.0]], array![[1.0, 2.0], [2.0, 1.0]]] {
            let p = descent_direction(&b, &g, CurvaturePolicy::Strict, 0).unwrap();
            let residual = b.dot(&p) + &g;
            for r in residual.iter() {
                assert_abs_diff_eq!(*r, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // A singular matrix is an error under `Strict` and a `NaN` direction under
    // `Permissive`.
    //
    // Given
    // -----
    // - The zero matrix.
    //
    // Expect
    // ------
    // - `SingularHessianApprox { iteration: 3 }` and an all-`NaN` vector.
    fn singular_matrix_depends_on_policy() {
        let b = Hessian::zeros((2, 2));
        let g = array![1.0, 1.0];

        assert_eq!(
            descent_direction(&b, &g, CurvaturePolicy::Strict, 3),
            Err(OptError::SingularHessianApprox { iteration: 3 })
        );
        let p = descent_direction(&b, &g, CurvaturePolicy::Permissive, 3).unwrap();
        assert!(p.iter().all(|v| v.is_nan()));
    }

    #[test]
    // Purpose
    // -------
    // The updated matrix satisfies the secant equation and stays symmetric.
    //
    // Given
    // -----
    // - `B₀ = I`, `d = (1, 0.5)`, `y = (2, 0.3)` so `yᵀd = 2.15 > 0`.
    //
    // Expect
    // ------
    // - `B₁ d = y` and `B₁ = B₁ᵀ` to `1e-12`.
    fn update_satisfies_secant_equation() {
        let d = array![1.0, 0.5];
        let y = array![2.0, 0.3];

        let b1 = bfgs_update(&Hessian::eye(2), &y, &d, CurvaturePolicy::Strict, 0).unwrap();

        let b1d = b1.dot(&d);
        assert_abs_diff_eq!(b1d[0], y[0], epsilon = 1e-12);
        assert_abs_diff_eq!(b1d[1], y[1], epsilon = 1e-12);
        assert_abs_diff_eq!(b1[[0, 1]], b1[[1, 0]], epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Non-positive curvature is rejected under `Strict` and passed through
    // under `Permissive`.
    //
    // Given
    // -----
    // - `y = 0` (an affine objective), so `yᵀd = 0`.
    //
    // Expect
    // ------
    // - `CurvatureConditionViolated { curvature: 0 }` under `Strict`.
    // - A matrix with non-finite entries under `Permissive`.
    fn zero_curvature_depends_on_policy() {
        let d = array![1.0, 1.0];
        let y = array![0.0, 0.0];

        match bfgs_update(&Hessian::eye(2), &y, &d, CurvaturePolicy::Strict, 1) {
            Err(OptError::CurvatureConditionViolated { iteration, curvature }) => {
                assert_eq!(iteration, 1);
                assert_eq!(curvature, 0.0);
            }
            other => panic!("Expected CurvatureConditionViolated, got {other:?}"),
        }
        let b1 = bfgs_update(&Hessian::eye(2), &y, &d, CurvaturePolicy::Permissive, 1).unwrap();
        assert!(b1.iter().any(|v| !v.is_finite()));
    }
}
