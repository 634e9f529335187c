//! Algebraic solver: the Perron vector by eigen-decomposition.
//!
//! # Overview
//!
//! For a strictly positive column-stochastic matrix, the Perron–Frobenius
//! theorem guarantees a unique dominant eigenvalue equal to 1 whose
//! eigenvector is strictly positive. Scaled to unit sum, that eigenvector
//! is the stationary distribution.
//!
//! # Algorithm
//!
//! 1. Verify every entry is strictly positive (the theorem's hypothesis).
//! 2. Compute the complex eigenvalue spectrum and count eigenvalues within
//!    [`UNIT_EIGEN_EPS`] of `1 + 0i`. Exactly one must match — none means
//!    the matrix is not (numerically) column-stochastic, several means the
//!    Perron eigenvalue is ambiguous, and both are reported as
//!    [`RankError::NoUnitEigenvalue`] rather than silently picking one.
//! 3. Extract the eigenvector for eigenvalue 1 as the null vector of
//!    `M - I`: the right-singular vector of the smallest singular value.
//! 4. Divide by the entry sum so the result sums to 1 (this also fixes
//!    the arbitrary sign the SVD returns).

use nalgebra::{Complex, DMatrix, DVector, Normed};
use tracing::instrument;

use crate::error::RankError;

/// Matching radius around `1 + 0i` when selecting the Perron eigenvalue.
/// Exact floating equality is fragile after a dense eigen-decomposition.
pub const UNIT_EIGEN_EPS: f64 = 1e-6;

/// Compute the Perron vector (unit-sum dominant eigenvector) of a strictly
/// positive column-stochastic matrix.
///
/// # Errors
///
/// - [`RankError::EmptyGraph`] for a 0×0 matrix.
/// - [`RankError::Precondition`] if any entry is ≤ 0.
/// - [`RankError::NoUnitEigenvalue`] if the number of eigenvalues within
///   [`UNIT_EIGEN_EPS`] of 1 is not exactly one.
#[instrument(skip(m))]
pub fn perron_vector(m: &DMatrix<f64>) -> Result<DVector<f64>, RankError> {
    let n = m.nrows();
    if n == 0 {
        return Err(RankError::EmptyGraph);
    }
    if m.iter().any(|&x| x <= 0.0) {
        return Err(RankError::Precondition(
            "matrix must be strictly positive in every entry",
        ));
    }

    let unit = Complex::new(1.0, 0.0);
    let found = m
        .complex_eigenvalues()
        .iter()
        .filter(|&&lambda| (lambda - unit).norm() <= UNIT_EIGEN_EPS)
        .count();
    if found != 1 {
        return Err(RankError::NoUnitEigenvalue { found });
    }

    // The eigenvector for eigenvalue 1 spans the null space of M - I.
    let shifted = m - DMatrix::identity(n, n);
    let svd = shifted.svd(false, true);
    let v_t = svd
        .v_t
        .ok_or(RankError::Internal("SVD returned no right-singular vectors"))?;

    let mut smallest = 0;
    for (k, sigma) in svd.singular_values.iter().enumerate() {
        if *sigma < svd.singular_values[smallest] {
            smallest = k;
        }
    }

    let vector: DVector<f64> = v_t.row(smallest).transpose();
    let sum = vector.sum();
    if !sum.is_finite() || sum.abs() < f64::EPSILON {
        return Err(RankError::Internal("null vector of M - I has zero sum"));
    }
    Ok(vector / sum)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::normalize::transition_matrix;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_matrix_is_rejected() {
        let err = perron_vector(&DMatrix::zeros(0, 0)).unwrap_err();
        assert_eq!(err, RankError::EmptyGraph);
    }

    #[test]
    fn zero_entry_violates_precondition() {
        let m = DMatrix::from_row_slice(2, 2, &[0.0, 0.5, 1.0, 0.5]);
        assert!(matches!(
            perron_vector(&m),
            Err(RankError::Precondition(_))
        ));
    }

    #[test]
    fn non_stochastic_matrix_has_no_unit_eigenvalue() {
        // Eigenvalues are 0.75 and 0 — neither is near 1.
        let m = DMatrix::from_row_slice(2, 2, &[0.5, 0.5, 0.25, 0.25]);
        assert_eq!(
            perron_vector(&m).unwrap_err(),
            RankError::NoUnitEigenvalue { found: 0 }
        );
    }

    #[test]
    fn uniform_matrix_gives_uniform_vector() {
        let m = DMatrix::from_element(4, 4, 0.25);
        let v = perron_vector(&m).unwrap();
        for x in v.iter() {
            assert!((x - 0.25).abs() < EPS, "expected 0.25, got {x}");
        }
    }

    #[test]
    fn single_vertex_gets_all_mass() {
        let m = DMatrix::from_element(1, 1, 1.0);
        let v = perron_vector(&m).unwrap();
        assert!((v[0] - 1.0).abs() < EPS);
    }

    #[test]
    fn dangling_pair_stationary_distribution() {
        // Transition matrix [[0.075, 0.5], [0.925, 0.5]]: solving
        // pi = M pi with unit sum gives pi_a = 0.5 / 1.425.
        let m = DMatrix::from_row_slice(2, 2, &[0.075, 0.5, 0.925, 0.5]);
        let v = perron_vector(&m).unwrap();
        let expected_a = 0.5 / 1.425;
        assert!((v[0] - expected_a).abs() < 1e-9, "pi_a = {}", v[0]);
        assert!((v[1] - (1.0 - expected_a)).abs() < 1e-9);
    }

    #[test]
    fn vector_sums_to_one_and_is_positive() {
        let adj = DMatrix::from_row_slice(
            3,
            3,
            &[0.0, 2.0, 1.0, 1.0, 0.0, 4.0, 3.0, 1.0, 0.0],
        );
        let m = transition_matrix(adj, 0.85).unwrap();
        let v = perron_vector(&m).unwrap();
        assert!((v.sum() - 1.0).abs() < EPS);
        assert!(v.iter().all(|&x| x > 0.0));
    }
}
