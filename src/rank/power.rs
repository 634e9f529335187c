//! Iterative solver: power iteration with a convergence tolerance.
//!
//! # Overview
//!
//! Repeatedly applies the transition matrix to a probability vector. For a
//! strictly positive column-stochastic matrix the sequence converges to
//! the unique Perron eigenvector regardless of the (positive) starting
//! vector; the rate is governed by the subdominant-to-dominant eigenvalue
//! ratio.
//!
//! The loop is bounded: exceeding `max_iter` without the Euclidean
//! distance between successive vectors dropping to the tolerance fails
//! with [`RankError::Convergence`] instead of spinning forever on
//! floating-point noise.

use nalgebra::{DMatrix, DVector};
use tracing::{debug, instrument};

use crate::error::RankError;

/// Converged power-iteration output.
#[derive(Debug, Clone)]
pub struct PowerSolution {
    /// Unit-sum stationary vector.
    pub vector: DVector<f64>,
    /// Iterations performed before the tolerance was met.
    pub iterations: usize,
}

/// Run power iteration on a transition matrix.
///
/// `init` is an optional starting probability vector; `None` starts from
/// the uniform `1/n` vector. After each multiplication the Euclidean
/// distance between the previous and new vector is compared against
/// `tolerance`; on convergence the vector is scaled to unit sum.
///
/// # Errors
///
/// - [`RankError::EmptyGraph`] for a 0×0 matrix.
/// - [`RankError::InvalidTolerance`] if `tolerance` is not positive and
///   finite.
/// - [`RankError::Dimension`] if `init` has the wrong length.
/// - [`RankError::Convergence`] if `max_iter` multiplications do not reach
///   the tolerance.
#[instrument(skip(m, init))]
pub fn power_iteration(
    m: &DMatrix<f64>,
    tolerance: f64,
    max_iter: usize,
    init: Option<DVector<f64>>,
) -> Result<PowerSolution, RankError> {
    let n = m.nrows();
    if n == 0 {
        return Err(RankError::EmptyGraph);
    }
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(RankError::InvalidTolerance(tolerance));
    }

    #[allow(clippy::cast_precision_loss)]
    let mut current = match init {
        Some(v) => {
            if v.len() != n {
                return Err(RankError::Dimension {
                    expected: n,
                    got: v.len(),
                });
            }
            v
        }
        None => DVector::from_element(n, 1.0 / n as f64),
    };

    let mut delta = f64::MAX;
    for iteration in 1..=max_iter {
        let next = m * &current;
        delta = (&next - &current).norm();
        current = next;

        if delta <= tolerance {
            debug!(iteration, delta, "power iteration converged");
            let sum = current.sum();
            return Ok(PowerSolution {
                vector: current / sum,
                iterations: iteration,
            });
        }
    }

    Err(RankError::Convergence {
        iterations: max_iter,
        delta,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dangling_pair() -> DMatrix<f64> {
        DMatrix::from_row_slice(2, 2, &[0.075, 0.5, 0.925, 0.5])
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let err = power_iteration(&DMatrix::zeros(0, 0), 1e-3, 100, None).unwrap_err();
        assert_eq!(err, RankError::EmptyGraph);
    }

    #[test]
    fn non_positive_tolerance_is_rejected() {
        for bad in [0.0, -1.0, f64::NAN] {
            assert!(
                matches!(
                    power_iteration(&dangling_pair(), bad, 100, None),
                    Err(RankError::InvalidTolerance(_))
                ),
                "tolerance {bad} should be rejected"
            );
        }
    }

    #[test]
    fn wrong_length_init_is_rejected() {
        let init = DVector::from_element(3, 1.0 / 3.0);
        let err = power_iteration(&dangling_pair(), 1e-3, 100, Some(init)).unwrap_err();
        assert_eq!(err, RankError::Dimension { expected: 2, got: 3 });
    }

    #[test]
    fn uniform_matrix_converges_in_one_step() {
        let m = DMatrix::from_element(3, 3, 1.0 / 3.0);
        let sol = power_iteration(&m, 1e-3, 100, None).unwrap();
        assert_eq!(sol.iterations, 1);
        for x in sol.vector.iter() {
            assert!((x - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn dangling_pair_stationary_distribution() {
        let sol = power_iteration(&dangling_pair(), 1e-10, 200, None).unwrap();
        let expected_a = 0.5 / 1.425;
        assert!(
            (sol.vector[0] - expected_a).abs() < 1e-6,
            "pi_a = {}",
            sol.vector[0]
        );
        assert!((sol.vector.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn result_is_independent_of_initial_vector() {
        let m = dangling_pair();
        let uniform = power_iteration(&m, 1e-10, 200, None).unwrap();
        let skewed = power_iteration(
            &m,
            1e-10,
            200,
            Some(DVector::from_vec(vec![0.99, 0.01])),
        )
        .unwrap();

        for (a, b) in uniform.vector.iter().zip(skewed.vector.iter()) {
            assert!((a - b).abs() < 1e-6, "initial vector leaked into result");
        }
    }

    #[test]
    fn iteration_bound_is_enforced() {
        let err = power_iteration(&dangling_pair(), 1e-15, 1, None).unwrap_err();
        match err {
            RankError::Convergence { iterations, delta } => {
                assert_eq!(iterations, 1);
                assert!(delta > 1e-15);
            }
            other => panic!("expected Convergence, got {other:?}"),
        }
    }
}
