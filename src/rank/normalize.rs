//! Transition matrix construction: dangling repair, column normalization,
//! damping blend.
//!
//! # Overview
//!
//! Turns a non-negative weighted adjacency matrix into the transition
//! matrix of the random walk with teleportation:
//!
//! 1. **Dangling repair** — every column whose sum is exactly 0 (a vertex
//!    with no outgoing edges) is replaced with all-ones. A walker at a
//!    sink teleports uniformly to every vertex, including itself, rather
//!    than vanishing.
//! 2. **Column normalization** — each column is divided by its (possibly
//!    repaired) sum, giving a column-stochastic matrix.
//! 3. **Damping blend** — `M_final = d * M_norm + ((1 - d) / n) * J` with
//!    `J` the all-ones matrix.
//!
//! For `d < 1` every entry of the result is strictly positive, which is
//! what the Perron–Frobenius theorem needs for a unique dominant unit
//! eigenvalue. At `d == 1` structural zeros survive and the algebraic
//! solver will refuse the matrix.

use nalgebra::DMatrix;
use tracing::{debug, instrument};

use crate::error::RankError;

/// Build the blended transition matrix from a non-negative adjacency matrix.
///
/// # Errors
///
/// - [`RankError::EmptyGraph`] for a 0×0 matrix.
/// - [`RankError::Dimension`] for a non-square matrix.
/// - [`RankError::InvalidDamping`] if `damping` is outside `[0, 1]` or
///   non-finite.
#[instrument(skip(m))]
pub fn transition_matrix(mut m: DMatrix<f64>, damping: f64) -> Result<DMatrix<f64>, RankError> {
    let n = m.nrows();
    if n == 0 {
        return Err(RankError::EmptyGraph);
    }
    if m.ncols() != n {
        return Err(RankError::Dimension {
            expected: n,
            got: m.ncols(),
        });
    }
    if !damping.is_finite() || !(0.0..=1.0).contains(&damping) {
        return Err(RankError::InvalidDamping(damping));
    }

    let mut repaired = 0usize;
    for j in 0..n {
        let sum: f64 = m.column(j).sum();
        if sum == 0.0 {
            m.column_mut(j).fill(1.0);
            repaired += 1;
        }
    }
    if repaired > 0 {
        debug!(repaired, "replaced dangling columns with uniform weights");
    }

    for j in 0..n {
        let sum: f64 = m.column(j).sum();
        for i in 0..n {
            m[(i, j)] /= sum;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let teleport = (1.0 - damping) / n as f64;
    Ok(m.map(|x| damping * x + teleport))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
