//! The ranking pipeline: configuration, solve-method selection, and the
//! public entry points.
//!
//! # Overview
//!
//! A single linear, stateless transformation chain:
//!
//! ```text
//! WeightedDigraph ── graph::adjacency_matrix ──┐
//! DMatrix<f64>    ── (identity vertex order) ──┤
//!                                              ↓
//!                       normalize::transition_matrix
//!                                              ↓
//!                eigen::perron_vector  or  power::power_iteration
//!                                              ↓
//!                         distribution::distribution
//! ```
//!
//! Every invocation owns all of its data and shares nothing, so
//! independent computations over independent graphs may run concurrently
//! without synchronization.

pub mod distribution;
pub mod eigen;
pub mod normalize;
pub mod power;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::RankError;
use crate::graph::adjacency::WeightedDigraph;
use crate::graph::matrix::{adjacency_matrix, VertexOrder};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which solver computes the stationary distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Closed-form eigen-decomposition (requires a strictly positive
    /// transition matrix, so effectively `damping < 1`).
    Algebraic,
    /// Power iteration with a convergence tolerance and iteration bound.
    Iterative,
}

impl FromStr for Method {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "algebraic" => Ok(Self::Algebraic),
            "iterative" => Ok(Self::Iterative),
            other => Err(RankError::InvalidMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algebraic => f.write_str("algebraic"),
            Self::Iterative => f.write_str("iterative"),
        }
    }
}

/// Configuration for a ranking computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor: probability of following an outgoing edge instead
    /// of teleporting to a uniformly random vertex. Default: 0.85.
    pub damping: f64,
    /// Convergence threshold for the iterative solver: stop when the
    /// Euclidean distance between successive vectors is at most this.
    /// Default: 1e-3. Unused by the algebraic solver.
    pub tolerance: f64,
    /// Iteration bound for the iterative solver. Default: 100.
    pub max_iter: usize,
    /// Solver selection. Default: [`Method::Iterative`].
    pub method: Method,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-3,
            max_iter: 100,
            method: Method::Iterative,
        }
    }
}

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Result of a ranking computation.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking<V: Eq + Hash> {
    /// Stationary distribution: vertex → probability. Values are ≥ 0 and
    /// sum to 1 within floating tolerance.
    pub distribution: HashMap<V, f64>,
    /// Which solver produced the distribution.
    pub method: Method,
    /// Iterations performed (0 for the algebraic solver).
    pub iterations: usize,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Rank the vertices of a weighted digraph.
///
/// Runs the full pipeline: dense adjacency matrix, dangling repair,
/// column normalization, damping blend, then the configured solver.
///
/// # Errors
///
/// Any [`RankError`] from the pipeline stages; see the module docs of
/// [`normalize`], [`eigen`] and [`power`] for the per-stage taxonomy.
#[instrument(skip(graph, config))]
pub fn rank<G: WeightedDigraph>(
    graph: &G,
    config: &RankConfig,
) -> Result<Ranking<G::Vertex>, RankError> {
    let (m, order) = adjacency_matrix(graph)?;
    solve(m, &order, config)
}

/// Rank from a caller-supplied square non-negative adjacency matrix.
///
/// Vertex identifiers are the identity ordering `0..n`. Column `j` must
/// hold the outgoing weights of vertex `j`.
///
/// # Errors
///
/// [`RankError::Dimension`] for a non-square matrix, plus any pipeline
/// error from [`rank`].
#[instrument(skip(matrix, config))]
pub fn rank_matrix(
    matrix: DMatrix<f64>,
    config: &RankConfig,
) -> Result<Ranking<usize>, RankError> {
    if matrix.nrows() != matrix.ncols() {
        return Err(RankError::Dimension {
            expected: matrix.nrows(),
            got: matrix.ncols(),
        });
    }
    let order = VertexOrder::identity(matrix.nrows());
    solve(matrix, &order, config)
}

fn solve<V>(
    m: DMatrix<f64>,
    order: &VertexOrder<V>,
    config: &RankConfig,
) -> Result<Ranking<V>, RankError>
where
    V: Clone + Eq + Hash + Ord,
{
    let transition = normalize::transition_matrix(m, config.damping)?;

    let (vector, iterations) = match config.method {
        Method::Algebraic => (eigen::perron_vector(&transition)?, 0),
        Method::Iterative => {
            let sol =
                power::power_iteration(&transition, config.tolerance, config.max_iter, None)?;
            (sol.vector, sol.iterations)
        }
    };

    let distribution = distribution::distribution(&vector, order)?;
    debug!(
        vertices = order.len(),
        method = %config.method,
        iterations,
        "computed stationary distribution"
    );

    Ok(Ranking {
        distribution,
        method: config.method,
        iterations,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
