//! Dense weighted adjacency matrix construction.
//!
//! # Overview
//!
//! Converts a [`WeightedDigraph`] into a dense `DMatrix<f64>` plus a
//! [`VertexOrder`] fixing the row/column index of every vertex. Entry
//! `(i, j)` holds the weight of the edge from the vertex at index `j` to
//! the vertex at index `i` — column `j` is vertex `j`'s outgoing weights.
//! Absent edges are 0.
//!
//! Complexity is O(|V| + |E|): the vertex→index map is precomputed once,
//! so per-edge index lookup is O(1).

use std::collections::HashMap;
use std::hash::Hash;

use nalgebra::DMatrix;
use tracing::instrument;

use crate::error::RankError;
use crate::graph::adjacency::WeightedDigraph;

// ---------------------------------------------------------------------------
// VertexOrder
// ---------------------------------------------------------------------------

/// A deterministic total ordering of the vertex set, fixed once per
/// computation.
///
/// Vertices are sorted, so the ordering (and therefore the returned
/// distribution) is independent of how the graph enumerates them. The
/// index map answers vertex→index in O(1).
#[derive(Debug, Clone)]
pub struct VertexOrder<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
}

impl<V> VertexOrder<V>
where
    V: Clone + Eq + Hash + Ord,
{
    /// Sort (and dedupe) an enumeration of vertices into a fixed order.
    #[must_use]
    pub fn new(mut vertices: Vec<V>) -> Self {
        vertices.sort_unstable();
        vertices.dedup();
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self { vertices, index }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The matrix index of `v`, if it is in the vertex set.
    #[must_use]
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// Iterate vertices in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }
}

impl VertexOrder<usize> {
    /// The identity ordering `0..n`, used when the caller supplies a
    /// matrix directly and vertices are just indices.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }
}

impl<'a, V> IntoIterator for &'a VertexOrder<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

// ---------------------------------------------------------------------------
// Matrix construction
// ---------------------------------------------------------------------------

/// Build the dense weighted adjacency matrix and vertex ordering for a graph.
///
/// For each source `s` at index `j` and declared target `t` at index `i`,
/// sets `M[(i, j)] = weight(s, t)`.
///
/// # Errors
///
/// - [`RankError::MissingWeight`] if a declared edge has no weight entry.
/// - [`RankError::UnknownTarget`] if a declared target is missing from the
///   vertex enumeration.
#[instrument(skip(graph))]
pub fn adjacency_matrix<G: WeightedDigraph>(
    graph: &G,
) -> Result<(DMatrix<f64>, VertexOrder<G::Vertex>), RankError> {
    let order = VertexOrder::new(graph.vertices());
    let n = order.len();
    let mut m = DMatrix::zeros(n, n);

    for (j, source) in order.iter().enumerate() {
        for target in graph.targets(source) {
            let i = order.index_of(&target).ok_or_else(|| RankError::UnknownTarget {
                source: format!("{source:?}"),
                target: format!("{target:?}"),
            })?;
            let w = graph
                .weight(source, &target)
                .ok_or_else(|| RankError::MissingWeight {
                    source: format!("{source:?}"),
                    target: format!("{target:?}"),
                })?;
            m[(i, j)] = w;
        }
    }

    Ok((m, order))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
