//! The graph seam: the [`WeightedDigraph`] trait and its shipped impls.
//!
//! # Overview
//!
//! [`WeightedDigraph`] is the only thing the engine knows about graph
//! storage. It exposes vertex enumeration, per-vertex outgoing targets,
//! and per-edge weight lookup. Weights are assumed non-negative; the
//! engine does not enforce this, and negative weights yield undefined
//! ranking semantics.
//!
//! Self-loops pass through: a self-loop weight contributes to that
//! vertex's own matrix column like any other edge.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;

use petgraph::graph::{DiGraph, IndexType};

/// A finite weighted directed graph, as seen by the ranking engine.
///
/// `vertices()` may enumerate in any order — the engine sorts before
/// assigning matrix indices. `targets()` must only return vertices that
/// also appear in `vertices()`, and `weight()` must return `Some` for
/// every `(source, target)` pair that `targets()` declares; a `None`
/// there surfaces as [`RankError::MissingWeight`](crate::RankError::MissingWeight).
pub trait WeightedDigraph {
    /// Vertex identifier. `Ord` fixes a deterministic matrix ordering;
    /// `Debug` lets errors name the offending edge.
    type Vertex: Clone + Eq + Hash + Ord + fmt::Debug;

    /// Enumerate the vertex set.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Enumerate the targets reachable from `source` by one outgoing edge.
    fn targets(&self, source: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Weight of the edge `source -> target`, or `None` if absent.
    fn weight(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<f64>;
}

// ---------------------------------------------------------------------------
// AdjacencyList
// ---------------------------------------------------------------------------

/// A map-backed weighted adjacency list.
///
/// Built from an adjacency map (`vertex -> set of targets`) and a separate
/// weight map (`(source, target) -> weight`). The vertex set is the union
/// of every key and every target, so a vertex that only ever appears as a
/// target still gets a (dangling) entry.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList<V: Ord> {
    targets: HashMap<V, BTreeSet<V>>,
    weights: HashMap<(V, V), f64>,
}

impl<V> AdjacencyList<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    /// Build from an adjacency map and a weight map.
    ///
    /// Targets mentioned in `adjacency` but absent as keys are added with
    /// empty target sets. Consistency between the two maps is not checked
    /// here — a declared edge with no weight entry fails later, at matrix
    /// build time.
    #[must_use]
    pub fn new(adjacency: HashMap<V, BTreeSet<V>>, weights: HashMap<(V, V), f64>) -> Self {
        let mut targets = adjacency;
        let mentioned: Vec<V> = targets
            .values()
            .flat_map(|set| set.iter().cloned())
            .collect();
        for v in mentioned {
            targets.entry(v).or_default();
        }
        Self { targets, weights }
    }

    /// Build from explicit `(source, target, weight)` triples.
    #[must_use]
    pub fn from_edges(edges: &[(V, V, f64)]) -> Self {
        let mut adjacency: HashMap<V, BTreeSet<V>> = HashMap::new();
        let mut weights = HashMap::new();
        for (s, t, w) in edges {
            adjacency.entry(s.clone()).or_default().insert(t.clone());
            weights.insert((s.clone(), t.clone()), *w);
        }
        Self::new(adjacency, weights)
    }

    /// Add an isolated vertex (no outgoing or incoming edges yet).
    pub fn add_vertex(&mut self, v: V) {
        self.targets.entry(v).or_default();
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.targets.len()
    }
}

impl<V> WeightedDigraph for AdjacencyList<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type Vertex = V;

    fn vertices(&self) -> Vec<V> {
        self.targets.keys().cloned().collect()
    }

    fn targets(&self, source: &V) -> Vec<V> {
        self.targets
            .get(source)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn weight(&self, source: &V, target: &V) -> Option<f64> {
        self.weights
            .get(&(source.clone(), target.clone()))
            .copied()
    }
}

// ---------------------------------------------------------------------------
// petgraph interop
// ---------------------------------------------------------------------------

/// petgraph digraphs with `f64` edge weights feed the engine directly.
///
/// Node weights act as vertex identifiers and must be unique; with
/// duplicate labels, lookups resolve to the first matching node. Parallel
/// edges are not supported — `weight` returns the first edge found.
impl<V, Ix> WeightedDigraph for DiGraph<V, f64, Ix>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
    Ix: IndexType,
{
    type Vertex = V;

    fn vertices(&self) -> Vec<V> {
        self.node_weights().cloned().collect()
    }

    fn targets(&self, source: &V) -> Vec<V> {
        let Some(idx) = self.node_indices().find(|&i| &self[i] == source) else {
            return Vec::new();
        };
        let mut out: Vec<V> = self.neighbors(idx).map(|t| self[t].clone()).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    fn weight(&self, source: &V, target: &V) -> Option<f64> {
        let s = self.node_indices().find(|&i| &self[i] == source)?;
        let t = self.node_indices().find(|&i| &self[i] == target)?;
        let edge = self.find_edge(s, t)?;
        self.edge_weight(edge).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_unions_sources_and_targets() {
        let g = AdjacencyList::from_edges(&[("a", "b", 1.0), ("b", "c", 2.0)]);
        let mut verts = g.vertices();
        verts.sort_unstable();
        assert_eq!(verts, vec!["a", "b", "c"]);
    }

    #[test]
    fn target_only_vertex_is_dangling() {
        let g = AdjacencyList::from_edges(&[("a", "b", 1.0)]);
        assert!(g.targets(&"b").is_empty(), "b has no outgoing edges");
    }

    #[test]
    fn weight_lookup_roundtrips() {
        let g = AdjacencyList::from_edges(&[("a", "b", 2.5)]);
        assert_eq!(g.weight(&"a", &"b"), Some(2.5));
        assert_eq!(g.weight(&"b", &"a"), None);
    }

    #[test]
    fn new_does_not_require_weights_upfront() {
        // A declared edge with no weight entry is representable; the
        // failure belongs to matrix construction, not to the adapter.
        let mut adjacency = HashMap::new();
        adjacency.insert("a", BTreeSet::from(["b"]));
        let g = AdjacencyList::new(adjacency, HashMap::new());
        assert_eq!(g.targets(&"a"), vec!["b"]);
        assert_eq!(g.weight(&"a", &"b"), None);
    }

    #[test]
    fn add_vertex_inserts_isolated_node() {
        let mut g = AdjacencyList::from_edges(&[("a", "b", 1.0)]);
        g.add_vertex("z");
        assert_eq!(g.vertex_count(), 3);
        assert!(g.targets(&"z").is_empty());
    }

    #[test]
    fn self_loop_is_a_normal_edge() {
        let g = AdjacencyList::from_edges(&[("a", "a", 3.0)]);
        assert_eq!(g.targets(&"a"), vec!["a"]);
        assert_eq!(g.weight(&"a", &"a"), Some(3.0));
    }

    #[test]
    fn petgraph_digraph_exposes_weights() {
        let mut g: DiGraph<&str, f64> = DiGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        g.add_edge(a, b, 4.0);

        let mut verts = WeightedDigraph::vertices(&g);
        verts.sort_unstable();
        assert_eq!(verts, vec!["a", "b"]);
        assert_eq!(WeightedDigraph::targets(&g, &"a"), vec!["b"]);
        assert_eq!(WeightedDigraph::weight(&g, &"a", &"b"), Some(4.0));
        assert_eq!(WeightedDigraph::weight(&g, &"b", &"a"), None);
    }
}
