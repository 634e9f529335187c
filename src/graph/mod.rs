//! Graph inputs for the ranking engine.
//!
//! # Overview
//!
//! The engine consumes any type implementing [`WeightedDigraph`]: a finite
//! vertex set, per-vertex outgoing targets, and a weight lookup for each
//! declared edge. Two implementations ship with the crate:
//!
//! - [`AdjacencyList`] — a plain map-backed weighted adjacency list.
//! - `petgraph::graph::DiGraph<V, f64>` — petgraph digraphs with `f64`
//!   edge weights feed in directly.
//!
//! ## Pipeline
//!
//! ```text
//! WeightedDigraph (trait)
//!        ↓  matrix::adjacency_matrix()
//! (DMatrix<f64>, VertexOrder)   dense weighted adjacency + index mapping
//!        ↓  rank::normalize::transition_matrix()
//! column-stochastic, strictly positive transition matrix
//!        ↓  rank::{eigen, power}
//! stationary distribution
//! ```
//!
//! ## Determinism
//!
//! Vertex types require `Ord`. [`matrix::VertexOrder`] sorts the vertex
//! enumeration before assigning matrix indices, so the returned
//! distribution does not depend on the adapter's iteration order.

pub mod adjacency;
pub mod matrix;

pub use adjacency::{AdjacencyList, WeightedDigraph};
pub use matrix::{adjacency_matrix, VertexOrder};
