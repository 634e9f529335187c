#![forbid(unsafe_code)]
//! Stationary-distribution centrality ranking for weighted digraphs.
//!
//! # Overview
//!
//! Ranks the vertices of an arbitrary weighted directed graph by the
//! long-run visitation probability of a random walker that follows an
//! outgoing edge with probability proportional to its weight, or
//! teleports to a uniformly random vertex with probability `1 - damping`
//! (the PageRank model).
//!
//! Two interchangeable solvers compute the stationary distribution of
//! the resulting transition matrix:
//!
//! - **Algebraic** — closed-form eigen-decomposition, selecting the
//!   Perron eigenvector for eigenvalue 1.
//! - **Iterative** — bounded power iteration with a convergence
//!   tolerance.
//!
//! # Example
//!
//! ```
//! use perron::{rank, AdjacencyList, RankConfig};
//!
//! let graph = AdjacencyList::from_edges(&[
//!     ("a", "b", 1.0),
//!     ("b", "c", 2.0),
//!     ("c", "a", 1.0),
//! ]);
//! let ranking = rank(&graph, &RankConfig::default())?;
//!
//! let total: f64 = ranking.distribution.values().sum();
//! assert!((total - 1.0).abs() < 1e-6);
//! # Ok::<(), perron::RankError>(())
//! ```
//!
//! petgraph digraphs with `f64` edge weights work directly:
//!
//! ```
//! use perron::{rank, RankConfig};
//! use petgraph::graph::DiGraph;
//!
//! let mut g: DiGraph<&str, f64> = DiGraph::new();
//! let a = g.add_node("a");
//! let b = g.add_node("b");
//! g.add_edge(a, b, 1.0);
//!
//! let ranking = rank(&g, &RankConfig::default())?;
//! assert!(ranking.distribution["b"] > ranking.distribution["a"]);
//! # Ok::<(), perron::RankError>(())
//! ```
//!
//! # Conventions
//!
//! - **Errors**: every failure is a typed [`RankError`] returned to the
//!   caller; the library never terminates the host process.
//! - **Logging**: `tracing` macros (`debug!`, `instrument`).
//! - **State**: none — each call is a pure computation over locally-owned
//!   data, safe for concurrent independent use.

pub mod error;
pub mod graph;
pub mod rank;

pub use error::RankError;
pub use graph::{adjacency_matrix, AdjacencyList, VertexOrder, WeightedDigraph};
pub use rank::{rank, rank_matrix, Method, RankConfig, Ranking};
