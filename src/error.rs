//! Error taxonomy for the ranking pipeline.
//!
//! Every failure mode of the engine maps to one [`RankError`] variant. All
//! failures propagate to the caller; nothing is recovered or retried inside
//! the library, since the computation is deterministic — a failure on given
//! inputs will recur on retry.

/// Errors produced by the ranking pipeline.
// `Display`/`Error` are written by hand (not `thiserror::Error`) because
// `MissingWeight`/`UnknownTarget` carry a plain-`String` field named
// `source`, which the derive would insist on exposing as `source()`.
#[derive(Debug, Clone, PartialEq)]
pub enum RankError {
    /// Solve method string was not `algebraic` or `iterative`.
    InvalidMethod(String),

    /// The graph has zero vertices; no distribution exists.
    EmptyGraph,

    /// Damping factor outside `[0, 1]` (or non-finite).
    InvalidDamping(f64),

    /// Convergence tolerance was not a positive finite number.
    InvalidTolerance(f64),

    /// The algebraic solver was given a matrix that is not strictly
    /// positive in every entry.
    Precondition(&'static str),

    /// The algebraic solver could not select a unique eigenvalue equal
    /// to 1 within epsilon. `found` is how many eigenvalues matched:
    /// 0 means the matrix is not column-stochastic (or numerically far
    /// from it), 2+ means the Perron eigenvalue is ambiguous.
    NoUnitEigenvalue { found: usize },

    /// A vector or matrix dimension disagrees with the vertex count.
    Dimension { expected: usize, got: usize },

    /// An edge declared by the graph's target enumeration has no weight
    /// entry. Endpoints are captured via `Debug` formatting.
    MissingWeight { source: String, target: String },

    /// A declared edge target is absent from the graph's vertex
    /// enumeration, so it has no matrix index.
    UnknownTarget { source: String, target: String },

    /// The power method exceeded its iteration bound without the distance
    /// between successive vectors dropping to the tolerance.
    Convergence { iterations: usize, delta: f64 },

    /// A dense-linear-algebra routine returned an unexpected shape.
    Internal(&'static str),
}

impl std::fmt::Display for RankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMethod(method) => write!(
                f,
                "unknown solve method {method:?} (expected \"algebraic\" or \"iterative\")"
            ),
            Self::EmptyGraph => write!(f, "graph has no vertices"),
            Self::InvalidDamping(d) => write!(f, "damping factor {d} outside [0, 1]"),
            Self::InvalidTolerance(t) => write!(f, "tolerance {t} must be positive and finite"),
            Self::Precondition(msg) => {
                write!(f, "algebraic solver precondition violated: {msg}")
            }
            Self::NoUnitEigenvalue { found } => {
                write!(f, "expected exactly one eigenvalue equal to 1, found {found}")
            }
            Self::Dimension { expected, got } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::MissingWeight { source, target } => {
                write!(f, "edge {source} -> {target} has no weight entry")
            }
            Self::UnknownTarget { source, target } => {
                write!(f, "edge target {target} (from {source}) is not in the vertex set")
            }
            Self::Convergence { iterations, delta } => write!(
                f,
                "power iteration did not converge after {iterations} iterations (last delta {delta:.3e})"
            ),
            Self::Internal(msg) => write!(f, "internal linear algebra failure: {msg}"),
        }
    }
}

impl std::error::Error for RankError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_edge() {
        let err = RankError::MissingWeight {
            source: "\"a\"".to_string(),
            target: "\"b\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"a\""), "message should name the source: {msg}");
        assert!(msg.contains("\"b\""), "message should name the target: {msg}");
    }

    #[test]
    fn display_reports_iteration_bound() {
        let err = RankError::Convergence {
            iterations: 100,
            delta: 0.5,
        };
        assert!(err.to_string().contains("100"));
    }
}
