//! Mapping a solution vector back to a vertex-labeled distribution.

use std::collections::HashMap;
use std::hash::Hash;

use nalgebra::DVector;

use crate::error::RankError;
use crate::graph::matrix::VertexOrder;

/// Pair each solution entry with the vertex at the same index.
///
/// # Errors
///
/// [`RankError::Dimension`] if the vector length differs from the vertex
/// count.
pub fn distribution<V>(
    vector: &DVector<f64>,
    order: &VertexOrder<V>,
) -> Result<HashMap<V, f64>, RankError>
where
    V: Clone + Eq + Hash + Ord,
{
    if vector.len() != order.len() {
        return Err(RankError::Dimension {
            expected: order.len(),
            got: vector.len(),
        });
    }
    Ok(order
        .iter()
        .cloned()
        .zip(vector.iter().copied())
        .collect())
}
