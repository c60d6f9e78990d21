//! Walk weight over a computed ordering
//!
//! The metric reads the two leading vertices of a topological order and
//! sums every parallel edge between them. It is not a longest-path
//! search; the reported number is the direct connection weight of the
//! ordering's front pair, which is what the driver's `Total weight`
//! line has always meant.

use crate::error::{DagwalkError, Result};

use super::digraph::{Digraph, VertexId};

impl Digraph {
    /// Sum of the weights of every edge `order[0] → order[1]`.
    ///
    /// Returns 0 when the leading pair is not directly connected. Fails
    /// with [`DagwalkError::InsufficientVertices`] when the order holds
    /// fewer than two vertices. Accumulates in `i64`: the worst case of
    /// 100000 parallel edges at extreme `i32` weights stays in range.
    pub fn walking_distance(&self, order: &[VertexId]) -> Result<i64> {
        if order.len() < 2 {
            return Err(DagwalkError::InsufficientVertices { found: order.len() });
        }
        let (first, second) = (order[0], order[1]);

        let total = self
            .edges_from(first)
            .iter()
            .filter(|edge| edge.to == second)
            .map(|edge| i64::from(edge.weight))
            .sum();

        Ok(total)
    }
}
