//! Digraph - directed weighted graph over dense vertex indices
//!
//! Storage decisions:
//! - Vec-indexed adjacency lists; vertex ids are dense `0..V`
//! - SmallVec for stack-allocated small edge lists (0-4 items)
//! - Parallel edges between the same pair are kept, in insertion order
//!
//! Every vertex index entering the graph passes a bounds check, so an
//! adjacency list can only hold destinations that exist.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{DagwalkError, Result};

/// Stack-allocated edge list; most vertices have 0-4 outgoing edges
pub type EdgeVec = SmallVec<[Edge; 4]>;

/// Validated vertex index
///
/// Only bounds-checked paths construct one, so holding a `VertexId`
/// obtained from a graph implies its index is below that graph's
/// vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    fn checked(index: usize, vertex_count: usize) -> Result<Self> {
        if index >= vertex_count {
            return Err(DagwalkError::InvalidVertexReference {
                vertex: index as i64,
                vertex_count,
            });
        }
        Ok(Self(index))
    }

    /// Raw index, suitable for slice access
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One directed weighted edge, stored in its source's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Destination vertex, validated at insertion
    pub to: VertexId,
    /// Edge weight; negative weights are allowed
    pub weight: i32,
}

/// Directed weighted graph with a vertex count fixed at construction
///
/// Two-phase lifecycle: edges are appended while building (`&mut self`),
/// then the graph is queried read-only (`&self`). Nothing removes
/// vertices or edges.
#[derive(Debug, Clone)]
pub struct Digraph {
    /// Outgoing edges per vertex, in insertion order
    adjacency: Vec<EdgeVec>,
    /// Total number of inserted edges, parallel edges included
    edge_count: usize,
}

impl Digraph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![EdgeVec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Number of vertices, fixed at construction
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of inserted edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Validated id for a raw index
    pub fn vertex(&self, index: usize) -> Result<VertexId> {
        VertexId::checked(index, self.vertex_count())
    }

    /// Append a directed edge `from → to` with the given weight.
    ///
    /// Both endpoints are validated against the vertex count before
    /// anything is stored, so a failed insertion leaves the graph
    /// unchanged. A repeated `(from, to)` pair adds a parallel edge.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i32) -> Result<()> {
        let from = self.vertex(from)?;
        let to = self.vertex(to)?;
        self.adjacency[from.index()].push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `v`, in insertion order
    #[inline]
    pub fn edges_from(&self, v: VertexId) -> &[Edge] {
        static EMPTY: &[Edge] = &[];
        self.adjacency.get(v.index()).map_or(EMPTY, SmallVec::as_slice)
    }

    /// All vertex ids, in index order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertex_count()).map(VertexId)
    }
}
