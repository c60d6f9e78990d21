//! Graph Module - directed weighted graph and its analyses
//!
//! Contains the graph representation and the two operations the driver
//! runs on it:
//! - `digraph`: adjacency-list storage with validated vertex ids
//! - `topo`: iterative cycle detection and topological ordering
//! - `walk`: the walk-weight metric over a computed order
//!
//! A `Digraph` is mutable only while edges are inserted; every
//! analysis takes `&self`.

mod digraph;
mod topo;
mod walk;

// Re-export public types
pub use digraph::{Digraph, Edge, VertexId};
