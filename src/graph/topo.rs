//! Topological ordering and cycle detection
//!
//! Both traversals are iterative with explicit work stacks, so a graph
//! at the maximum supported vertex count cannot exhaust the call stack.
//!
//! Cycle detection uses the three-color scheme:
//! - White: unvisited
//! - Gray: on the current DFS path
//! - Black: fully processed
//!
//! The sort is the DFS finish-time construction: a vertex is emitted
//! once all its successors are finished, and the reversed emission
//! order is a topological order. Traversal starts vertices in index
//! order and scans neighbors in edge insertion order, so a fixed graph
//! always yields the same order.

use crate::error::{DagwalkError, Result};

use super::digraph::{Digraph, VertexId};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// DFS frame: a vertex and the index of its next unexamined edge
type Frame = (VertexId, usize);

impl Digraph {
    /// Detect cycles, reporting the first one found as a path.
    ///
    /// Returns `Ok(())` for acyclic graphs. A self-loop is a cycle of
    /// length one.
    pub fn detect_cycles(&self) -> Result<()> {
        let mut colors = vec![Color::White; self.vertex_count()];
        let mut frames: Vec<Frame> = Vec::new();
        // Gray vertices in path order, for cycle reporting
        let mut path: Vec<VertexId> = Vec::new();

        for start in self.vertices() {
            if colors[start.index()] != Color::White {
                continue;
            }
            colors[start.index()] = Color::Gray;
            frames.push((start, 0));
            path.push(start);

            while let Some((vertex, cursor)) = frames.last_mut() {
                let vertex = *vertex;
                match self.edges_from(vertex).get(*cursor) {
                    Some(edge) => {
                        *cursor += 1;
                        match colors[edge.to.index()] {
                            Color::Gray => return Err(cycle_error(&path, edge.to)),
                            Color::White => {
                                colors[edge.to.index()] = Color::Gray;
                                frames.push((edge.to, 0));
                                path.push(edge.to);
                            }
                            Color::Black => {}
                        }
                    }
                    None => {
                        colors[vertex.index()] = Color::Black;
                        frames.pop();
                        path.pop();
                    }
                }
            }
        }

        Ok(())
    }

    /// Compute the complete topological order.
    ///
    /// Runs cycle detection first; cyclic graphs fail with
    /// [`DagwalkError::CycleDetected`] before any ordering work. The
    /// first element of the result is the topological front of the
    /// graph. Repeated calls on an unmodified graph return the same
    /// order.
    pub fn topological_sort(&self) -> Result<Vec<VertexId>> {
        self.detect_cycles()?;

        let mut visited = vec![false; self.vertex_count()];
        let mut finished: Vec<VertexId> = Vec::with_capacity(self.vertex_count());
        let mut frames: Vec<Frame> = Vec::new();

        for start in self.vertices() {
            if visited[start.index()] {
                continue;
            }
            visited[start.index()] = true;
            frames.push((start, 0));

            while let Some((vertex, cursor)) = frames.last_mut() {
                let vertex = *vertex;
                match self.edges_from(vertex).get(*cursor) {
                    Some(edge) => {
                        *cursor += 1;
                        if !visited[edge.to.index()] {
                            visited[edge.to.index()] = true;
                            frames.push((edge.to, 0));
                        }
                    }
                    None => {
                        frames.pop();
                        finished.push(vertex);
                    }
                }
            }
        }

        // Last finished is topological-first
        finished.reverse();
        Ok(finished)
    }
}

/// Render the gray path from the point where `repeat` first appeared,
/// closed by `repeat` itself: `1 → 3 → 1`
fn cycle_error(path: &[VertexId], repeat: VertexId) -> DagwalkError {
    let start = path.iter().position(|&v| v == repeat).unwrap_or(0);
    let steps: Vec<String> = path[start..].iter().map(|v| v.to_string()).collect();
    DagwalkError::CycleDetected {
        cycle: format!("{} → {}", steps.join(" → "), repeat),
    }
}
