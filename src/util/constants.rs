//! Centralized Constants
//!
//! Input bounds and line-format facts live here so the run loop, the
//! parser, and the tests agree on a single source of truth.

// ═══════════════════════════════════════════════════════════════
// Case Bounds
// ═══════════════════════════════════════════════════════════════

/// Smallest vertex count a case header may declare.
///
/// One vertex cannot produce a walk, so the driver treats anything
/// below this as the end-of-input sentinel.
pub const MIN_VERTEX_COUNT: usize = 2;

/// Largest vertex count a case header may declare.
pub const MAX_VERTEX_COUNT: usize = 10_000;

/// Smallest edge count a case header may declare.
pub const MIN_EDGE_COUNT: usize = 1;

/// Largest edge count a case header may declare.
pub const MAX_EDGE_COUNT: usize = 100_000;

// ═══════════════════════════════════════════════════════════════
// Line Format
// ═══════════════════════════════════════════════════════════════

/// Fields in a case header line: `<vertices> <edges>`.
pub const HEADER_FIELDS: usize = 2;

/// Fields in an edge line: `<from> <to> <weight>`.
pub const EDGE_FIELDS: usize = 3;
