//! Dagwalk - topological sorting and walk weights for weighted digraphs
//!
//! Reads a stream of graph cases, orders each one topologically, and
//! reports the summed edge weight between the two leading vertices of
//! the order.
//!
//! ## Module Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DOMAIN MODEL                          │
//! │  graph/     Adjacency storage, ordering, walk metric         │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      APPLICATION LAYER                       │
//! │  input/     Case format parsing and stream alignment         │
//! │  runner/    Multi-case driver loop and rendering             │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        CROSS-CUTTING                         │
//! │  config/    Persistent output defaults (TOML)                │
//! │  error/     Coded errors with fix suggestions                │
//! │  util/      Shared constants                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`graph`] | `Digraph`, validated `VertexId`, topological sort, walking distance |
//! | [`input`] | Header/edge line parsing, case streaming, drain-on-abandon |
//! | [`runner`] | Driver loop: per-case recovery, text and JSON rendering |
//! | [`config`] | Output defaults under `~/.config/dagwalk/` |
//! | [`error`] | Coded error taxonomy with fix suggestions |
//! | [`util`] | Driver bounds and line-format constants |

// ═══════════════════════════════════════════════════════════════
// DOMAIN MODEL - Graph structure and analyses
// ═══════════════════════════════════════════════════════════════
pub mod graph;

// ═══════════════════════════════════════════════════════════════
// APPLICATION LAYER - Input handling and the driver loop
// ═══════════════════════════════════════════════════════════════
pub mod input;
pub mod runner;

// ═══════════════════════════════════════════════════════════════
// CROSS-CUTTING - Errors, configuration, constants
// ═══════════════════════════════════════════════════════════════
pub mod config;
pub mod error;
pub mod util;

// ═══════════════════════════════════════════════════════════════
// PUBLIC API RE-EXPORTS
// ═══════════════════════════════════════════════════════════════

// Error types
pub use error::{DagwalkError, FixSuggestion, Result};

// Config types
pub use config::DagwalkConfig;

// Graph types (Domain Model)
pub use graph::{Digraph, Edge, VertexId};

// Input types
pub use input::{parse_edge, parse_header, CaseHeader, CaseReader, EdgeLine};

// Runner types (Application Layer)
pub use runner::{CaseReport, OutputFormat, RunOptions, Runner, RunSummary};
