//! Dagwalk Error Types with Error Codes
//!
//! Error code ranges:
//! - DAGWALK-001 to 009: Input stream errors (headers, edge lines)
//! - DAGWALK-010 to 019: Graph construction errors
//! - DAGWALK-020 to 029: Analysis errors (ordering, walk metric)
//! - DAGWALK-090 to 099: Infrastructure errors (IO, JSON, config)

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DagwalkError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
///
/// Implements both `thiserror::Error` for std error compatibility
/// and `miette::Diagnostic` for fancy terminal error display.
#[derive(Error, Debug, Diagnostic)]
#[diagnostic(url(docsrs))]
pub enum DagwalkError {
    // ═══════════════════════════════════════════
    // INPUT STREAM ERRORS (001-009)
    // ═══════════════════════════════════════════
    #[error("[DAGWALK-001] Vertex count {count} is outside the supported range 2..=10000")]
    #[diagnostic(
        code(dagwalk::input::vertex_count),
        help("Case headers must declare between 2 and 10000 vertices")
    )]
    InvalidVertexCount { count: i64 },

    #[error("[DAGWALK-002] Edge count {count} is outside the supported range 1..=100000")]
    #[diagnostic(
        code(dagwalk::input::edge_count),
        help("Case headers must declare between 1 and 100000 edges")
    )]
    InvalidEdgeCount { count: i64 },

    #[error("[DAGWALK-003] Malformed line {line}: expected {expected}, got '{content}'")]
    #[diagnostic(
        code(dagwalk::input::malformed_line),
        help("Each line carries whitespace-separated integers only")
    )]
    MalformedInputLine {
        line: usize,
        expected: String,
        content: String,
    },

    #[error("[DAGWALK-004] Input ended while the current case still owed {missing} edge line(s)")]
    #[diagnostic(
        code(dagwalk::input::unexpected_eof),
        help("A case must supply exactly as many edge lines as its header declares")
    )]
    UnexpectedEof { missing: usize },

    // ═══════════════════════════════════════════
    // GRAPH CONSTRUCTION ERRORS (010-019)
    // ═══════════════════════════════════════════
    #[error("[DAGWALK-010] Vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    #[diagnostic(
        code(dagwalk::graph::vertex_reference),
        help("Edge endpoints must name vertices in 0..V declared by the case header")
    )]
    InvalidVertexReference { vertex: i64, vertex_count: usize },

    // ═══════════════════════════════════════════
    // ANALYSIS ERRORS (020-029)
    // ═══════════════════════════════════════════
    #[error("[DAGWALK-020] Cycle detected in graph: {cycle}")]
    #[diagnostic(
        code(dagwalk::analysis::cycle),
        help("Topological ordering is only defined for acyclic graphs; break the cycle")
    )]
    CycleDetected { cycle: String },

    #[error("[DAGWALK-021] Walk weight needs at least 2 ordered vertices, found {found}")]
    #[diagnostic(
        code(dagwalk::analysis::insufficient_vertices),
        help("The walk metric reads the two leading vertices of the order")
    )]
    InsufficientVertices { found: usize },

    // ═══════════════════════════════════════════
    // INFRASTRUCTURE ERRORS (090-099)
    // ═══════════════════════════════════════════
    #[error("[DAGWALK-093] IO error: {0}")]
    #[diagnostic(code(dagwalk::io), help("Check file permissions and paths"))]
    IoError(#[from] std::io::Error),

    #[error("[DAGWALK-094] JSON error: {0}")]
    #[diagnostic(code(dagwalk::json), help("Report serialization failed; this is a bug"))]
    JsonError(#[from] serde_json::Error),

    #[error("[DAGWALK-095] Config error: {reason}")]
    #[diagnostic(
        code(dagwalk::config),
        help("Check config file syntax and permissions at ~/.config/dagwalk/config.toml")
    )]
    ConfigError { reason: String },
}

impl DagwalkError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidVertexCount { .. } => "DAGWALK-001",
            Self::InvalidEdgeCount { .. } => "DAGWALK-002",
            Self::MalformedInputLine { .. } => "DAGWALK-003",
            Self::UnexpectedEof { .. } => "DAGWALK-004",
            Self::InvalidVertexReference { .. } => "DAGWALK-010",
            Self::CycleDetected { .. } => "DAGWALK-020",
            Self::InsufficientVertices { .. } => "DAGWALK-021",
            Self::IoError(_) => "DAGWALK-093",
            Self::JsonError(_) => "DAGWALK-094",
            Self::ConfigError { .. } => "DAGWALK-095",
        }
    }

    /// Whether a failing case can be abandoned while the run continues.
    ///
    /// Recoverable errors spoil one case; the driver drains its owed
    /// lines and moves to the next header. Everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedInputLine { .. }
                | Self::InvalidVertexReference { .. }
                | Self::CycleDetected { .. }
                | Self::InsufficientVertices { .. }
        )
    }
}

impl FixSuggestion for DagwalkError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            Self::InvalidVertexCount { .. } => {
                Some("Declare a vertex count between 2 and 10000, or end input with an out-of-range header")
            }
            Self::InvalidEdgeCount { .. } => {
                Some("Declare an edge count between 1 and 100000")
            }
            Self::MalformedInputLine { .. } => {
                Some("Write headers as '<vertices> <edges>' and edges as '<from> <to> <weight>'")
            }
            Self::UnexpectedEof { .. } => {
                Some("Supply every edge line the case header declared")
            }
            Self::InvalidVertexReference { .. } => {
                Some("Use zero-based vertex indices smaller than the declared vertex count")
            }
            Self::CycleDetected { .. } => {
                Some("Remove one edge along the reported cycle path")
            }
            Self::InsufficientVertices { .. } => {
                Some("Walk weights are only defined for graphs with at least two vertices")
            }
            Self::IoError(_) => Some("Check that the input file exists and is readable"),
            Self::JsonError(_) => None,
            Self::ConfigError { .. } => {
                Some("Delete ~/.config/dagwalk/config.toml to regenerate defaults")
            }
        }
    }
}
