//! Utilities Module - shared infrastructure
//!
//! - `constants`: Centralized input bounds and line-format facts

pub mod constants;

// Re-export public types
pub use constants::{
    EDGE_FIELDS, HEADER_FIELDS, MAX_EDGE_COUNT, MAX_VERTEX_COUNT, MIN_EDGE_COUNT, MIN_VERTEX_COUNT,
};
