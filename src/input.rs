//! Line-Oriented Case Input
//!
//! A case is one header line (`<vertices> <edges>`) followed by exactly
//! that many edge lines (`<from> <to> <weight>`), all fields
//! whitespace-separated. Parsing is split from validation against a
//! specific graph: `parse_edge` accepts any integer endpoints, and
//! [`EdgeLine::checked`] narrows them against a vertex count so a
//! negative or oversized index reports as a vertex reference error,
//! not a syntax error.
//!
//! [`CaseReader`] wraps any `BufRead`, tracks 1-based line numbers for
//! reporting, and can drain the owed remainder of an abandoned case so
//! the stream stays aligned on the next header.

use std::io::BufRead;

use crate::error::{DagwalkError, Result};
use crate::util::constants::{
    EDGE_FIELDS, HEADER_FIELDS, MAX_EDGE_COUNT, MAX_VERTEX_COUNT, MIN_EDGE_COUNT, MIN_VERTEX_COUNT,
};

/// Expected shape of a header line, for malformed-line reports
const HEADER_SHAPE: &str = "two integers: <vertices> <edges>";

/// Expected shape of an edge line, for malformed-line reports
const EDGE_SHAPE: &str = "three integers: <from> <to> <weight>";

/// Validated case header: both counts inside driver bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseHeader {
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// One parsed edge line, not yet validated against a vertex count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLine {
    pub from: i64,
    pub to: i64,
    pub weight: i32,
}

impl EdgeLine {
    /// Narrow both endpoints against `vertex_count`, yielding indices
    /// that are insertable into a graph of that size.
    pub fn checked(&self, vertex_count: usize) -> Result<(usize, usize)> {
        Ok((
            check_vertex(self.from, vertex_count)?,
            check_vertex(self.to, vertex_count)?,
        ))
    }
}

fn check_vertex(raw: i64, vertex_count: usize) -> Result<usize> {
    if raw >= 0 && (raw as usize) < vertex_count {
        Ok(raw as usize)
    } else {
        Err(DagwalkError::InvalidVertexReference {
            vertex: raw,
            vertex_count,
        })
    }
}

fn malformed(line_no: usize, expected: &str, content: &str) -> DagwalkError {
    DagwalkError::MalformedInputLine {
        line: line_no,
        expected: expected.to_string(),
        content: content.trim_end().to_string(),
    }
}

/// Parse a header line and validate its counts against driver bounds.
///
/// Counts parse as full `i64` first: `-3 5` is a well-formed header
/// with an out-of-bounds vertex count, not a syntax error, and stops
/// the driver loop cleanly.
pub fn parse_header(line: &str, line_no: usize) -> Result<CaseHeader> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != HEADER_FIELDS {
        return Err(malformed(line_no, HEADER_SHAPE, line));
    }

    let vertex_count: i64 = fields[0]
        .parse()
        .map_err(|_| malformed(line_no, HEADER_SHAPE, line))?;
    let edge_count: i64 = fields[1]
        .parse()
        .map_err(|_| malformed(line_no, HEADER_SHAPE, line))?;

    if vertex_count < MIN_VERTEX_COUNT as i64 || vertex_count > MAX_VERTEX_COUNT as i64 {
        return Err(DagwalkError::InvalidVertexCount {
            count: vertex_count,
        });
    }
    if edge_count < MIN_EDGE_COUNT as i64 || edge_count > MAX_EDGE_COUNT as i64 {
        return Err(DagwalkError::InvalidEdgeCount { count: edge_count });
    }

    Ok(CaseHeader {
        vertex_count: vertex_count as usize,
        edge_count: edge_count as usize,
    })
}

/// Parse an edge line: `<from> <to> <weight>`.
///
/// Endpoint bounds are the caller's concern; see [`EdgeLine::checked`].
pub fn parse_edge(line: &str, line_no: usize) -> Result<EdgeLine> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != EDGE_FIELDS {
        return Err(malformed(line_no, EDGE_SHAPE, line));
    }

    let from: i64 = fields[0]
        .parse()
        .map_err(|_| malformed(line_no, EDGE_SHAPE, line))?;
    let to: i64 = fields[1]
        .parse()
        .map_err(|_| malformed(line_no, EDGE_SHAPE, line))?;
    let weight: i32 = fields[2]
        .parse()
        .map_err(|_| malformed(line_no, EDGE_SHAPE, line))?;

    Ok(EdgeLine { from, to, weight })
}

/// Streaming reader over the case format
pub struct CaseReader<R> {
    inner: R,
    line_no: usize,
}

impl<R: BufRead> CaseReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line_no: 0 }
    }

    /// 1-based number of the most recently read line
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(buf))
    }

    /// Read and validate the next case header.
    ///
    /// `Ok(None)` at end of input. Out-of-bounds counts and malformed
    /// lines surface as errors; the caller decides which of those stop
    /// the loop.
    pub fn next_header(&mut self) -> Result<Option<CaseHeader>> {
        match self.next_line()? {
            None => Ok(None),
            Some(line) => parse_header(&line, self.line_no).map(Some),
        }
    }

    /// Read the next edge line of the current case.
    ///
    /// `remaining` is how many edge lines the case is still owed,
    /// reported if the stream ends here.
    pub fn next_edge(&mut self, remaining: usize) -> Result<EdgeLine> {
        match self.next_line()? {
            None => Err(DagwalkError::UnexpectedEof { missing: remaining }),
            Some(line) => parse_edge(&line, self.line_no),
        }
    }

    /// Consume up to `count` lines of an abandoned case without
    /// parsing them. Returns how many lines were actually present.
    pub fn drain_edges(&mut self, count: usize) -> Result<usize> {
        let mut drained = 0;
        for _ in 0..count {
            if self.next_line()?.is_none() {
                break;
            }
            drained += 1;
        }
        Ok(drained)
    }
}
