//! Case Runner - the multi-case driver loop
//!
//! Reads cases from any `BufRead`, writes contract output to any
//! `Write`, and keeps going when a single case fails. The loop ends at
//! the first out-of-bounds header (the conventional terminator), at end
//! of input, or on a non-recoverable error.
//!
//! Per-case recovery contract: the first error inside a case abandons
//! that case, its still-owed edge lines are drained unparsed, and the
//! next line read is the next header. The stream never desynchronizes.

use std::io::{BufRead, Write};

use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::{DagwalkError, FixSuggestion, Result};
use crate::graph::{Digraph, VertexId};
use crate::input::{CaseHeader, CaseReader};

/// Label line preceding every case result
pub const SORT_LABEL: &str = "Following is the topological sort:";

/// How per-case results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Contract lines: label, optional order, total weight
    #[default]
    Text,
    /// One JSON object per case
    Json,
}

impl OutputFormat {
    /// Parse a user-supplied format name
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(DagwalkError::ConfigError {
                reason: format!("Unknown output format: {}. Use 'text' or 'json'", other),
            }),
        }
    }
}

/// Rendering options, resolved from config and CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print the full order line between the label and the weight
    pub show_order: bool,
    pub format: OutputFormat,
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases attempted (headers accepted)
    pub cases: usize,
    /// Cases abandoned by a recoverable error
    pub failed: usize,
}

/// Per-case record emitted in JSON mode, one object per line
#[derive(Debug, Serialize)]
pub struct CaseReport {
    pub case: usize,
    pub vertices: usize,
    pub edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CaseError>,
}

/// Failure detail inside a [`CaseReport`]
#[derive(Debug, Serialize)]
pub struct CaseError {
    pub code: &'static str,
    pub message: String,
}

impl CaseReport {
    fn success(case: usize, header: CaseHeader, order: &[VertexId], total_weight: i64) -> Self {
        Self {
            case,
            vertices: header.vertex_count,
            edges: header.edge_count,
            order: Some(order.iter().map(|v| v.index()).collect()),
            total_weight: Some(total_weight),
            error: None,
        }
    }

    fn failure(case: usize, header: CaseHeader, err: &DagwalkError) -> Self {
        Self {
            case,
            vertices: header.vertex_count,
            edges: header.edge_count,
            order: None,
            total_weight: None,
            error: Some(CaseError {
                code: err.code(),
                message: err.to_string(),
            }),
        }
    }
}

/// Multi-case driver over an input stream
pub struct Runner<W> {
    out: W,
    opts: RunOptions,
}

impl<W: Write> Runner<W> {
    pub fn new(out: W, opts: RunOptions) -> Self {
        Self { out, opts }
    }

    /// Take back the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run every case in `input` until the loop terminates.
    ///
    /// Loop termination:
    /// - a header with out-of-bounds counts stops the loop cleanly
    /// - end of input before any header stops the loop cleanly
    /// - a malformed header, truncated case, or IO failure is returned
    ///   as the run's error
    ///
    /// A recoverable in-case error abandons only that case; it is
    /// reported, counted in [`RunSummary::failed`], and the loop
    /// continues at the next header.
    #[instrument(skip(self, input))]
    pub fn process<R: BufRead>(&mut self, input: R) -> Result<RunSummary> {
        let mut reader = CaseReader::new(input);
        let mut summary = RunSummary::default();

        loop {
            let header = match reader.next_header() {
                Ok(Some(header)) => header,
                Ok(None) => {
                    debug!("end of input");
                    break;
                }
                Err(e) => match e {
                    DagwalkError::InvalidVertexCount { .. }
                    | DagwalkError::InvalidEdgeCount { .. } => {
                        info!(reason = %e, "stopping at out-of-bounds header");
                        break;
                    }
                    other => return Err(other),
                },
            };

            summary.cases += 1;
            debug!(
                case = summary.cases,
                vertices = header.vertex_count,
                edges = header.edge_count,
                "processing case"
            );

            match self.run_case(&mut reader, header, summary.cases) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    summary.failed += 1;
                    self.report_case_failure(summary.cases, header, &e)?;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            cases = summary.cases,
            failed = summary.failed,
            "run complete"
        );
        Ok(summary)
    }

    /// Structural check only: build every case and detect cycles,
    /// without computing orders or weights.
    #[instrument(skip(self, input))]
    pub fn validate<R: BufRead>(&mut self, input: R) -> Result<RunSummary> {
        let mut reader = CaseReader::new(input);
        let mut summary = RunSummary::default();

        loop {
            let header = match reader.next_header() {
                Ok(Some(header)) => header,
                Ok(None) => break,
                Err(e) => match e {
                    DagwalkError::InvalidVertexCount { .. }
                    | DagwalkError::InvalidEdgeCount { .. } => break,
                    other => return Err(other),
                },
            };

            summary.cases += 1;
            let outcome = Self::build_graph(&mut reader, header)
                .and_then(|graph| graph.detect_cycles().map(|()| graph));

            match outcome {
                Ok(graph) => {
                    writeln!(
                        self.out,
                        "{} case {}: {} vertices, {} edges, acyclic",
                        "✓".green(),
                        summary.cases,
                        header.vertex_count,
                        graph.edge_count()
                    )?;
                }
                Err(e) if e.is_recoverable() => {
                    summary.failed += 1;
                    warn!(case = summary.cases, code = e.code(), "invalid case");
                    writeln!(self.out, "{} case {}: {}", "✗".red(), summary.cases, e)?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }

    /// Evaluate one case: build, order, weigh, render.
    fn run_case<R: BufRead>(
        &mut self,
        reader: &mut CaseReader<R>,
        header: CaseHeader,
        case_no: usize,
    ) -> Result<()> {
        let graph = Self::build_graph(reader, header)?;

        match self.opts.format {
            OutputFormat::Text => {
                // The label precedes computation; a case that fails past
                // this point leaves the label as its only output
                writeln!(self.out, "{}", SORT_LABEL)?;
                let order = graph.topological_sort()?;
                if self.opts.show_order {
                    writeln!(self.out, "{}", render_order(&order))?;
                }
                let weight = graph.walking_distance(&order)?;
                writeln!(self.out, "Total weight: {}", weight)?;
            }
            OutputFormat::Json => {
                let order = graph.topological_sort()?;
                let weight = graph.walking_distance(&order)?;
                let report = CaseReport::success(case_no, header, &order, weight);
                writeln!(self.out, "{}", serde_json::to_string(&report)?)?;
            }
        }

        Ok(())
    }

    /// Read the owed edge lines into a fresh graph.
    ///
    /// On a recoverable per-line failure the rest of the case is
    /// drained before the error returns, keeping the reader aligned on
    /// the next header.
    fn build_graph<R: BufRead>(reader: &mut CaseReader<R>, header: CaseHeader) -> Result<Digraph> {
        let mut graph = Digraph::new(header.vertex_count);

        for read in 0..header.edge_count {
            let remaining = header.edge_count - read;
            let inserted = reader.next_edge(remaining).and_then(|edge| {
                let (from, to) = edge.checked(header.vertex_count)?;
                graph.add_edge(from, to, edge.weight)
            });

            if let Err(e) = inserted {
                if e.is_recoverable() {
                    // The bad line is already consumed
                    reader.drain_edges(remaining - 1)?;
                }
                return Err(e);
            }
        }

        Ok(graph)
    }

    /// Report an abandoned case without stopping the run
    fn report_case_failure(
        &mut self,
        case_no: usize,
        header: CaseHeader,
        err: &DagwalkError,
    ) -> Result<()> {
        warn!(case = case_no, code = err.code(), "case abandoned");
        if self.opts.format == OutputFormat::Json {
            let report = CaseReport::failure(case_no, header, err);
            writeln!(self.out, "{}", serde_json::to_string(&report)?)?;
        }
        eprintln!("{} case {}: {}", "Error:".red().bold(), case_no, err);
        if let Some(suggestion) = err.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        Ok(())
    }
}

/// Space-separated vertex indices, topological front first
fn render_order(order: &[VertexId]) -> String {
    let rendered: Vec<String> = order.iter().map(|v| v.to_string()).collect();
    rendered.join(" ")
}
