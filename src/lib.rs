//! team-report library
//!
//! Aggregates per-agent validation results into a single hierarchical team
//! report and renders it to two stable output formats:
//!
//! - a fixed-width Unicode terminal box (Go/No-Go mission-control style)
//! - Pandoc-friendly Markdown for document conversion
//!
//! Reports are plain JSON documents. Sections declare dependencies on each
//! other and are rendered in topological order; statuses roll up from task
//! results to sections to the report as a whole.
//!
//! # Example
//!
//! ```no_run
//! use team_report::render::{BoxRenderer, ReportRenderer};
//! use team_report::report::Report;
//!
//! let data = std::fs::read_to_string("report.json").expect("read failed");
//! let report = Report::from_json(data.as_bytes()).expect("parse failed");
//! let output = BoxRenderer::new().render(&report).expect("render failed");
//! println!("{}", output);
//! ```

pub mod cli;
pub mod commands;
pub mod render;
pub mod report;
pub mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-exports for public API
pub use render::{BoxRenderer, NarrativeRenderer, ReportRenderer};
pub use report::{ContentBlock, KvPair, ListItem, NarrativeSection, Report, Section, TaskResult};

/// Validation status following NASA Go/No-Go terminology.
///
/// Severity order is NO-GO > WARN > GO. SKIP is neutral: it only wins an
/// aggregation when every child is SKIP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "NO-GO")]
    NoGo,
    #[serde(rename = "SKIP")]
    Skip,
}

impl Status {
    /// UTF-8 icon for the box format.
    pub fn icon(self) -> &'static str {
        match self {
            Status::Go => "\u{1F7E2}",   // 🟢
            Status::Warn => "\u{1F7E1}", // 🟡
            Status::NoGo => "\u{1F534}", // 🔴
            Status::Skip => "\u{26AA}",  // ⚪
        }
    }

    /// Plain-text status word for the narrative format.
    pub fn text(self) -> &'static str {
        match self {
            Status::Go => "PASS",
            Status::Warn => "WARNING",
            Status::NoGo => "FAIL",
            Status::Skip => "SKIP",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Skip
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Status::Go => "GO",
            Status::Warn => "WARN",
            Status::NoGo => "NO-GO",
            Status::Skip => "SKIP",
        };
        write!(f, "{}", word)
    }
}

/// Compute a rollup status from child statuses.
///
/// NO-GO beats WARN beats GO. An input that is entirely SKIP (including an
/// empty input) rolls up to SKIP.
pub fn aggregate<I>(statuses: I) -> Status
where
    I: IntoIterator<Item = Status>,
{
    let mut has_no_go = false;
    let mut has_warn = false;
    let mut all_skip = true;

    for status in statuses {
        if status != Status::Skip {
            all_skip = false;
        }
        match status {
            Status::NoGo => has_no_go = true,
            Status::Warn => has_warn = true,
            _ => {}
        }
    }

    if all_skip {
        Status::Skip
    } else if has_no_go {
        Status::NoGo
    } else if has_warn {
        Status::Warn
    } else {
        Status::Go
    }
}

/// Error type for report parsing and rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Malformed JSON input; the underlying error is passed through unchanged.
    #[error("parsing report: {0}")]
    Parse(#[from] serde_json::Error),

    /// A formatter failed while assembling output text.
    #[error("formatting output: {0}")]
    Format(#[from] fmt::Error),
}
