//! Report renderers.
//!
//! Two renderers share one block-to-output contract: the box renderer emits
//! fixed-width terminal lines, the narrative renderer emits Markdown
//! fragments. Both are read-only over the report; section ordering is
//! computed per render call, not written back.

pub mod box_format;
pub mod narrative;
pub mod width;

use std::fmt;

use crate::report::{ContentBlock, KvPair, ListItem, Report};
use crate::{ReportError, Status};

pub use box_format::BoxRenderer;
pub use narrative::NarrativeRenderer;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width Unicode terminal box
    #[default]
    Box,
    /// Pandoc-friendly Markdown
    Narrative,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Box => write!(f, "box"),
            OutputFormat::Narrative => write!(f, "narrative"),
        }
    }
}

/// Renders a complete report into one output document.
pub trait ReportRenderer {
    fn render(&self, report: &Report) -> Result<String, ReportError>;
}

/// Get a renderer for the selected output format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Box => Box::new(BoxRenderer::new()),
        OutputFormat::Narrative => Box::new(NarrativeRenderer::new()),
    }
}

/// The per-kind block rendering contract shared by both renderers.
///
/// `render_block` dispatches exhaustively over the block sum type, so a new
/// block kind fails to compile until every renderer handles it.
pub trait BlockRenderer {
    type Output;

    fn kv_pairs(&self, title: Option<&str>, pairs: &[KvPair]) -> Self::Output;
    fn list(&self, title: Option<&str>, items: &[ListItem]) -> Self::Output;
    fn table(&self, title: Option<&str>, headers: &[String], rows: &[Vec<String>]) -> Self::Output;
    fn text(&self, title: Option<&str>, content: &str) -> Self::Output;
    fn metric(
        &self,
        label: &str,
        value: &str,
        status: Option<Status>,
        target: Option<&str>,
    ) -> Self::Output;

    fn render_block(&self, block: &ContentBlock) -> Self::Output {
        match block {
            ContentBlock::KvPairs { title, pairs } => self.kv_pairs(title.as_deref(), pairs),
            ContentBlock::List { title, items } => self.list(title.as_deref(), items),
            ContentBlock::Table {
                title,
                headers,
                rows,
            } => self.table(title.as_deref(), headers, rows),
            ContentBlock::Text { title, content } => self.text(title.as_deref(), content),
            ContentBlock::Metric {
                label,
                value,
                status,
                target,
            } => self.metric(label, value, *status, target.as_deref()),
        }
    }
}
