//! Fixed-width Unicode box renderer.
//!
//! Every emitted line has the same visual width: a border glyph, a fixed
//! interior budget, and a closing border glyph. Interior text wider than the
//! budget is ellipsis-truncated so the right border never breaks, even with
//! two-column emoji in play.

use std::fmt::Write;

use super::width::{truncate_to_width, visual_width, wrap_text};
use super::{BlockRenderer, ReportRenderer};
use crate::report::{dag, KvPair, ListItem, Report, Section, TaskResult};
use crate::{ReportError, Status};

/// Inner width of the box, between the border characters.
pub const BOX_WIDTH: usize = 76;

/// Column budget for task identifiers before ellipsis truncation.
const ID_WIDTH: usize = 24;

/// Wrap budget for text blocks (interior minus the two-space indent).
const WRAP_WIDTH: usize = BOX_WIDTH - 3;

/// Renders a report as a fixed-width Unicode terminal box.
#[derive(Debug, Default)]
pub struct BoxRenderer;

impl BoxRenderer {
    pub fn new() -> Self {
        BoxRenderer
    }
}

fn top_border() -> String {
    format!("\u{2554}{}\u{2557}", "\u{2550}".repeat(BOX_WIDTH))
}

fn separator() -> String {
    format!("\u{2560}{}\u{2563}", "\u{2550}".repeat(BOX_WIDTH))
}

fn bottom_border() -> String {
    format!("\u{255A}{}\u{255D}", "\u{2550}".repeat(BOX_WIDTH))
}

/// Center text within the box.
fn center_line(text: &str) -> String {
    let text = truncate_to_width(text, BOX_WIDTH);
    let padding = BOX_WIDTH.saturating_sub(visual_width(&text));
    let left = padding / 2;
    let right = padding - left;
    format!("\u{2551}{}{}{}\u{2551}", " ".repeat(left), text, " ".repeat(right))
}

/// Left-align text within the box after one leading space.
fn padded_line(text: &str) -> String {
    let text = truncate_to_width(text, BOX_WIDTH - 1);
    let padding = BOX_WIDTH.saturating_sub(visual_width(&text) + 1);
    format!("\u{2551} {}{}\u{2551}", text, " ".repeat(padding))
}

/// Section header: status icon, display name, status word, optional verdict.
fn section_header(section: &Section) -> String {
    let mut line = format!(
        "{} {} {}",
        section.status.icon(),
        section.name,
        section.status
    );
    if let Some(verdict) = section.verdict.as_deref() {
        if !verdict.is_empty() {
            let _ = write!(line, " ({})", verdict);
        }
    }
    line
}

/// One task result line: padded id, icon, status word with optional
/// bracketed severity, then whatever detail still fits.
fn task_line(task: &TaskResult) -> String {
    let id = truncate_to_width(&task.id, ID_WIDTH);
    let mut status = task.status.to_string();
    if let Some(severity) = task.severity.as_deref() {
        if !severity.is_empty() {
            let _ = write!(status, " [{}]", severity);
        }
    }

    // Pad by visual width, not char count, so emoji in an id cannot push
    // the icon/status columns out of line.
    let id_pad = " ".repeat(ID_WIDTH.saturating_sub(visual_width(&id)));
    let head = format!("  {}{} {} {:<5}", id, id_pad, task.status.icon(), status);
    if task.detail.is_empty() {
        return head;
    }

    // Detail gets whatever remains of the interior budget.
    let remaining = (BOX_WIDTH - 1).saturating_sub(visual_width(&head) + 1);
    let detail = truncate_to_width(&task.detail, remaining);
    format!("{} {}", head, detail)
}

impl BlockRenderer for BoxRenderer {
    type Output = Vec<String>;

    fn kv_pairs(&self, title: Option<&str>, pairs: &[KvPair]) -> Vec<String> {
        let mut lines = title_lines(title);
        for pair in pairs {
            match pair.icon.as_deref().filter(|i| !i.is_empty()) {
                Some(icon) => lines.push(format!("  {} {}: {}", icon, pair.key, pair.value)),
                None => lines.push(format!("  {}: {}", pair.key, pair.value)),
            }
        }
        lines
    }

    fn list(&self, title: Option<&str>, items: &[ListItem]) -> Vec<String> {
        let mut lines = title_lines(title);
        for item in items {
            match item.effective_icon() {
                Some(icon) => lines.push(format!("  {} {}", icon, item.text)),
                // Two spaces stand in for the icon to keep alignment.
                None => lines.push(format!("    {}", item.text)),
            }
        }
        lines
    }

    fn table(&self, title: Option<&str>, headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
        // Column width is the widest of header and cells, fixed before any
        // row is emitted.
        let mut widths: Vec<usize> = headers.iter().map(|h| visual_width(h)).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = visual_width(cell);
                if i < widths.len() {
                    widths[i] = widths[i].max(w);
                } else {
                    widths.push(w);
                }
            }
        }

        let mut lines = title_lines(title);
        lines.push(table_row(headers, &widths));
        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(table_row(&dashes, &widths));
        for row in rows {
            lines.push(table_row(row, &widths));
        }
        lines
    }

    fn text(&self, title: Option<&str>, content: &str) -> Vec<String> {
        let mut lines = title_lines(title);
        for line in wrap_text(content, WRAP_WIDTH) {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("  {}", line));
            }
        }
        lines
    }

    fn metric(
        &self,
        label: &str,
        value: &str,
        status: Option<Status>,
        target: Option<&str>,
    ) -> Vec<String> {
        let mut line = match status {
            Some(status) => format!("  {} {}: {}", status.icon(), label, value),
            None => format!("  {}: {}", label, value),
        };
        if let Some(target) = target {
            let _ = write!(line, " (target: {})", target);
        }
        vec![line]
    }
}

fn title_lines(title: Option<&str>) -> Vec<String> {
    match title {
        Some(title) => vec![format!("  {}:", title)],
        None => Vec::new(),
    }
}

/// Pad each cell to its column width; missing trailing cells render empty.
fn table_row(cells: &[String], widths: &[usize]) -> String {
    let mut out = String::from("  ");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        out.push_str(cell);
        if i + 1 < widths.len() {
            out.push_str(&" ".repeat(width.saturating_sub(visual_width(cell))));
            out.push_str("  ");
        }
    }
    out.trim_end().to_string()
}

impl ReportRenderer for BoxRenderer {
    fn render(&self, report: &Report) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "{}", top_border())?;
        writeln!(out, "{}", center_line(report.effective_title()))?;
        writeln!(out, "{}", separator())?;

        // Summary blocks supersede the legacy project/version/tags block.
        if report.summary_blocks.is_empty() {
            writeln!(out, "{}", padded_line(&format!("Project: {}", report.project)))?;
            writeln!(out, "{}", padded_line(&format!("Version: {}", report.version)))?;
            for (key, value) in &report.tags {
                writeln!(out, "{}", padded_line(&format!("{}: {}", key, value)))?;
            }
        } else {
            for block in &report.summary_blocks {
                for line in self.render_block(block) {
                    writeln!(out, "{}", padded_line(&line))?;
                }
            }
        }

        writeln!(out, "{}", separator())?;
        writeln!(out, "{}", padded_line(&report.phase))?;

        for &i in &dag::topo_order(&report.sections) {
            let section = &report.sections[i];
            writeln!(out, "{}", separator())?;
            writeln!(out, "{}", padded_line(&section_header(section)))?;
            for task in &section.tasks {
                writeln!(out, "{}", padded_line(&task_line(task)))?;
            }
            for block in &section.content_blocks {
                for line in self.render_block(block) {
                    writeln!(out, "{}", padded_line(&line))?;
                }
            }
        }

        if !report.footer_blocks.is_empty() {
            writeln!(out, "{}", separator())?;
            for block in &report.footer_blocks {
                for line in self.render_block(block) {
                    writeln!(out, "{}", padded_line(&line))?;
                }
            }
        }

        writeln!(out, "{}", separator())?;
        writeln!(out, "{}", center_line(&report.final_message()))?;
        writeln!(out, "{}", bottom_border())?;

        Ok(out)
    }
}
