//! Pandoc-friendly Markdown renderer.
//!
//! Output is designed for document conversion, e.g.:
//!
//! ```text
//! pandoc report.md -o report.pdf --pdf-engine=xelatex
//! ```
//!
//! Status is always rendered as a word (PASS, WARNING, FAIL, SKIP); no emoji
//! appear anywhere in this format.

use std::fmt::Write;

use super::{BlockRenderer, ReportRenderer};
use crate::report::{dag, KvPair, ListItem, Report, Section};
use crate::{ReportError, Status};

/// Renders a report as Pandoc-friendly Markdown.
#[derive(Debug, Default)]
pub struct NarrativeRenderer;

impl NarrativeRenderer {
    pub fn new() -> Self {
        NarrativeRenderer
    }

    fn write_section(&self, out: &mut String, section: &Section) -> Result<(), ReportError> {
        writeln!(out)?;
        writeln!(out, "### {}", section.name)?;
        writeln!(out)?;
        writeln!(out, "**Status**: {}", section.status.text())?;
        if let Some(verdict) = section.verdict.as_deref() {
            if !verdict.is_empty() {
                writeln!(out, "**Verdict**: {}", verdict)?;
            }
        }

        if let Some(narrative) = section.narrative.as_ref().filter(|n| !n.is_empty()) {
            for (heading, prose) in [
                ("Problem", &narrative.problem),
                ("Analysis", &narrative.analysis),
                ("Recommendation", &narrative.recommendation),
            ] {
                if !prose.is_empty() {
                    writeln!(out)?;
                    writeln!(out, "#### {}", heading)?;
                    writeln!(out)?;
                    writeln!(out, "{}", prose)?;
                }
            }
        }

        if !section.tasks.is_empty() {
            writeln!(out)?;
            writeln!(out, "#### Tasks")?;
            writeln!(out)?;
            writeln!(out, "| Task | Status | Severity | Detail |")?;
            writeln!(out, "| --- | --- | --- | --- |")?;
            for task in &section.tasks {
                writeln!(
                    out,
                    "| {} | {} | {} | {} |",
                    task.id,
                    task.status.text(),
                    task.severity.as_deref().unwrap_or(""),
                    task.detail
                )?;
            }
        }

        if !section.content_blocks.is_empty() {
            writeln!(out)?;
            writeln!(out, "#### Details")?;
            writeln!(out)?;
            self.write_blocks(out, &section.content_blocks)?;
        }

        Ok(())
    }

    fn write_blocks(
        &self,
        out: &mut String,
        blocks: &[crate::report::ContentBlock],
    ) -> Result<(), ReportError> {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write!(out, "{}", self.render_block(block))?;
        }
        Ok(())
    }
}

impl BlockRenderer for NarrativeRenderer {
    type Output = String;

    fn kv_pairs(&self, title: Option<&str>, pairs: &[KvPair]) -> String {
        // Icons are box-format decoration; Markdown output omits them.
        let mut out = title_fragment(title);
        for pair in pairs {
            out.push_str(&format!("- **{}**: {}\n", pair.key, pair.value));
        }
        out
    }

    fn list(&self, title: Option<&str>, items: &[ListItem]) -> String {
        let mut out = title_fragment(title);
        for item in items {
            out.push_str(&format!("- {}\n", item.text));
        }
        out
    }

    fn table(&self, title: Option<&str>, headers: &[String], rows: &[Vec<String>]) -> String {
        let mut out = title_fragment(title);
        out.push_str(&format!("| {} |\n", headers.join(" | ")));
        let dashes = vec!["---"; headers.len()];
        out.push_str(&format!("| {} |\n", dashes.join(" | ")));
        for row in rows {
            let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
            // Short rows pad out with empty cells.
            cells.resize(headers.len().max(cells.len()), "");
            out.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        out
    }

    fn text(&self, title: Option<&str>, content: &str) -> String {
        let mut out = title_fragment(title);
        out.push_str(content);
        out.push('\n');
        out
    }

    fn metric(
        &self,
        label: &str,
        value: &str,
        status: Option<Status>,
        target: Option<&str>,
    ) -> String {
        let mut out = format!("- **{}**: {}", label, value);
        if let Some(target) = target {
            out.push_str(&format!(" (target: {})", target));
        }
        if let Some(status) = status {
            out.push_str(&format!(" \u{2014} {}", status.text()));
        }
        out.push('\n');
        out
    }
}

fn title_fragment(title: Option<&str>) -> String {
    match title {
        Some(title) => format!("**{}**\n\n", title),
        None => String::new(),
    }
}

impl ReportRenderer for NarrativeRenderer {
    fn render(&self, report: &Report) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "---")?;
        writeln!(out, "title: \"{}\"", report.effective_title())?;
        writeln!(out, "date: \"{}\"", report.generated_at.format("%Y-%m-%d"))?;
        writeln!(out, "---")?;
        writeln!(out)?;
        writeln!(out, "# {}", report.effective_title())?;
        writeln!(out)?;
        writeln!(out, "**Project**: {}", report.project)?;
        writeln!(out, "**Version**: {}", report.version)?;
        writeln!(out, "**Phase**: {}", report.phase)?;
        writeln!(out, "**Overall Status**: {}", report.status.text())?;

        if !report.tags.is_empty() {
            writeln!(out)?;
            for (key, value) in &report.tags {
                writeln!(out, "- **{}**: {}", key, value)?;
            }
        }

        if !report.summary.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Executive Summary")?;
            writeln!(out)?;
            writeln!(out, "{}", report.summary)?;
        }

        if !report.summary_blocks.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Overview")?;
            writeln!(out)?;
            self.write_blocks(&mut out, &report.summary_blocks)?;
        }

        writeln!(out)?;
        writeln!(out, "## Team Results")?;
        for &i in &dag::topo_order(&report.sections) {
            self.write_section(&mut out, &report.sections[i])?;
        }

        if !report.footer_blocks.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Action Items")?;
            writeln!(out)?;
            self.write_blocks(&mut out, &report.footer_blocks)?;
        }

        if !report.conclusion.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Conclusion")?;
            writeln!(out)?;
            writeln!(out, "{}", report.conclusion)?;
        }

        Ok(out)
    }
}
