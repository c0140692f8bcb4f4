//! Structural pre-render validation.
//!
//! Full JSON Schema validation belongs to an external validator; this is
//! the lightweight sanity layer behind the CLI's `--validate` flag. It
//! catches document shapes that render misleadingly: blank or duplicate
//! section ids, duplicate task ids within a section, table rows wider than
//! their header set.

use std::collections::HashSet;
use std::fmt;

use crate::report::{ContentBlock, Report};

/// One structural problem found in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where the problem was found (e.g. `teams[2]`, `teams[0].tasks`).
    pub location: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Check a report for structural problems. An empty result means the
/// report is safe to render.
pub fn validate_report(report: &Report) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut seen_sections = HashSet::new();
    for (i, section) in report.sections.iter().enumerate() {
        let location = format!("teams[{}]", i);

        if section.id.is_empty() {
            issues.push(ValidationIssue {
                location: location.clone(),
                message: "section id is empty".to_string(),
            });
        } else if !seen_sections.insert(section.id.as_str()) {
            issues.push(ValidationIssue {
                location: location.clone(),
                message: format!("duplicate section id {:?}", section.id),
            });
        }

        let mut seen_tasks = HashSet::new();
        for (j, task) in section.tasks.iter().enumerate() {
            if task.id.is_empty() {
                issues.push(ValidationIssue {
                    location: format!("{}.tasks[{}]", location, j),
                    message: "task id is empty".to_string(),
                });
            } else if !seen_tasks.insert(task.id.as_str()) {
                issues.push(ValidationIssue {
                    location: format!("{}.tasks[{}]", location, j),
                    message: format!("duplicate task id {:?}", task.id),
                });
            }
        }

        for (j, block) in section.content_blocks.iter().enumerate() {
            check_block(block, &format!("{}.content_blocks[{}]", location, j), &mut issues);
        }
    }

    for (i, block) in report.summary_blocks.iter().enumerate() {
        check_block(block, &format!("summary_blocks[{}]", i), &mut issues);
    }
    for (i, block) in report.footer_blocks.iter().enumerate() {
        check_block(block, &format!("footer_blocks[{}]", i), &mut issues);
    }

    issues
}

fn check_block(block: &ContentBlock, location: &str, issues: &mut Vec<ValidationIssue>) {
    if let ContentBlock::Table { headers, rows, .. } = block {
        if headers.is_empty() {
            return;
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() > headers.len() {
                issues.push(ValidationIssue {
                    location: location.to_string(),
                    message: format!(
                        "row {} has {} cells but the table has {} headers",
                        i,
                        row.len(),
                        headers.len()
                    ),
                });
            }
        }
    }
}
