//! Report, section, and task result types.
//!
//! These mirror the team-report wire format: one JSON document with report
//! metadata, summary and footer content blocks, and an ordered list of
//! per-team sections (serialized under the `teams` key).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::block::ContentBlock;
use super::dag;
use crate::{aggregate, ReportError, Status};

/// Default report title when none is set.
pub const DEFAULT_TITLE: &str = "TEAM STATUS REPORT";

/// The outcome of one discrete check performed by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Check identifier, unique within its section by convention. Not
    /// enforced here; `validate::validate_report` reports duplicates.
    pub id: String,
    #[serde(default)]
    pub status: Status,
    /// Free-form severity label (e.g. "critical", "high").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl TaskResult {
    pub fn new(id: impl Into<String>, status: Status) -> Self {
        TaskResult {
            id: id.into(),
            status,
            severity: None,
            detail: String::new(),
            duration: None,
            metadata: BTreeMap::new(),
        }
    }
}

/// Free-text prose attached to a section for narrative reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSection {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub problem: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub analysis: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub recommendation: String,
}

impl NarrativeSection {
    pub fn is_empty(&self) -> bool {
        self.problem.is_empty() && self.analysis.is_empty() && self.recommendation.is_empty()
    }
}

/// One agent/team's contribution to a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// The key used for dependency edges between sections.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: Status,
    /// Free-text verdict (e.g. "NEEDS_ATTENTION").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_blocks: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<NarrativeSection>,
    /// Ids of sections this section depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl Section {
    /// Rollup status computed from this section's task results.
    pub fn rollup_status(&self) -> Status {
        aggregate(self.tasks.iter().map(|t| t.status))
    }
}

/// The complete JSON-serializable team report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(
        rename = "$schema",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub phase: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary_blocks: Vec<ContentBlock>,
    #[serde(rename = "teams", default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footer_blocks: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub conclusion: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Parse a report from a JSON document. Malformed JSON propagates to the
    /// caller unchanged.
    pub fn from_json(data: &[u8]) -> Result<Report, ReportError> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Serialize the report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The report title, falling back to [`DEFAULT_TITLE`].
    pub fn effective_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_TITLE,
        }
    }

    /// True if no section is NO-GO.
    pub fn is_go(&self) -> bool {
        !self.sections.iter().any(|s| s.status == Status::NoGo)
    }

    /// Rollup status computed from section statuses.
    ///
    /// Unlike the task-to-section rollup, an all-SKIP set of sections rolls
    /// up to GO here, never SKIP. Historical wire behavior, kept as is.
    pub fn rollup_status(&self) -> Status {
        let mut has_no_go = false;
        let mut has_warn = false;
        for section in &self.sections {
            match section.status {
                Status::NoGo => has_no_go = true,
                Status::Warn => has_warn = true,
                _ => {}
            }
        }
        if has_no_go {
            Status::NoGo
        } else if has_warn {
            Status::Warn
        } else {
            Status::Go
        }
    }

    /// The final Go/No-Go banner line for the box format.
    pub fn final_message(&self) -> String {
        if self.is_go() {
            format!("\u{1F680} TEAM: GO for {} \u{1F680}", self.version)
        } else {
            format!("\u{1F6D1} TEAM: NO-GO for {} \u{1F6D1}", self.version)
        }
    }

    /// Reorder sections into topological dependency order, in place.
    ///
    /// Renderers order sections themselves without mutating the report, so
    /// calling this before rendering is optional.
    pub fn sort_by_dag(&mut self) {
        self.sections = dag::sort_sections(std::mem::take(&mut self.sections));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(id: &str, status: Status) -> Section {
        Section {
            id: id.to_string(),
            name: id.to_string(),
            status,
            ..Section::default()
        }
    }

    #[test]
    fn section_rollup_collapses_all_skip() {
        let section = Section {
            tasks: vec![
                TaskResult::new("a", Status::Skip),
                TaskResult::new("b", Status::Skip),
            ],
            ..Section::default()
        };
        assert_eq!(section.rollup_status(), Status::Skip);
    }

    #[test]
    fn report_rollup_does_not_collapse_all_skip() {
        let report = Report {
            sections: vec![section("a", Status::Skip), section("b", Status::Skip)],
            ..Report::default()
        };
        assert_eq!(report.rollup_status(), Status::Go);
    }

    #[test]
    fn report_rollup_precedence() {
        let report = Report {
            sections: vec![section("a", Status::Warn), section("b", Status::NoGo)],
            ..Report::default()
        };
        assert_eq!(report.rollup_status(), Status::NoGo);
    }

    #[test]
    fn effective_title_default() {
        assert_eq!(Report::default().effective_title(), "TEAM STATUS REPORT");
        let report = Report {
            title: Some("CUSTOM REPORT".to_string()),
            ..Report::default()
        };
        assert_eq!(report.effective_title(), "CUSTOM REPORT");
    }

    #[test]
    fn final_message_reflects_no_go_sections() {
        let mut report = Report {
            version: "v1.2.0".to_string(),
            sections: vec![section("qa", Status::Go)],
            ..Report::default()
        };
        assert_eq!(report.final_message(), "\u{1F680} TEAM: GO for v1.2.0 \u{1F680}");

        report.sections.push(section("security", Status::NoGo));
        assert_eq!(
            report.final_message(),
            "\u{1F6D1} TEAM: NO-GO for v1.2.0 \u{1F6D1}"
        );
    }

    #[test]
    fn sections_serialize_under_teams_key() {
        let report = Report {
            project: "demo".to_string(),
            sections: vec![section("qa", Status::Go)],
            ..Report::default()
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"teams\""));
        assert!(!json.contains("\"sections\""));

        let parsed = Report::from_json(json.as_bytes()).unwrap();
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(parsed.sections[0].id, "qa");
    }

    #[test]
    fn minimal_document_parses() {
        let report = Report::from_json(br#"{"project": "p", "version": "v1", "phase": "REVIEW", "teams": [], "status": "GO"}"#)
            .unwrap();
        assert_eq!(report.project, "p");
        assert_eq!(report.status, Status::Go);
        assert!(report.sections.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Report::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }
}
