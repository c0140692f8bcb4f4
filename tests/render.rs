//! End-to-end rendering tests over complete JSON documents.

use team_report::render::box_format::BOX_WIDTH;
use team_report::render::width::visual_width;
use team_report::render::{BoxRenderer, NarrativeRenderer, ReportRenderer};
use team_report::report::Report;

const RELEASE_REVIEW: &str = r#"{
  "$schema": "https://example.com/schemas/team-report.json",
  "project": "checkout-service",
  "version": "v1.2.0",
  "phase": "RELEASE REVIEW",
  "status": "NO-GO",
  "summary": "Security review found a blocking injection issue.",
  "conclusion": "Hold the release until the query builder is fixed.",
  "teams": [
    {
      "id": "security",
      "name": "Security",
      "status": "NO-GO",
      "verdict": "BLOCKING",
      "tasks": [
        {
          "id": "sql-injection",
          "status": "NO-GO",
          "severity": "critical",
          "detail": "Raw string concatenation in the query builder"
        },
        {
          "id": "dependency-audit",
          "status": "GO"
        }
      ],
      "narrative": {
        "problem": "User input reaches SQL without parameterization.",
        "recommendation": "Switch the query builder to bound parameters."
      }
    },
    {
      "id": "qa",
      "name": "Quality",
      "status": "GO",
      "tasks": [
        { "id": "regression-suite", "status": "GO", "detail": "412 passed" },
        { "id": "load-test", "status": "WARN", "severity": "low", "detail": "p99 above budget" }
      ],
      "content_blocks": [
        {
          "type": "metric",
          "label": "Coverage",
          "value": "87%",
          "status": "GO",
          "target": "80%"
        }
      ]
    }
  ],
  "footer_blocks": [
    {
      "type": "list",
      "title": "Action Items",
      "items": [
        { "text": "Parameterize checkout queries", "status": "NO-GO" }
      ]
    }
  ]
}"#;

const DEPENDENCY_ORDER: &str = r#"{
  "project": "demo",
  "version": "v0.1.0",
  "phase": "REVIEW",
  "status": "GO",
  "teams": [
    { "id": "release", "name": "release", "status": "GO", "depends_on": ["qa"] },
    { "id": "qa", "name": "qa", "status": "GO", "depends_on": ["pm"] },
    { "id": "pm", "name": "pm", "status": "GO" }
  ]
}"#;

fn parse(json: &str) -> Report {
    Report::from_json(json.as_bytes()).unwrap()
}

#[test]
fn box_output_is_width_stable() {
    let report = parse(RELEASE_REVIEW);
    let out = BoxRenderer::new().render(&report).unwrap();
    for line in out.lines() {
        assert_eq!(
            visual_width(line),
            BOX_WIDTH + 2,
            "line breaks the box: {:?}",
            line
        );
    }
}

#[test]
fn box_output_carries_verdict_severity_and_final_message() {
    let report = parse(RELEASE_REVIEW);
    let out = BoxRenderer::new().render(&report).unwrap();

    assert!(out.contains("TEAM STATUS REPORT"));
    assert!(out.contains("Project: checkout-service"));
    assert!(out.contains("(BLOCKING)"));
    assert!(out.contains("NO-GO [critical]"));
    assert!(out.contains("Coverage: 87% (target: 80%)"));
    assert!(out.contains("TEAM: NO-GO for v1.2.0"));
}

#[test]
fn narrative_output_uses_words_not_icons() {
    let report = parse(RELEASE_REVIEW);
    let out = NarrativeRenderer::new().render(&report).unwrap();

    assert!(out.starts_with("---\n"));
    assert!(out.contains("**Overall Status**: FAIL"));
    assert!(out.contains("## Team Results"));
    assert!(out.contains("### Security"));
    assert!(out.contains("| sql-injection | FAIL | critical | Raw string concatenation in the query builder |"));
    assert!(out.contains("| dependency-audit | PASS |  |  |"));
    assert!(out.contains("#### Recommendation"));
    assert!(out.contains("## Action Items"));
    assert!(out.contains("## Conclusion"));

    for icon in ["\u{1F7E2}", "\u{1F7E1}", "\u{1F534}", "\u{26AA}"] {
        assert!(!out.contains(icon), "narrative output leaked icon {}", icon);
    }
}

#[test]
fn both_formats_order_sections_by_dependency() {
    let report = parse(DEPENDENCY_ORDER);

    let boxed = BoxRenderer::new().render(&report).unwrap();
    let narrative = NarrativeRenderer::new().render(&report).unwrap();

    for out in [boxed.as_str(), narrative.as_str()] {
        let pm = out.find(" pm ").or_else(|| out.find("### pm")).unwrap();
        let qa = out.find(" qa ").or_else(|| out.find("### qa")).unwrap();
        let release = out
            .find(" release ")
            .or_else(|| out.find("### release"))
            .unwrap();
        assert!(pm < qa && qa < release, "wrong order in:\n{}", out);
    }

    // Rendering never reorders the report itself.
    assert_eq!(report.sections[0].id, "release");
}

#[test]
fn summary_blocks_replace_legacy_header_block() {
    let report = parse(
        r#"{
          "project": "demo",
          "version": "v1.0.0",
          "phase": "REVIEW",
          "status": "GO",
          "tags": { "channel": "stable" },
          "summary_blocks": [
            {
              "type": "kv_pairs",
              "title": "Release Overview",
              "pairs": [
                { "key": "Owner", "value": "pm" },
                { "key": "Window", "value": "2026-09-01" }
              ]
            }
          ],
          "teams": []
        }"#,
    );
    let out = BoxRenderer::new().render(&report).unwrap();

    assert!(out.contains("Release Overview:"));
    assert!(out.contains("Owner: pm"));
    // Summary blocks suppress the legacy project/version/tags lines.
    assert!(!out.contains("Project: demo"));
    assert!(!out.contains("Version: v1.0.0"));
    assert!(!out.contains("channel: stable"));

    for line in out.lines() {
        assert_eq!(visual_width(line), BOX_WIDTH + 2);
    }
}

#[test]
fn rendering_is_deterministic() {
    let report = parse(RELEASE_REVIEW);
    let a = BoxRenderer::new().render(&report).unwrap();
    let b = BoxRenderer::new().render(&report).unwrap();
    assert_eq!(a, b);
}
