//! The `render` command: read a report JSON document, optionally validate
//! it, and emit one or both output formats.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::render::{renderer_for, OutputFormat};
use crate::report::Report;
use crate::validate;

/// Options for one render invocation.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Input file; stdin when `None`.
    pub file: Option<PathBuf>,
    /// Format written to stdout.
    pub format: OutputFormat,
    /// Optional file destination for the box format.
    pub box_out: Option<PathBuf>,
    /// Optional file destination for the narrative format.
    pub narrative_out: Option<PathBuf>,
    /// Run structural validation before rendering.
    pub validate: bool,
}

/// Run the render command.
pub fn run(opts: &RenderOptions) -> Result<()> {
    let data = read_input(opts.file.as_deref())?;
    if data.trim().is_empty() {
        bail!("empty input");
    }

    let report = Report::from_json(data.as_bytes()).context("parsing report")?;
    debug!(
        sections = report.sections.len(),
        status = %report.status,
        "parsed report"
    );

    if opts.validate {
        let issues = validate::validate_report(&report);
        if !issues.is_empty() {
            for issue in &issues {
                eprintln!("{}", issue);
            }
            bail!("validation failed with {} issue(s)", issues.len());
        }
    }

    // An explicit output path selects its format; stdout gets the chosen
    // format unless it was redirected to a file.
    let render_box = opts.box_out.is_some()
        || (opts.format == OutputFormat::Box && opts.narrative_out.is_none());
    let render_narrative = opts.narrative_out.is_some() || opts.format == OutputFormat::Narrative;

    if render_box {
        let output = renderer_for(OutputFormat::Box)
            .render(&report)
            .context("rendering box format")?;
        emit(&output, opts.box_out.as_deref()).context("writing box output")?;
    }

    if render_narrative {
        let output = renderer_for(OutputFormat::Narrative)
            .render(&report)
            .context("rendering narrative format")?;
        emit(&output, opts.narrative_out.as_deref()).context("writing narrative output")?;
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn emit(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("writing {}", path.display()))?
        }
        None => print!("{}", output),
    }
    Ok(())
}
