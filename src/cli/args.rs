//! Command line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "team-report",
    version,
    about = "Render team status report JSON to box or narrative format"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a report JSON file to box or narrative format
    ///
    /// Reads from stdin when no file is given. Examples:
    ///
    ///   team-report render report.json
    ///   team-report render --format=narrative report.json
    ///   team-report render --box-out=report.txt --narrative-out=report.md report.json
    ///   cat report.json | team-report render --validate
    Render {
        /// Report JSON file (stdin when omitted)
        file: Option<PathBuf>,

        /// Output format for stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Box)]
        format: OutputFormat,

        /// Write box format to a file
        #[arg(long, value_name = "FILE")]
        box_out: Option<PathBuf>,

        /// Write narrative format to a file
        #[arg(long, value_name = "FILE")]
        narrative_out: Option<PathBuf>,

        /// Run structural validation before rendering
        #[arg(long)]
        validate: bool,
    },
}
