use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use team_report::cli::args::{Cli, Commands};
use team_report::commands;
use team_report::commands::render::RenderOptions;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            file,
            format,
            box_out,
            narrative_out,
            validate,
        } => commands::render::run(&RenderOptions {
            file,
            format,
            box_out,
            narrative_out,
            validate,
        }),
    }
}
