mod cli;
mod application;
mod domain;
mod data;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Diagnostics go to stderr: stdout carries exactly one answer line per question.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wiki_qa=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
