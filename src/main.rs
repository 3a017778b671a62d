mod cli;
mod client;
mod commands;
mod docket;
mod model;
mod render;
mod util;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> ExitCode {
    init_logging();

    match dispatch(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch(args) => commands::fetch::run(args),
        Commands::Parse(args) => commands::parse::run(args),
    }
}

fn report(err: &anyhow::Error) {
    error!(error = %err, "docket run failed");
    for cause in err.chain().skip(1) {
        error!(cause = %cause, "caused by");
    }
}

// stdout carries the rendered docket, so logs go to stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
