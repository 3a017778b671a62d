use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_ENDPOINT;
use crate::util::parse_docket_date;

#[derive(Parser, Debug)]
#[command(
    name = "nl-docket",
    version,
    about = "Fetch and reformat daily court docket listings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the docket for an office and date, then render it.
    Fetch(FetchArgs),
    /// Render a docket page previously saved to disk.
    Parse(ParseArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Office ID as used by the docket site.
    #[arg(long)]
    pub office: String,

    /// Docket date in YYYY-MM-DD format; defaults to today.
    #[arg(long, value_parser = parse_docket_date)]
    pub date: Option<NaiveDate>,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Emit single-line JSON instead of indented JSON.
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Fail on charge rows without a statute prefix instead of skipping them.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Csv => "csv",
        }
    }
}
