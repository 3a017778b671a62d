use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

pub const DOCKET_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_docket_date(date: NaiveDate) -> String {
    date.format(DOCKET_DATE_FORMAT).to_string()
}

pub fn parse_docket_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DOCKET_DATE_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DD date, got '{raw}': {err}"))
}

pub fn read_html_file(path: &Path) -> Result<String> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

pub fn write_stdout(rendered: &str) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    output
        .write_all(rendered.as_bytes())
        .context("failed to write rendered docket to stdout")?;
    output.flush()?;
    Ok(())
}
