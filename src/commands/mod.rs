pub mod fetch;
pub mod parse;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::RenderArgs;
use crate::docket::{self, RowPolicy};
use crate::render::{self, RenderOptions};
use crate::util::write_stdout;

/// Extracts the docket table from `html` and writes the requested rendering to stdout.
fn emit_docket(html: &str, args: &RenderArgs) -> Result<()> {
    let rendered = render_docket(html, args)?;
    write_stdout(&rendered)
}

fn render_docket(html: &str, args: &RenderArgs) -> Result<String> {
    let extraction = docket::extract(html, RowPolicy::from_strict(args.strict))
        .context("failed to extract docket table")?;

    if !extraction.warnings.is_empty() {
        warn!(
            skipped = extraction.warnings.len(),
            "some docket rows could not be read"
        );
    }
    if extraction.mapping.is_empty() {
        warn!("no docket sittings found in page");
    }

    let options = RenderOptions {
        format: args.format,
        pretty: !args.compact,
    };
    let rendered = render::render(&extraction.mapping, options)
        .with_context(|| format!("failed to render docket as {}", args.format.as_str()))?;
    info!(
        format = args.format.as_str(),
        bytes = rendered.len(),
        "rendered docket"
    );
    Ok(rendered)
}
