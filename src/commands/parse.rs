use anyhow::Result;
use tracing::info;

use crate::cli::ParseArgs;
use crate::util::read_html_file;

pub fn run(args: ParseArgs) -> Result<()> {
    info!(input = %args.input.display(), "parsing saved docket page");
    let html = read_html_file(&args.input)?;
    super::emit_docket(&html, &args.render)
}
