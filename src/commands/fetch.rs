use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::FetchArgs;
use crate::client::{DocketClient, DocketQuery};
use crate::util::{format_docket_date, today_local};

pub fn run(args: FetchArgs) -> Result<()> {
    if args.office.trim().is_empty() {
        bail!("office ID is required");
    }

    let date = args.date.unwrap_or_else(today_local);
    let query = DocketQuery {
        endpoint: args.endpoint,
        date,
        office: args.office,
    };

    info!(
        office = %query.office,
        date = %format_docket_date(query.date),
        format = args.render.format.as_str(),
        "docket fetch requested"
    );

    let client = DocketClient::new()?;
    let html = client
        .fetch(&query)
        .with_context(|| format!("failed to fetch docket for office {}", query.office))?;

    super::emit_docket(&html, &args.render)
}
