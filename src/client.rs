use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Request};
use thiserror::Error;
use tracing::{debug, info};

use crate::util::format_docket_date;

pub const DEFAULT_ENDPOINT: &str = "https://docket.court.nl.ca/";
const USER_AGENT: &str = concat!("nl-docket/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("expected 200 status, got {status} from {url}")]
    Status { url: String, status: StatusCode },
}

#[derive(Debug, Clone)]
pub struct DocketQuery {
    pub endpoint: String,
    pub date: NaiveDate,
    pub office: String,
}

impl DocketQuery {
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("date", format_docket_date(self.date)),
            ("days_to_display", "1".to_string()),
            ("office[]", self.office.clone()),
        ]
    }
}

pub struct DocketClient {
    http: Client,
}

impl DocketClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { http })
    }

    pub fn request(&self, query: &DocketQuery) -> Result<Request, FetchError> {
        self.http
            .get(&query.endpoint)
            .query(&query.params())
            .build()
            .map_err(|source| FetchError::Transport {
                url: query.endpoint.clone(),
                source,
            })
    }

    /// Single GET of the docket page; anything but 200 is an error.
    pub fn fetch(&self, query: &DocketQuery) -> Result<String, FetchError> {
        let request = self.request(query)?;
        let url = request.url().to_string();
        info!(url = %url, "fetching docket");

        let response = self
            .http
            .execute(request)
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        check_status(&url, response.status())?;

        let body = response
            .text()
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;
        debug!(url = %url, bytes = body.len(), "docket fetched");
        Ok(body)
    }
}

fn check_status(url: &str, status: StatusCode) -> Result<(), FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}
