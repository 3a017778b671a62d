use std::string::FromUtf8Error;

use thiserror::Error;

use crate::cli::OutputFormat;
use crate::model::DocketMapping;

mod csv;
mod json;
mod text;
#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize docket json")]
    Json(#[from] serde_json::Error),

    #[error("rendered output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub pretty: bool,
}

pub fn render(mapping: &DocketMapping, options: RenderOptions) -> Result<String, RenderError> {
    match options.format {
        OutputFormat::Json => json::render(mapping, options.pretty),
        OutputFormat::Text => Ok(text::render(mapping)),
        OutputFormat::Csv => Ok(csv::render(mapping)),
    }
}
