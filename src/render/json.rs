use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::model::DocketMapping;

use super::RenderError;

const PRETTY_INDENT: &[u8] = b"    ";

pub fn render(mapping: &DocketMapping, pretty: bool) -> Result<String, RenderError> {
    if !pretty {
        return Ok(serde_json::to_string(mapping)?);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    mapping.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
