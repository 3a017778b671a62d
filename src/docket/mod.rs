use thiserror::Error;

use crate::model::DocketMapping;

mod accumulator;
mod extract;
mod normalize;

pub use extract::extract;

#[derive(Debug, Error)]
pub enum DocketError {
    #[error("row '{row}' appears before any time slot was established")]
    NoTimeSlot { row: String },

    #[error("charge text has no '] ' statute delimiter: '{text}'")]
    MalformedCharge { text: String },

    #[error("invalid selector '{selector}': {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
}

/// What to do with charge rows whose text lacks the statute prefix.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RowPolicy {
    #[default]
    Lenient,
    Strict,
}

impl RowPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub mapping: DocketMapping,
    pub warnings: Vec<String>,
}
