use crate::model::{DocketMapping, TimeSlot};

use super::normalize::clean;
use super::{DocketError, Extraction};

pub const EMPTY_CHARGE: &str = "(empty)";
const CASE_SEPARATOR: &str = "; ";
const STATUTE_DELIMITER: &str = "] ";

/// Builds a [`DocketMapping`] from rows fed in document order.
#[derive(Debug, Default)]
pub struct DocketAccumulator {
    mapping: DocketMapping,
    current_slot: Option<usize>,
    warnings: Vec<String>,
}

impl DocketAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_time(&self) -> Option<&str> {
        self.current_slot
            .and_then(|index| self.mapping.slots().get(index))
            .map(|slot| slot.label.as_str())
    }

    pub fn add_time(&mut self, label: &str) {
        self.current_slot = Some(self.mapping.ensure_slot(label));
    }

    /// Registers every defendant named in `raw_label` under the current time slot.
    pub fn add_case(&mut self, raw_label: &str) -> Result<(), DocketError> {
        let label = clean(raw_label);
        let slot = self.current_slot_mut(&label)?;
        for name in label.split(CASE_SEPARATOR) {
            slot.ensure_case(name);
        }
        Ok(())
    }

    pub fn add_charge(&mut self, raw_case: &str, raw_charge: &str) -> Result<(), DocketError> {
        let case = clean(raw_case);
        let slot = self.current_slot_mut(&case)?;
        let description = charge_description(&clean(raw_charge))?;
        slot.ensure_case(&case).record_charge(&description);
        Ok(())
    }

    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn finish(self) -> Extraction {
        Extraction {
            mapping: self.mapping,
            warnings: self.warnings,
        }
    }

    fn current_slot_mut(&mut self, row: &str) -> Result<&mut TimeSlot, DocketError> {
        self.current_slot
            .and_then(|index| self.mapping.slot_mut(index))
            .ok_or_else(|| DocketError::NoTimeSlot {
                row: row.to_string(),
            })
    }
}

/// Drops the bracketed statute prefix, keeping everything after the first `"] "`.
pub fn charge_description(cleaned: &str) -> Result<String, DocketError> {
    if cleaned.is_empty() {
        return Ok(EMPTY_CHARGE.to_string());
    }

    cleaned
        .split_once(STATUTE_DELIMITER)
        .map(|(_, description)| description.to_string())
        .ok_or_else(|| DocketError::MalformedCharge {
            text: cleaned.to_string(),
        })
}
