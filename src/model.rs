use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    pub description: String,
    pub count: u32,
}

impl Charge {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            count: 1,
        }
    }

    pub fn increase(&mut self) {
        self.count += 1;
    }

    pub fn has_multiple(&self) -> bool {
        self.count > 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseEntry {
    pub label: String,
    pub charges: Vec<Charge>,
}

impl CaseEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            charges: Vec::new(),
        }
    }

    /// Counts `description` against an existing charge or appends a new one.
    pub fn record_charge(&mut self, description: &str) {
        match self
            .charges
            .iter_mut()
            .find(|charge| charge.description == description)
        {
            Some(charge) => charge.increase(),
            None => self.charges.push(Charge::new(description)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub cases: Vec<CaseEntry>,
}

impl TimeSlot {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            cases: Vec::new(),
        }
    }

    pub fn ensure_case(&mut self, label: &str) -> &mut CaseEntry {
        let index = match self.cases.iter().position(|entry| entry.label == label) {
            Some(index) => index,
            None => {
                self.cases.push(CaseEntry::new(label));
                self.cases.len() - 1
            }
        };
        &mut self.cases[index]
    }
}

/// Time slot -> case label -> charges, kept in the order rows appear on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocketMapping {
    slots: Vec<TimeSlot>,
}

impl DocketMapping {
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Returns the index of the slot named `label`, creating it when absent.
    pub fn ensure_slot(&mut self, label: &str) -> usize {
        match self.slots.iter().position(|slot| slot.label == label) {
            Some(index) => index,
            None => {
                self.slots.push(TimeSlot::new(label));
                self.slots.len() - 1
            }
        }
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut TimeSlot> {
        self.slots.get_mut(index)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn case_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.cases.len()).sum()
    }

    pub fn charge_count(&self) -> usize {
        self.slots
            .iter()
            .flat_map(|slot| slot.cases.iter())
            .map(|entry| entry.charges.len())
            .sum()
    }
}

#[cfg(test)]
impl TimeSlot {
    pub fn case(&self, label: &str) -> Option<&CaseEntry> {
        self.cases.iter().find(|entry| entry.label == label)
    }
}

#[cfg(test)]
impl DocketMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, label: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.label == label)
    }
}

struct SlotCases<'a>(&'a TimeSlot);

impl Serialize for SlotCases<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.cases.len()))?;
        for entry in &self.0.cases {
            map.serialize_entry(&entry.label, &entry.charges)?;
        }
        map.end()
    }
}

impl Serialize for DocketMapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for slot in &self.slots {
            map.serialize_entry(&slot.label, &SlotCases(slot))?;
        }
        map.end()
    }
}
