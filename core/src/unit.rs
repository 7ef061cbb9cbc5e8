use serde::{Deserialize, Serialize};

/// Sale status of a unit, stored as a lowercase string in the data asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Available,
    Sold,
    Reserved,
}

impl UnitStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Sold => "sold",
            UnitStatus::Reserved => "reserved",
        }
    }

    /// Parses a filter-panel select value. The empty string (and anything
    /// unrecognized) means "all statuses" and maps to `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim() {
            "available" => Some(UnitStatus::Available),
            "sold" => Some(UnitStatus::Sold),
            "reserved" => Some(UnitStatus::Reserved),
            _ => None,
        }
    }
}

/// One sellable floor-plan unit. `code` is the key linking the record to an
/// SVG polygon carrying the same value in its `data-code` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub code: u32,
    pub status: UnitStatus,
    pub price: u32,
}

/// The full ordered record set, loaded once at startup and never mutated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<UnitRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<UnitRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<UnitRecord> = serde_json::from_str(raw)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[UnitRecord] {
        &self.records
    }

    pub fn by_code(&self, code: u32) -> Option<&UnitRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
