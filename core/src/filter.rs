use serde::{Deserialize, Serialize};

use crate::unit::{UnitRecord, UnitStatus};

pub const PRICE_MIN: u32 = 0;
pub const PRICE_MAX: u32 = 100_000;
pub const PRICE_STEP: u32 = 1_000;

/// Active or pending filter selections. Bounds are inclusive; a transient
/// `min > max` is allowed while the panel is being edited and simply matches
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: Option<UnitStatus>,
    pub price_range: (u32, u32),
}

impl FilterCriteria {
    pub fn matches(&self, record: &UnitRecord) -> bool {
        let status_ok = match self.status {
            Some(status) => record.status == status,
            None => true,
        };
        let (min, max) = self.price_range;
        status_ok && record.price >= min && record.price <= max
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            status: None,
            price_range: (PRICE_MIN, PRICE_MAX),
        }
    }
}

/// Order-preserving subset of `records` satisfying `criteria`. Pure: the
/// input is never mutated and identical arguments always yield identical
/// output.
pub fn apply_filter(records: &[UnitRecord], criteria: &FilterCriteria) -> Vec<UnitRecord> {
    records
        .iter()
        .copied()
        .filter(|record| criteria.matches(record))
        .collect()
}
