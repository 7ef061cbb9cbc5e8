pub mod filter;
pub mod tooltip;
pub mod unit;

pub use filter::{apply_filter, FilterCriteria, PRICE_MAX, PRICE_MIN, PRICE_STEP};
pub use tooltip::{tooltip_content, TooltipState};
pub use unit::{RecordStore, UnitRecord, UnitStatus};
