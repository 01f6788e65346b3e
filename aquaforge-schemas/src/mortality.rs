use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Deaths recorded on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mortality {
    pub pond_id: String,
    pub date: NaiveDate,
    pub dead_count: u64,
    /// Total weight of the dead individuals in grams (not per individual).
    pub dead_weight: f64,
}
