use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One feeding event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedLog {
    pub id: String,
    pub pond_id: String,
    pub date: NaiveDate,
    /// Time of day as `HH:mm`.
    pub time: String,
    /// Feed type label (jenis pakan).
    pub feed_type: String,
    /// Feed given, in grams.
    pub feed_given: f64,
    #[serde(default)]
    pub feed_leftover: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedLogUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub feed_type: Option<String>,
    pub feed_given: Option<f64>,
    pub feed_leftover: Option<f64>,
}
