use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A periodic measurement of a subset of the stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sampling {
    pub id: String,
    pub pond_id: String,
    /// Days since the pond's start date. Negative when sampled before it.
    /// Recomputed from `date` once the sampling is stored with its pond.
    #[serde(default)]
    pub day: i64,
    pub date: NaiveDate,
    pub sampled_count: u32,
    /// Individual (or averaged) weights in grams.
    pub sample_weights: Vec<f64>,
    /// Individual lengths in cm.
    #[serde(default)]
    pub sample_lengths: Option<Vec<f64>>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamplingUpdate {
    pub date: Option<NaiveDate>,
    pub sampled_count: Option<u32>,
    pub sample_weights: Option<Vec<f64>>,
    pub sample_lengths: Option<Vec<f64>>,
    pub notes: Option<String>,
}
