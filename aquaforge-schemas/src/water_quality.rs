use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A water quality reading. Not used by the metrics, only by the reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterQuality {
    pub id: String,
    pub pond_id: String,
    pub timestamp: NaiveDateTime,
    pub ph: f64,
    /// Celsius.
    pub temperature: f64,
    /// mg/L.
    pub dissolved_oxygen: f64,
    /// ppt.
    #[serde(default)]
    pub salinity: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaterQualityUpdate {
    pub timestamp: Option<NaiveDateTime>,
    pub ph: Option<f64>,
    pub temperature: Option<f64>,
    pub dissolved_oxygen: Option<f64>,
    pub salinity: Option<f64>,
    pub notes: Option<String>,
}
