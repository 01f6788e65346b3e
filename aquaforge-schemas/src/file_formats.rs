use crate::{
    feed::FeedLog, mortality::Mortality, pond::Pond, sampling::Sampling,
    water_quality::WaterQuality,
};
use serde::{Deserialize, Serialize};

/// Any record file in a data directory. A file may carry one or several
/// collections; absent ones default to empty.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecordFile {
    pub schema_version: String,
    #[serde(default)]
    pub ponds: Vec<Pond>,
    #[serde(default)]
    pub feed_logs: Vec<FeedLog>,
    #[serde(default)]
    pub samplings: Vec<Sampling>,
    #[serde(default)]
    pub mortalities: Vec<Mortality>,
    #[serde(default)]
    pub water_quality: Vec<WaterQuality>,
}
