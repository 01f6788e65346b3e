use crate::{derivation::PondVariables, error::AquaforgeError, series::SeriesPoint};
use aquaforge_schemas::metric::MetricKind;
use chrono::NaiveDate;
use csv::Writer;
use serde::Serialize;
use std::{collections::BTreeMap, fs, io};

#[derive(Debug, Serialize)]
struct SnapshotEntry {
    as_of: NaiveDate,
    pond_id: String,
    days: i64,
    n0: u64,
    nt: i64,
    w0_ind: f64,
    wt_ind: f64,
    wt_total: f64,
    dead_weight: f64,
    feed_total: f64,
    sr: f64,
    fcr: f64,
    sgr: f64,
    rgr: f64,
    epp: f64,
    absolute_weight: f64,
    absolute_length: f64,
    calculations_json: String,
}

/// Appends one row per derived pond snapshot to a CSV file.
pub struct MetricsLogger {
    writer: Writer<fs::File>,
    path: String,
}

impl MetricsLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path).map_err(io::Error::from)?;
        Ok(Self {
            writer,
            path: path.to_string(),
        })
    }

    pub fn log_snapshot(&mut self, vars: &PondVariables, as_of: NaiveDate) -> Result<(), AquaforgeError> {
        let metrics = vars.metrics();
        let calculations: BTreeMap<&str, String> = MetricKind::ALL
            .into_iter()
            .map(|kind| (kind.code(), vars.formula_display(kind).calculation))
            .collect();

        let entry = SnapshotEntry {
            as_of,
            pond_id: vars.pond_id.clone(),
            days: vars.days,
            n0: vars.n0,
            nt: vars.nt,
            w0_ind: vars.w0_ind,
            wt_ind: vars.wt_ind,
            wt_total: vars.wt_total,
            dead_weight: vars.dead_weight,
            feed_total: vars.feed_total,
            sr: metrics.sr,
            fcr: metrics.fcr,
            sgr: metrics.sgr,
            rgr: metrics.rgr,
            epp: metrics.epp,
            absolute_weight: metrics.absolute_weight,
            absolute_length: metrics.absolute_length,
            calculations_json: serde_json::to_string(&calculations)?,
        };

        self.writer
            .serialize(entry)
            .map_err(|e| AquaforgeError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| AquaforgeError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

/// Writes a chart series as `label,day,value` rows.
pub fn write_series(path: &str, points: &[SeriesPoint]) -> Result<(), AquaforgeError> {
    let mut writer =
        Writer::from_path(path).map_err(|e| AquaforgeError::CsvError(path.to_string(), e))?;
    for point in points {
        writer
            .serialize(point)
            .map_err(|e| AquaforgeError::CsvError(path.to_string(), e))?;
    }
    writer
        .flush()
        .map_err(|e| AquaforgeError::FileIO(path.to_string(), e))?;
    Ok(())
}
