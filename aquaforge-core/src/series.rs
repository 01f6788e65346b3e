//! Chart-ready series for one pond.

use crate::derivation::mean;
use aquaforge_schemas::{pond::Pond, sampling::Sampling, water_quality::WaterQuality};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Axis label, e.g. `Hari 14`.
    pub label: String,
    pub day: i64,
    pub value: f64,
}

/// Samplings of one pond ordered by day. Equal days keep their input order.
pub fn pond_samplings<'a>(pond_id: &str, samplings: &'a [Sampling]) -> Vec<&'a Sampling> {
    let mut selected: Vec<&Sampling> = samplings.iter().filter(|s| s.pond_id == pond_id).collect();
    selected.sort_by_key(|s| s.day);
    selected
}

/// Average weight per sampling, preceded by the stocking weight on day 0.
pub fn growth_series(pond: &Pond, samplings: &[Sampling]) -> Vec<SeriesPoint> {
    let initial = SeriesPoint {
        label: "Hari 0".to_string(),
        day: 0,
        value: pond.initial_total_weight / pond.initial_stock as f64,
    };
    std::iter::once(initial)
        .chain(
            pond_samplings(&pond.id, samplings)
                .into_iter()
                .filter_map(|s| {
                    mean(&s.sample_weights).map(|value| SeriesPoint {
                        label: format!("Hari {}", s.day),
                        day: s.day,
                        value,
                    })
                }),
        )
        .collect()
}

/// Average length per sampling, only for samplings that measured length.
pub fn length_series(pond_id: &str, samplings: &[Sampling]) -> Vec<SeriesPoint> {
    pond_samplings(pond_id, samplings)
        .into_iter()
        .filter_map(|s| {
            let lengths = s.sample_lengths.as_deref()?;
            mean(lengths).map(|value| SeriesPoint {
                label: format!("Hari {}", s.day),
                day: s.day,
                value,
            })
        })
        .collect()
}

/// Part of the day a reading was taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayPeriod {
    Morning,
    Midday,
    Afternoon,
    Night,
}

impl DayPeriod {
    pub fn of(timestamp: NaiveDateTime) -> Self {
        match timestamp.hour() {
            h if h < 10 => DayPeriod::Morning,
            h if h < 15 => DayPeriod::Midday,
            h if h < 19 => DayPeriod::Afternoon,
            _ => DayPeriod::Night,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Pagi",
            DayPeriod::Midday => "Siang",
            DayPeriod::Afternoon => "Sore",
            DayPeriod::Night => "Malam",
        }
    }
}

/// Water quality readings of one pond in time order, with chart labels such
/// as `05 Mar Pagi`.
pub fn water_quality_series<'a>(
    pond_id: &str,
    readings: &'a [WaterQuality],
) -> Vec<(String, &'a WaterQuality)> {
    let mut selected: Vec<&WaterQuality> = readings.iter().filter(|w| w.pond_id == pond_id).collect();
    selected.sort_by_key(|w| w.timestamp);
    selected
        .into_iter()
        .map(|w| {
            let label = format!(
                "{} {}",
                w.timestamp.format("%d %b"),
                DayPeriod::of(w.timestamp).label()
            );
            (label, w)
        })
        .collect()
}

/// Most recent reading of a pond.
pub fn latest_water_quality<'a>(pond_id: &str, readings: &'a [WaterQuality]) -> Option<&'a WaterQuality> {
    readings
        .iter()
        .filter(|w| w.pond_id == pond_id)
        .max_by_key(|w| w.timestamp)
}
