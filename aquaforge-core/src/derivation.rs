//! Per-pond derivation of the scalar variables the formulas consume.
//!
//! Everything is recomputed from the raw collections on every call; nothing is
//! cached. Inconsistent data (more deaths than fish stocked, a zero initial
//! stock) is reported through `tracing` and passed through to the metrics
//! rather than corrected.

use crate::{
    display::{self, BiomassMode, FormulaDisplay, MetricInputs},
    error::AquaforgeError,
    formulas,
};
use aquaforge_schemas::{
    feed::FeedLog, metric::MetricKind, mortality::Mortality, pond::Pond, sampling::Sampling,
    water_quality::WaterQuality,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

/// Read access to the loaded record collections.
pub trait PondRecords {
    fn pond(&self, pond_id: &str) -> Option<&Pond>;
    fn feed_logs(&self) -> &[FeedLog];
    fn samplings(&self) -> &[Sampling];
    fn mortalities(&self) -> &[Mortality];
    fn water_quality(&self) -> &[WaterQuality];
}

/// The scalar variables of one pond at a given evaluation date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PondVariables {
    pub pond_id: String,
    /// Initial stock.
    pub n0: u64,
    /// Current stock. Negative when recorded deaths exceed the initial stock.
    pub nt: i64,
    /// Initial total biomass (g).
    pub w0_total: f64,
    /// Initial average individual weight (g).
    pub w0_ind: f64,
    /// Current average individual weight (g).
    pub wt_ind: f64,
    /// Current total biomass (g).
    pub wt_total: f64,
    /// Total weight lost to mortality (g).
    pub dead_weight: f64,
    /// Total feed given (g).
    pub feed_total: f64,
    /// Elapsed days used by the growth rates.
    pub days: i64,
    pub l0: f64,
    pub lt: f64,
    pub latest_sampling_day: Option<i64>,
}

/// Every metric of a pond, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PondMetrics {
    pub tkp: f64,
    pub sr: f64,
    pub fcr: f64,
    pub sgr: f64,
    pub rgr: f64,
    pub epp: f64,
    pub absolute_weight: f64,
    pub absolute_length: f64,
    pub current_stock: i64,
}

impl PondVariables {
    pub fn metrics(&self) -> PondMetrics {
        let days = self.days as f64;
        PondMetrics {
            tkp: self.feed_total,
            sr: formulas::survival_rate(self.n0 as f64, self.nt as f64),
            fcr: formulas::feed_conversion_ratio(
                self.feed_total,
                self.w0_total,
                self.wt_total,
                self.dead_weight,
            ),
            sgr: formulas::specific_growth_rate(self.w0_ind, self.wt_ind, days),
            rgr: formulas::relative_growth_rate(self.w0_ind, self.wt_ind, days),
            epp: formulas::feed_efficiency(
                self.w0_total,
                self.wt_total,
                self.dead_weight,
                self.feed_total,
            ),
            absolute_weight: formulas::absolute_weight_gain(self.w0_ind, self.wt_ind),
            absolute_length: formulas::absolute_length_gain(self.l0, self.lt),
            current_stock: self.nt,
        }
    }

    /// The variable bag for one metric. FCR and EPP work on total biomass,
    /// the growth rates and weight gain on individual weight.
    pub fn inputs_for(&self, kind: MetricKind) -> MetricInputs {
        let days = self.days as f64;
        match kind {
            MetricKind::Tkp => MetricInputs::Tkp { feed: self.feed_total },
            MetricKind::Sr => MetricInputs::Sr {
                n0: self.n0 as f64,
                nt: self.nt as f64,
            },
            MetricKind::Fcr => MetricInputs::Fcr {
                feed: self.feed_total,
                w0: self.w0_total,
                wt: self.wt_total,
                dead_weight: self.dead_weight,
            },
            MetricKind::Sgr => MetricInputs::Sgr {
                w0: self.w0_ind,
                wt: self.wt_ind,
                days,
            },
            MetricKind::Rgr => MetricInputs::Rgr {
                w0: self.w0_ind,
                wt: self.wt_ind,
                days,
            },
            MetricKind::Epp => MetricInputs::Epp {
                w0: self.w0_total,
                wt: self.wt_total,
                dead_weight: self.dead_weight,
                feed: self.feed_total,
            },
            MetricKind::AbsoluteWeight => MetricInputs::AbsoluteWeight {
                w0: self.w0_ind,
                wt: self.wt_ind,
            },
            MetricKind::AbsoluteLength => MetricInputs::AbsoluteLength {
                l0: self.l0,
                lt: self.lt,
            },
        }
    }

    /// Formula explanation for one metric, in the dashboard's display mode.
    pub fn formula_display(&self, kind: MetricKind) -> FormulaDisplay {
        display::build(&self.inputs_for(kind), BiomassMode::for_metric(kind))
    }
}

/// Day number of a sampling relative to the pond start. Not validated: a
/// sampling dated before the start gets a negative day.
pub fn sampling_day(start_date: NaiveDate, sampling_date: NaiveDate) -> i64 {
    (sampling_date - start_date).num_days()
}

/// Whole days since the pond start. Zero is bumped to one so the growth rates
/// stay defined on the first day; a start date in the future stays negative.
pub fn elapsed_days(start_date: NaiveDate, as_of: NaiveDate) -> i64 {
    match (as_of - start_date).num_days() {
        0 => 1,
        days => days,
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// The sampling with the highest day. On equal days the later entry in the
/// slice wins.
pub fn latest_sampling<'a, I>(samplings: I) -> Option<&'a Sampling>
where
    I: IntoIterator<Item = &'a Sampling>,
{
    samplings.into_iter().fold(None, |best, sampling| match best {
        Some(current) if current.day > sampling.day => Some(current),
        _ => Some(sampling),
    })
}

/// Derives the variables of `pond` from the full collections; records of
/// other ponds are ignored.
pub fn derive_pond_variables(
    pond: &Pond,
    feed_logs: &[FeedLog],
    samplings: &[Sampling],
    mortalities: &[Mortality],
    as_of: NaiveDate,
) -> PondVariables {
    let n0 = pond.initial_stock;
    let feed: Vec<f64> = feed_logs
        .iter()
        .filter(|log| log.pond_id == pond.id)
        .map(|log| log.feed_given)
        .collect();
    let feed_total = formulas::total_feed(&feed);

    let (dead_count, dead_weight) = mortalities
        .iter()
        .filter(|m| m.pond_id == pond.id)
        .fold((0u64, 0.0), |(count, weight), m| {
            (count.saturating_add(m.dead_count), weight + m.dead_weight)
        });
    // Counts are u64 on disk; the difference saturates at the i64 range.
    let nt = (i128::from(n0) - i128::from(dead_count))
        .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
    if nt < 0 {
        warn!(
            pond = %pond.id,
            initial_stock = n0,
            dead_count,
            "recorded mortality exceeds initial stock"
        );
    }

    if n0 == 0 {
        warn!(pond = %pond.id, "initial stock is zero; individual weight is undefined");
    }
    let w0_total = pond.initial_total_weight;
    let w0_ind = w0_total / n0 as f64;

    let latest = latest_sampling(samplings.iter().filter(|s| s.pond_id == pond.id));
    let wt_ind = match latest {
        Some(sampling) => mean(&sampling.sample_weights).unwrap_or_else(|| {
            warn!(
                pond = %pond.id,
                sampling = %sampling.id,
                "latest sampling has no weights; using initial average weight"
            );
            w0_ind
        }),
        None => w0_ind,
    };
    let wt_total = wt_ind * nt as f64;

    let l0 = pond.initial_average_length.unwrap_or(0.0);
    let lt = latest
        .and_then(|s| s.sample_lengths.as_deref())
        .and_then(mean)
        .unwrap_or(l0);

    let days = elapsed_days(pond.start_date, as_of);

    debug!(
        pond = %pond.id,
        n0,
        nt,
        wt_ind,
        feed_total,
        days,
        "derived pond variables"
    );

    PondVariables {
        pond_id: pond.id.clone(),
        n0,
        nt,
        w0_total,
        w0_ind,
        wt_ind,
        wt_total,
        dead_weight,
        feed_total,
        days,
        l0,
        lt,
        latest_sampling_day: latest.map(|s| s.day),
    }
}

/// Looks the pond up in `records` and derives its variables.
pub fn derive_for<R: PondRecords + ?Sized>(
    records: &R,
    pond_id: &str,
    as_of: NaiveDate,
) -> Result<PondVariables, AquaforgeError> {
    let pond = records
        .pond(pond_id)
        .ok_or_else(|| AquaforgeError::PondNotFound(pond_id.to_string()))?;
    Ok(derive_pond_variables(
        pond,
        records.feed_logs(),
        records.samplings(),
        records.mortalities(),
        as_of,
    ))
}
