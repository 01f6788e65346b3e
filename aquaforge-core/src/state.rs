//! The in-memory collections of a monitoring session.
//!
//! Mutations go through the methods below; derived values are never stored
//! here and are recomputed from the collections by [`crate::derivation`].
//! The one exception is `Sampling::day`, which always follows the sampling
//! date and the start date of its pond.

use crate::{
    derivation::{sampling_day, PondRecords},
    error::AquaforgeError,
};
use aquaforge_schemas::{
    feed::{FeedLog, FeedLogUpdate},
    file_formats::RecordFile,
    mortality::Mortality,
    pond::{Pond, PondUpdate},
    sampling::{Sampling, SamplingUpdate},
    water_quality::{WaterQuality, WaterQualityUpdate},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AppState {
    pub ponds: Vec<Pond>,
    pub samplings: Vec<Sampling>,
    pub feed_logs: Vec<FeedLog>,
    pub mortalities: Vec<Mortality>,
    pub water_quality: Vec<WaterQuality>,
}

fn not_found(kind: &'static str, id: &str) -> AquaforgeError {
    AquaforgeError::RecordNotFound {
        kind,
        id: id.to_string(),
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every record of a loaded file, applying the same checks as the
    /// individual `add_*` operations. Either the whole file is merged or, on
    /// the first rejected record, nothing is.
    pub fn merge(&mut self, file: RecordFile) -> Result<(), AquaforgeError> {
        let mut staged = self.clone();
        for pond in file.ponds {
            staged.add_pond(pond)?;
        }
        for sampling in file.samplings {
            staged.add_sampling(sampling)?;
        }
        staged.feed_logs.extend(file.feed_logs);
        staged.mortalities.extend(file.mortalities);
        staged.water_quality.extend(file.water_quality);
        *self = staged;
        debug!(
            ponds = self.ponds.len(),
            samplings = self.samplings.len(),
            feed_logs = self.feed_logs.len(),
            "merged record file"
        );
        Ok(())
    }

    pub fn add_pond(&mut self, pond: Pond) -> Result<(), AquaforgeError> {
        if self.ponds.iter().any(|p| p.id == pond.id) {
            return Err(AquaforgeError::DuplicatePond(pond.id));
        }
        // Samplings may have been recorded before their pond was known.
        self.refresh_sampling_days(&pond.id, pond.start_date);
        self.ponds.push(pond);
        Ok(())
    }

    fn refresh_sampling_days(&mut self, pond_id: &str, start_date: NaiveDate) {
        for sampling in self.samplings.iter_mut().filter(|s| s.pond_id == pond_id) {
            sampling.day = sampling_day(start_date, sampling.date);
        }
    }

    pub fn update_pond(&mut self, id: &str, update: PondUpdate) -> Result<(), AquaforgeError> {
        let pond = self
            .ponds
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("pond", id))?;
        if let Some(name) = update.name {
            pond.name = name;
        }
        if let Some(species) = update.species {
            pond.species = species;
        }
        if let Some(stock) = update.initial_stock {
            pond.initial_stock = stock;
        }
        if let Some(weight) = update.initial_total_weight {
            pond.initial_total_weight = weight;
        }
        if let Some(length) = update.initial_average_length {
            pond.initial_average_length = Some(length);
        }
        let new_start = update.start_date;
        if let Some(start) = new_start {
            pond.start_date = start;
        }
        if let Some(days) = update.duration_days {
            pond.duration_days = days;
        }
        if let Some(modules) = update.selected_modules {
            pond.selected_modules = modules;
        }
        if let Some(start) = new_start {
            self.refresh_sampling_days(id, start);
        }
        Ok(())
    }

    fn sampling_day_for(&self, pond_id: &str, date: NaiveDate, given: i64) -> i64 {
        self.pond(pond_id)
            .map_or(given, |pond| sampling_day(pond.start_date, date))
    }

    /// Adds a sampling. A pond has at most one sampling per calendar date.
    ///
    /// The stored `day` is recomputed from the sampling date when the pond is
    /// known; for an unknown pond it is kept until the pond is added.
    pub fn add_sampling(&mut self, mut sampling: Sampling) -> Result<(), AquaforgeError> {
        if self
            .samplings
            .iter()
            .any(|s| s.pond_id == sampling.pond_id && s.date == sampling.date)
        {
            return Err(AquaforgeError::DuplicateSampling {
                pond_id: sampling.pond_id,
                date: sampling.date,
            });
        }
        sampling.day = self.sampling_day_for(&sampling.pond_id, sampling.date, sampling.day);
        self.samplings.push(sampling);
        Ok(())
    }

    pub fn update_sampling(&mut self, id: &str, update: SamplingUpdate) -> Result<(), AquaforgeError> {
        let index = self
            .samplings
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found("sampling", id))?;
        if let Some(date) = update.date {
            let pond_id = self.samplings[index].pond_id.clone();
            if self
                .samplings
                .iter()
                .any(|s| s.id != id && s.pond_id == pond_id && s.date == date)
            {
                return Err(AquaforgeError::DuplicateSampling { pond_id, date });
            }
            let day = self.sampling_day_for(&pond_id, date, self.samplings[index].day);
            let sampling = &mut self.samplings[index];
            sampling.date = date;
            sampling.day = day;
        }
        let sampling = &mut self.samplings[index];
        if let Some(count) = update.sampled_count {
            sampling.sampled_count = count;
        }
        if let Some(weights) = update.sample_weights {
            sampling.sample_weights = weights;
        }
        if let Some(lengths) = update.sample_lengths {
            sampling.sample_lengths = Some(lengths);
        }
        if let Some(notes) = update.notes {
            sampling.notes = Some(notes);
        }
        Ok(())
    }

    pub fn delete_sampling(&mut self, id: &str) -> Result<Sampling, AquaforgeError> {
        let index = self
            .samplings
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found("sampling", id))?;
        Ok(self.samplings.remove(index))
    }

    pub fn add_feed_log(&mut self, log: FeedLog) {
        self.feed_logs.push(log);
    }

    pub fn update_feed_log(&mut self, id: &str, update: FeedLogUpdate) -> Result<(), AquaforgeError> {
        let log = self
            .feed_logs
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| not_found("feed log", id))?;
        if let Some(date) = update.date {
            log.date = date;
        }
        if let Some(time) = update.time {
            log.time = time;
        }
        if let Some(feed_type) = update.feed_type {
            log.feed_type = feed_type;
        }
        if let Some(given) = update.feed_given {
            log.feed_given = given;
        }
        if let Some(leftover) = update.feed_leftover {
            log.feed_leftover = Some(leftover);
        }
        Ok(())
    }

    pub fn delete_feed_log(&mut self, id: &str) -> Result<FeedLog, AquaforgeError> {
        let index = self
            .feed_logs
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| not_found("feed log", id))?;
        Ok(self.feed_logs.remove(index))
    }

    pub fn add_mortality(&mut self, mortality: Mortality) {
        self.mortalities.push(mortality);
    }

    pub fn add_water_quality(&mut self, reading: WaterQuality) {
        self.water_quality.push(reading);
    }

    pub fn update_water_quality(
        &mut self,
        id: &str,
        update: WaterQualityUpdate,
    ) -> Result<(), AquaforgeError> {
        let reading = self
            .water_quality
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| not_found("water quality", id))?;
        if let Some(timestamp) = update.timestamp {
            reading.timestamp = timestamp;
        }
        if let Some(ph) = update.ph {
            reading.ph = ph;
        }
        if let Some(temperature) = update.temperature {
            reading.temperature = temperature;
        }
        if let Some(oxygen) = update.dissolved_oxygen {
            reading.dissolved_oxygen = oxygen;
        }
        if let Some(salinity) = update.salinity {
            reading.salinity = Some(salinity);
        }
        if let Some(notes) = update.notes {
            reading.notes = Some(notes);
        }
        Ok(())
    }

    pub fn delete_water_quality(&mut self, id: &str) -> Result<WaterQuality, AquaforgeError> {
        let index = self
            .water_quality
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| not_found("water quality", id))?;
        Ok(self.water_quality.remove(index))
    }

    /// Drops every collection.
    pub fn reset(&mut self) {
        debug!("clearing all records");
        *self = Self::default();
    }
}

impl PondRecords for AppState {
    fn pond(&self, pond_id: &str) -> Option<&Pond> {
        self.ponds.iter().find(|p| p.id == pond_id)
    }

    fn feed_logs(&self) -> &[FeedLog] {
        &self.feed_logs
    }

    fn samplings(&self) -> &[Sampling] {
        &self.samplings
    }

    fn mortalities(&self) -> &[Mortality] {
        &self.mortalities
    }

    fn water_quality(&self) -> &[WaterQuality] {
        &self.water_quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::derive_for;
    use aquaforge_schemas::pond::Species;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn state() -> AppState {
        let mut state = AppState::new();
        state
            .add_pond(Pond::from_average_weight("k1", "Kolam 1", Species::Tilapia, 200, 10.0, date(1), 60))
            .unwrap();
        state
    }

    fn feed(id: &str, grams: f64) -> FeedLog {
        FeedLog {
            id: id.to_string(),
            pond_id: "k1".to_string(),
            date: date(2),
            time: "08:00".to_string(),
            feed_type: "Pelet".to_string(),
            feed_given: grams,
            feed_leftover: None,
        }
    }

    #[test]
    fn duplicate_pond_is_rejected() {
        let mut state = state();
        let again = state.ponds[0].clone();
        assert!(matches!(state.add_pond(again), Err(AquaforgeError::DuplicatePond(id)) if id == "k1"));
    }

    #[test]
    fn one_sampling_per_pond_and_date() {
        let mut state = state();
        let sampling = Sampling {
            id: "s1".to_string(),
            pond_id: "k1".to_string(),
            day: 9,
            date: date(10),
            sampled_count: 10,
            sample_weights: vec![14.0],
            sample_lengths: None,
            notes: None,
        };
        state.add_sampling(sampling.clone()).unwrap();
        let second = Sampling { id: "s2".to_string(), ..sampling.clone() };
        assert!(matches!(
            state.add_sampling(second),
            Err(AquaforgeError::DuplicateSampling { .. })
        ));

        let other_pond = Sampling { id: "s3".to_string(), pond_id: "k2".to_string(), ..sampling };
        assert!(state.add_sampling(other_pond).is_ok());
    }

    fn weighing(id: &str, day: i64, on: NaiveDate, grams: f64) -> Sampling {
        Sampling {
            id: id.to_string(),
            pond_id: "k1".to_string(),
            day,
            date: on,
            sampled_count: 1,
            sample_weights: vec![grams],
            sample_lengths: None,
            notes: None,
        }
    }

    #[test]
    fn sampling_day_follows_the_date_not_the_caller() {
        let mut state = state();
        state.add_sampling(weighing("late", 29, date(30), 50.0)).unwrap();
        // Claims day 99 but was taken on day 4.
        state.add_sampling(weighing("early", 99, date(5), 12.0)).unwrap();
        assert_eq!(state.samplings[1].day, 4);

        let vars = derive_for(&state, "k1", date(31)).unwrap();
        assert_eq!(vars.wt_ind, 50.0);
        assert_eq!(vars.latest_sampling_day, Some(29));
    }

    #[test]
    fn sampling_days_track_pond_start_and_sampling_date_edits() {
        let mut state = state();
        state.add_sampling(weighing("s1", 0, date(11), 14.0)).unwrap();
        assert_eq!(state.samplings[0].day, 10);

        state
            .update_pond("k1", PondUpdate { start_date: Some(date(6)), ..Default::default() })
            .unwrap();
        assert_eq!(state.samplings[0].day, 5);

        state
            .update_sampling("s1", SamplingUpdate { date: Some(date(20)), ..Default::default() })
            .unwrap();
        assert_eq!(state.samplings[0].date, date(20));
        assert_eq!(state.samplings[0].day, 14);
    }

    #[test]
    fn moving_a_sampling_onto_a_taken_date_is_rejected() {
        let mut state = state();
        state.add_sampling(weighing("s1", 0, date(10), 14.0)).unwrap();
        state.add_sampling(weighing("s2", 0, date(20), 18.0)).unwrap();
        assert!(matches!(
            state.update_sampling("s2", SamplingUpdate { date: Some(date(10)), ..Default::default() }),
            Err(AquaforgeError::DuplicateSampling { .. })
        ));
        assert_eq!(state.samplings[1].date, date(20));
    }

    #[test]
    fn samplings_loaded_before_their_pond_get_their_day_on_pond_arrival() {
        let mut state = AppState::new();
        state.add_sampling(weighing("s1", 77, date(15), 20.0)).unwrap();
        assert_eq!(state.samplings[0].day, 77);
        state
            .add_pond(Pond::from_average_weight("k1", "Kolam 1", Species::Tilapia, 200, 10.0, date(1), 60))
            .unwrap();
        assert_eq!(state.samplings[0].day, 14);
    }

    #[test]
    fn rejected_file_leaves_state_untouched() {
        let mut state = state();
        state.add_sampling(weighing("s1", 0, date(10), 14.0)).unwrap();

        let file = RecordFile {
            schema_version: "1".to_string(),
            ponds: vec![Pond::from_average_weight("k2", "Kolam 2", Species::Catfish, 100, 5.0, date(1), 30)],
            feed_logs: vec![feed("f1", 100.0)],
            samplings: vec![weighing("s2", 0, date(10), 15.0)],
            mortalities: Vec::new(),
            water_quality: Vec::new(),
        };
        assert!(matches!(
            state.merge(file),
            Err(AquaforgeError::DuplicateSampling { .. })
        ));
        assert_eq!(state.ponds.len(), 1);
        assert_eq!(state.samplings.len(), 1);
        assert!(state.feed_logs.is_empty());
    }

    #[test]
    fn edits_are_seen_by_the_next_derivation() {
        let mut state = state();
        state.add_feed_log(feed("f1", 100.0));
        state.add_feed_log(feed("f2", 150.0));
        state.add_feed_log(feed("f3", 250.0));
        let vars = derive_for(&state, "k1", date(11)).unwrap();
        assert_eq!(vars.feed_total, 500.0);

        state
            .update_feed_log("f2", FeedLogUpdate { feed_given: Some(50.0), ..Default::default() })
            .unwrap();
        state.delete_feed_log("f3").unwrap();
        let vars = derive_for(&state, "k1", date(11)).unwrap();
        assert_eq!(vars.feed_total, 150.0);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut state = state();
        assert!(matches!(
            state.delete_feed_log("nope"),
            Err(AquaforgeError::RecordNotFound { kind: "feed log", .. })
        ));
        assert!(state.update_pond("k9", PondUpdate::default()).is_err());
        assert!(matches!(
            derive_for(&state, "k9", date(3)),
            Err(AquaforgeError::PondNotFound(_))
        ));
    }

    #[test]
    fn update_pond_and_reset() {
        let mut state = state();
        state
            .update_pond("k1", PondUpdate { initial_stock: Some(250), ..Default::default() })
            .unwrap();
        assert_eq!(state.ponds[0].initial_stock, 250);
        state.reset();
        assert!(state.ponds.is_empty());
    }
}
