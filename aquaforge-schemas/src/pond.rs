//! Pond configuration as entered when a cultivation cycle starts.

use crate::metric::MetricKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cultivated species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Catfish,
    Tilapia,
    Shrimp,
    #[serde(other)]
    Other,
}

impl Species {
    /// Local name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Species::Catfish => "Lele",
            Species::Tilapia => "Nila",
            Species::Shrimp => "Udang",
            Species::Other => "Lainnya",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single pond and its stocking parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pond {
    pub id: String,
    pub name: String,
    pub species: Species,
    /// Number of individuals stocked (N0).
    pub initial_stock: u64,
    /// Total biomass at stocking in grams, i.e. average weight × N0.
    pub initial_total_weight: f64,
    /// Average length at stocking in cm (L0).
    #[serde(default)]
    pub initial_average_length: Option<f64>,
    pub start_date: NaiveDate,
    /// Planned cultivation length. Informational only; growth rates use the
    /// elapsed days.
    pub duration_days: u32,
    /// Metrics shown for this pond. Empty means all of them.
    #[serde(default)]
    pub selected_modules: Vec<MetricKind>,
}

impl Pond {
    /// Builds a pond from the average stocking weight, storing the total biomass.
    pub fn from_average_weight(
        id: impl Into<String>,
        name: impl Into<String>,
        species: Species,
        initial_stock: u64,
        average_weight: f64,
        start_date: NaiveDate,
        duration_days: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species,
            initial_stock,
            initial_total_weight: average_weight * initial_stock as f64,
            initial_average_length: None,
            start_date,
            duration_days,
            selected_modules: Vec::new(),
        }
    }

    /// Whether `kind` should be displayed for this pond.
    pub fn shows(&self, kind: MetricKind) -> bool {
        self.selected_modules.is_empty() || self.selected_modules.contains(&kind)
    }
}

/// Partial update for a pond; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PondUpdate {
    pub name: Option<String>,
    pub species: Option<Species>,
    pub initial_stock: Option<u64>,
    pub initial_total_weight: Option<f64>,
    pub initial_average_length: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub duration_days: Option<u32>,
    pub selected_modules: Option<Vec<MetricKind>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_weight_is_stored_as_biomass() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let pond = Pond::from_average_weight("k1", "Kolam 1", Species::Catfish, 1000, 30.0, start, 60);
        assert_eq!(pond.initial_total_weight, 30_000.0);
        assert!(pond.shows(MetricKind::Fcr));
    }

    #[test]
    fn unknown_species_deserializes_as_other() {
        let species: Species = serde_yaml::from_str("Carp").unwrap();
        assert_eq!(species, Species::Other);
        assert_eq!(species.label(), "Lainnya");
    }

    #[test]
    fn selected_modules_restrict_display() {
        let yaml = r#"
id: k2
name: Kolam Nila
species: Tilapia
initial_stock: 500
initial_total_weight: 5000
start_date: 2024-01-10
duration_days: 90
selected_modules: [SR, FCR]
"#;
        let pond: Pond = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(pond.initial_average_length, None);
        assert!(pond.shows(MetricKind::Sr));
        assert!(!pond.shows(MetricKind::Sgr));
    }
}
