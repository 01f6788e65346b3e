//! Qualitative classification of survival rate and FCR.
//!
//! Thresholds are evaluated top-down and the first match wins.

use serde::Serialize;
use std::fmt;

/// Presentation hint attached to a status. The renderer decides what the
/// colour actually looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SurvivalStatus {
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl SurvivalStatus {
    pub fn label(self) -> &'static str {
        match self {
            SurvivalStatus::VeryGood => "Sangat Baik",
            SurvivalStatus::Good => "Baik",
            SurvivalStatus::Fair => "Cukup",
            SurvivalStatus::Poor => "Kurang",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            SurvivalStatus::VeryGood => Tone::Green,
            SurvivalStatus::Good => Tone::Blue,
            SurvivalStatus::Fair => Tone::Yellow,
            SurvivalStatus::Poor => Tone::Red,
        }
    }
}

impl fmt::Display for SurvivalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FcrStatus {
    VeryGood,
    Standard,
    /// Too much feed per gram gained; the feeding regime should be checked.
    High,
}

impl FcrStatus {
    pub fn label(self) -> &'static str {
        match self {
            FcrStatus::VeryGood => "Sangat Baik",
            FcrStatus::Standard => "Standar",
            FcrStatus::High => "Tinggi (Cek Pakan)",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            FcrStatus::VeryGood => Tone::Green,
            FcrStatus::Standard => Tone::Yellow,
            FcrStatus::High => Tone::Orange,
        }
    }
}

impl fmt::Display for FcrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a survival rate given in percent.
pub fn interpret_sr(sr: f64) -> SurvivalStatus {
    if sr >= 90.0 {
        SurvivalStatus::VeryGood
    } else if sr >= 80.0 {
        SurvivalStatus::Good
    } else if sr >= 70.0 {
        SurvivalStatus::Fair
    } else {
        SurvivalStatus::Poor
    }
}

/// Classifies a feed conversion ratio.
pub fn interpret_fcr(fcr: f64) -> FcrStatus {
    if fcr < 1.3 {
        FcrStatus::VeryGood
    } else if fcr <= 1.5 {
        FcrStatus::Standard
    } else {
        FcrStatus::High
    }
}
