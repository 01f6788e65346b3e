use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of performance indicators a pond can be evaluated on.
///
/// The serialized names match the short codes used in data files and on the
/// command line (`SR`, `FCR`, `AbsoluteWeight`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    #[serde(rename = "TKP")]
    Tkp,
    #[serde(rename = "SR")]
    Sr,
    #[serde(rename = "FCR")]
    Fcr,
    #[serde(rename = "SGR")]
    Sgr,
    #[serde(rename = "RGR")]
    Rgr,
    #[serde(rename = "EPP")]
    Epp,
    AbsoluteWeight,
    AbsoluteLength,
}

impl MetricKind {
    /// Every metric, in dashboard order.
    pub const ALL: [MetricKind; 8] = [
        MetricKind::Tkp,
        MetricKind::Sr,
        MetricKind::Fcr,
        MetricKind::Sgr,
        MetricKind::Rgr,
        MetricKind::Epp,
        MetricKind::AbsoluteWeight,
        MetricKind::AbsoluteLength,
    ];

    /// Short code, as written in data files.
    pub fn code(self) -> &'static str {
        match self {
            MetricKind::Tkp => "TKP",
            MetricKind::Sr => "SR",
            MetricKind::Fcr => "FCR",
            MetricKind::Sgr => "SGR",
            MetricKind::Rgr => "RGR",
            MetricKind::Epp => "EPP",
            MetricKind::AbsoluteWeight => "AbsoluteWeight",
            MetricKind::AbsoluteLength => "AbsoluteLength",
        }
    }

    /// Human-readable module label shown on the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Tkp => "Total Konsumsi Pakan",
            MetricKind::Sr => "Survival Rate",
            MetricKind::Fcr => "Feed Conversion Ratio",
            MetricKind::Sgr => "Specific Growth Rate",
            MetricKind::Rgr => "Relative Growth Rate",
            MetricKind::Epp => "Efisiensi Pakan",
            MetricKind::AbsoluteWeight => "Bobot Mutlak",
            MetricKind::AbsoluteLength => "Panjang Mutlak",
        }
    }

    /// Parses a short code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back_case_insensitively() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(MetricKind::from_code("fcr"), Some(MetricKind::Fcr));
        assert_eq!(MetricKind::from_code("absoluteweight"), Some(MetricKind::AbsoluteWeight));
        assert_eq!(MetricKind::from_code("HSI"), None);
    }

    #[test]
    fn serialized_names_are_short_codes() {
        let yaml = serde_yaml::to_string(&vec![MetricKind::Sr, MetricKind::AbsoluteLength]).unwrap();
        assert_eq!(yaml, "- SR\n- AbsoluteLength\n");
    }
}
