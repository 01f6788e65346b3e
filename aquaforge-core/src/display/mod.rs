//! Formula explanations: the symbolic formula, the same formula with the
//! pond's values substituted in, and the rounded result.

pub mod format;

use crate::formulas;
use aquaforge_schemas::metric::MetricKind;
use serde::Serialize;

/// How biomass values are rendered in the substitution text of the
/// biomass-based metrics (FCR and EPP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomassMode {
    /// Whole-pond biomass: grouped thousands, up to two decimals.
    Total,
    /// Per-individual weight: two fixed decimals.
    #[default]
    Individual,
}

impl BiomassMode {
    /// The mode the dashboard uses for each metric.
    pub fn for_metric(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Fcr | MetricKind::Epp => BiomassMode::Total,
            _ => BiomassMode::Individual,
        }
    }

    fn render(self, value: f64) -> String {
        match self {
            BiomassMode::Total => format::grouped(value),
            BiomassMode::Individual => format::individual(value),
        }
    }
}

/// Exactly the variables one metric's formula needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum MetricInputs {
    #[serde(rename = "TKP")]
    Tkp { feed: f64 },
    #[serde(rename = "SR")]
    Sr { n0: f64, nt: f64 },
    #[serde(rename = "FCR")]
    Fcr { feed: f64, w0: f64, wt: f64, dead_weight: f64 },
    #[serde(rename = "SGR")]
    Sgr { w0: f64, wt: f64, days: f64 },
    #[serde(rename = "RGR")]
    Rgr { w0: f64, wt: f64, days: f64 },
    #[serde(rename = "EPP")]
    Epp { w0: f64, wt: f64, dead_weight: f64, feed: f64 },
    AbsoluteWeight { w0: f64, wt: f64 },
    AbsoluteLength { l0: f64, lt: f64 },
}

impl MetricInputs {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricInputs::Tkp { .. } => MetricKind::Tkp,
            MetricInputs::Sr { .. } => MetricKind::Sr,
            MetricInputs::Fcr { .. } => MetricKind::Fcr,
            MetricInputs::Sgr { .. } => MetricKind::Sgr,
            MetricInputs::Rgr { .. } => MetricKind::Rgr,
            MetricInputs::Epp { .. } => MetricKind::Epp,
            MetricInputs::AbsoluteWeight { .. } => MetricKind::AbsoluteWeight,
            MetricInputs::AbsoluteLength { .. } => MetricKind::AbsoluteLength,
        }
    }

    /// Unrounded metric value.
    pub fn evaluate(&self) -> f64 {
        match *self {
            MetricInputs::Tkp { feed } => feed,
            MetricInputs::Sr { n0, nt } => formulas::survival_rate(n0, nt),
            MetricInputs::Fcr { feed, w0, wt, dead_weight } => {
                formulas::feed_conversion_ratio(feed, w0, wt, dead_weight)
            }
            MetricInputs::Sgr { w0, wt, days } => formulas::specific_growth_rate(w0, wt, days),
            MetricInputs::Rgr { w0, wt, days } => formulas::relative_growth_rate(w0, wt, days),
            MetricInputs::Epp { w0, wt, dead_weight, feed } => {
                formulas::feed_efficiency(w0, wt, dead_weight, feed)
            }
            MetricInputs::AbsoluteWeight { w0, wt } => formulas::absolute_weight_gain(w0, wt),
            MetricInputs::AbsoluteLength { l0, lt } => formulas::absolute_length_gain(l0, lt),
        }
    }
}

/// Decimal places of the displayed result.
pub fn precision(kind: MetricKind) -> usize {
    match kind {
        MetricKind::Fcr | MetricKind::Sgr | MetricKind::Rgr => 3,
        MetricKind::Tkp
        | MetricKind::Sr
        | MetricKind::Epp
        | MetricKind::AbsoluteWeight
        | MetricKind::AbsoluteLength => 2,
    }
}

/// Numerator over denominator, for rendering the formula as a fraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fraction {
    pub numerator_formula: &'static str,
    pub denominator_formula: &'static str,
    pub numerator_calc: String,
    pub denominator_calc: String,
    /// Trailing factor, e.g. `× 100%`.
    pub suffix: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaDisplay {
    pub kind: MetricKind,
    pub name: &'static str,
    pub formula: &'static str,
    pub calculation: String,
    /// Present for every ratio-shaped metric (all but TKP and the absolute gains).
    pub fraction: Option<Fraction>,
    /// Unrounded value.
    pub value: f64,
    /// `value` at the metric's fixed precision.
    pub result: String,
    pub unit: &'static str,
}

impl FormulaDisplay {
    pub fn is_fraction(&self) -> bool {
        self.fraction.is_some()
    }
}

/// Builds the explanation for one metric. `mode` only affects FCR and EPP;
/// TKP is always grouped and the individual-weight metrics always use fixed
/// decimals.
pub fn build(inputs: &MetricInputs, mode: BiomassMode) -> FormulaDisplay {
    use format::{grouped, individual, plain};

    let kind = inputs.kind();
    let value = inputs.evaluate();
    let result = format::to_fixed(value, precision(kind));

    let (name, formula, calculation, fraction, unit) = match *inputs {
        MetricInputs::Tkp { feed } => (
            "Total Konsumsi Pakan (TKP)",
            "TKP = Σ Pakan yang diberikan",
            format!("TKP = {}", grouped(feed)),
            None,
            "gram",
        ),
        MetricInputs::Sr { n0, nt } => (
            "Survival Rate (SR)",
            "SR = (Nt / N0) × 100%",
            format!("SR = ({} / {}) × 100%", plain(nt), plain(n0)),
            Some(Fraction {
                numerator_formula: "Nt",
                denominator_formula: "N0",
                numerator_calc: plain(nt),
                denominator_calc: plain(n0),
                suffix: Some("× 100%"),
            }),
            "%",
        ),
        MetricInputs::Fcr { feed, w0, wt, dead_weight } => {
            let (f, w0, wt, d) = (
                mode.render(feed),
                mode.render(w0),
                mode.render(wt),
                mode.render(dead_weight),
            );
            (
                "Feed Conversion Ratio (FCR)",
                "FCR = F / ((Wt + D) - W0)",
                format!("FCR = {f} / (({wt} + {d}) - {w0})"),
                Some(Fraction {
                    numerator_formula: "F",
                    denominator_formula: "(Wt + D) - W0",
                    numerator_calc: f,
                    denominator_calc: format!("({wt} + {d}) - {w0}"),
                    suffix: None,
                }),
                "",
            )
        }
        MetricInputs::Sgr { w0, wt, days } => {
            let (w0, wt, t) = (individual(w0), individual(wt), plain(days));
            (
                "Specific Growth Rate (SGR)",
                "SGR = ((ln Wt - ln W0) / t) × 100%",
                format!("SGR = ((ln {wt} - ln {w0}) / {t}) × 100%"),
                Some(Fraction {
                    numerator_formula: "ln Wt - ln W0",
                    denominator_formula: "t",
                    numerator_calc: format!("ln({wt}) - ln({w0})"),
                    denominator_calc: t,
                    suffix: Some("× 100%"),
                }),
                "%/hari",
            )
        }
        MetricInputs::Rgr { w0, wt, days } => {
            let (w0, wt, t) = (individual(w0), individual(wt), plain(days));
            (
                "Relative Growth Rate (RGR)",
                "RGR = ((Wt - W0) / (W0 × t)) × 100%",
                format!("RGR = (({wt} - {w0}) / ({w0} × {t})) × 100%"),
                Some(Fraction {
                    numerator_formula: "Wt - W0",
                    denominator_formula: "W0 × t",
                    numerator_calc: format!("{wt} - {w0}"),
                    denominator_calc: format!("{w0} × {t}"),
                    suffix: Some("× 100%"),
                }),
                "%/hari",
            )
        }
        MetricInputs::Epp { w0, wt, dead_weight, feed } => {
            let (f, w0, wt, d) = (
                mode.render(feed),
                mode.render(w0),
                mode.render(wt),
                mode.render(dead_weight),
            );
            (
                "Efisiensi Pemanfaatan Pakan (EPP)",
                "EPP = (((Wt + D) - W0) / F) × 100%",
                format!("EPP = ((({wt} + {d}) - {w0}) / {f}) × 100%"),
                Some(Fraction {
                    numerator_formula: "(Wt + D) - W0",
                    denominator_formula: "F",
                    numerator_calc: format!("({wt} + {d}) - {w0}"),
                    denominator_calc: f,
                    suffix: Some("× 100%"),
                }),
                "%",
            )
        }
        MetricInputs::AbsoluteWeight { w0, wt } => (
            "Bobot Mutlak",
            "Bobot Mutlak = Wt - W0",
            format!("Bobot Mutlak = {} - {}", individual(wt), individual(w0)),
            None,
            "gram",
        ),
        MetricInputs::AbsoluteLength { l0, lt } => (
            "Panjang Mutlak",
            "Panjang Mutlak = Lt - L0",
            format!("Panjang Mutlak = {} - {}", plain(lt), plain(l0)),
            None,
            "cm",
        ),
    };

    FormulaDisplay {
        kind,
        name,
        formula,
        calculation,
        fraction,
        value,
        result,
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fcr_trace_in_total_mode_groups_thousands() {
        let inputs = MetricInputs::Fcr {
            feed: 80_000.0,
            w0: 30_000.0,
            wt: 42_750.0,
            dead_weight: 2000.0,
        };
        let display = build(&inputs, BiomassMode::Total);
        assert_eq!(display.calculation, "FCR = 80.000 / ((42.750 + 2.000) - 30.000)");
        assert_eq!(display.result, "5.424");
        assert_eq!(display.unit, "");

        let fraction = display.fraction.expect("FCR is a fraction");
        assert_eq!(fraction.numerator_calc, "80.000");
        assert_eq!(fraction.denominator_calc, "(42.750 + 2.000) - 30.000");
        assert_eq!(fraction.suffix, None);
    }

    #[test]
    fn fcr_trace_in_individual_mode_uses_fixed_decimals() {
        let inputs = MetricInputs::Fcr { feed: 120.0, w0: 30.0, wt: 45.0, dead_weight: 0.0 };
        let display = build(&inputs, BiomassMode::Individual);
        assert_eq!(display.calculation, "FCR = 120.00 / ((45.00 + 0.00) - 30.00)");
        assert_eq!(display.result, "8.000");
    }

    #[test]
    fn growth_rates_ignore_mode() {
        let sgr = MetricInputs::Sgr { w0: 30.0, wt: 45.0, days: 30.0 };
        let total = build(&sgr, BiomassMode::Total);
        let individual = build(&sgr, BiomassMode::Individual);
        assert_eq!(total, individual);
        assert_eq!(total.calculation, "SGR = ((ln 45.00 - ln 30.00) / 30) × 100%");
        assert_eq!(total.fraction.unwrap().numerator_calc, "ln(45.00) - ln(30.00)");
        assert_eq!(total.result, "1.352");
        assert_eq!(total.unit, "%/hari");

        let rgr = build(&MetricInputs::Rgr { w0: 10.0, wt: 20.0, days: 1.0 }, BiomassMode::Total);
        assert_eq!(rgr.calculation, "RGR = ((20.00 - 10.00) / (10.00 × 1)) × 100%");
        assert_eq!(rgr.result, "100.000");
    }

    #[test]
    fn survival_trace_prints_counts_as_is() {
        let display = build(&MetricInputs::Sr { n0: 1000.0, nt: 950.0 }, BiomassMode::default());
        assert_eq!(display.calculation, "SR = (950 / 1000) × 100%");
        assert_eq!(display.result, "95.00");
        let fraction = display.fraction.unwrap();
        assert_eq!((fraction.numerator_formula, fraction.denominator_formula), ("Nt", "N0"));
        assert_eq!(fraction.suffix, Some("× 100%"));
    }

    #[test]
    fn sums_and_gains_are_not_fractions() {
        let tkp = build(&MetricInputs::Tkp { feed: 80_000.0 }, BiomassMode::Individual);
        assert!(!tkp.is_fraction());
        assert_eq!(tkp.calculation, "TKP = 80.000");
        assert_eq!(tkp.result, "80000.00");

        let weight = build(&MetricInputs::AbsoluteWeight { w0: 10.0, wt: 25.0 }, BiomassMode::Total);
        assert!(!weight.is_fraction());
        assert_eq!(weight.calculation, "Bobot Mutlak = 25.00 - 10.00");
        assert_eq!(weight.result, "15.00");

        let length = build(&MetricInputs::AbsoluteLength { l0: 5.0, lt: 8.5 }, BiomassMode::Total);
        assert_eq!(length.calculation, "Panjang Mutlak = 8.5 - 5");
        assert_eq!(length.result, "3.50");
        assert_eq!(length.unit, "cm");
    }

    #[test]
    fn epp_trace() {
        let inputs = MetricInputs::Epp {
            w0: 30_000.0,
            wt: 42_750.0,
            dead_weight: 2000.0,
            feed: 80_000.0,
        };
        let display = build(&inputs, BiomassMode::for_metric(MetricKind::Epp));
        assert_eq!(display.calculation, "EPP = (((42.750 + 2.000) - 30.000) / 80.000) × 100%");
        assert_eq!(display.result, "18.44");
    }

    #[test]
    fn degenerate_inputs_keep_the_zero_fallback_visible() {
        let display = build(&MetricInputs::Sgr { w0: 0.0, wt: 12.0, days: 14.0 }, BiomassMode::Individual);
        assert_eq!(display.calculation, "SGR = ((ln 12.00 - ln 0.00) / 14) × 100%");
        assert_eq!(display.result, "0.000");
    }
}
