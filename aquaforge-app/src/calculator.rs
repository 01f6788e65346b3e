//! Manual calculator: the same formulas applied to numbers typed on the
//! command line instead of pond records.

use anyhow::{bail, Result};
use aquaforge_core::{
    display::{self, BiomassMode, MetricInputs},
    formulas,
};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalcIndex {
    /// Total feed: any number of feed amounts.
    Tkp,
    /// Nt N0
    Sr,
    /// F Wt D W0 (total biomass)
    Fcr,
    /// Wt W0 t
    Sgr,
    /// Wt W0 t
    Rgr,
    /// Wt D W0 F (total biomass)
    Epp,
    /// Wt W0
    AbsoluteWeight,
    /// Lt L0
    AbsoluteLength,
    /// Bg Bs Fs
    Fecundity,
    /// Bg Bt
    Gsi,
    /// fertilized total
    Fr,
    /// hatched fertilized
    Hr,
    /// liver body
    Hsi,
}

fn expect_args(index: CalcIndex, values: &[f64], count: usize) -> Result<()> {
    if values.len() != count {
        bail!("{:?} takes {} values, got {}", index, count, values.len());
    }
    Ok(())
}

/// Builds the metric inputs for the pond metrics, `None` for the
/// reproductive indices.
fn metric_inputs(index: CalcIndex, v: &[f64]) -> Result<Option<MetricInputs>> {
    let inputs = match index {
        CalcIndex::Tkp => MetricInputs::Tkp { feed: formulas::total_feed(v) },
        CalcIndex::Sr => {
            expect_args(index, v, 2)?;
            MetricInputs::Sr { nt: v[0], n0: v[1] }
        }
        CalcIndex::Fcr => {
            expect_args(index, v, 4)?;
            MetricInputs::Fcr { feed: v[0], wt: v[1], dead_weight: v[2], w0: v[3] }
        }
        CalcIndex::Sgr => {
            expect_args(index, v, 3)?;
            MetricInputs::Sgr { wt: v[0], w0: v[1], days: v[2] }
        }
        CalcIndex::Rgr => {
            expect_args(index, v, 3)?;
            MetricInputs::Rgr { wt: v[0], w0: v[1], days: v[2] }
        }
        CalcIndex::Epp => {
            expect_args(index, v, 4)?;
            MetricInputs::Epp { wt: v[0], dead_weight: v[1], w0: v[2], feed: v[3] }
        }
        CalcIndex::AbsoluteWeight => {
            expect_args(index, v, 2)?;
            MetricInputs::AbsoluteWeight { wt: v[0], w0: v[1] }
        }
        CalcIndex::AbsoluteLength => {
            expect_args(index, v, 2)?;
            MetricInputs::AbsoluteLength { lt: v[0], l0: v[1] }
        }
        _ => return Ok(None),
    };
    Ok(Some(inputs))
}

/// Evaluates `index` and returns the lines to print.
pub fn calculate(index: CalcIndex, values: &[f64]) -> Result<Vec<String>> {
    if let Some(inputs) = metric_inputs(index, values)? {
        let shown = display::build(&inputs, BiomassMode::for_metric(inputs.kind()));
        return Ok(vec![
            shown.name.to_string(),
            shown.formula.to_string(),
            shown.calculation,
            format!("= {} {}", shown.result, shown.unit).trim_end().to_string(),
        ]);
    }

    let (name, formula, value, unit) = match index {
        CalcIndex::Fecundity => {
            expect_args(index, values, 3)?;
            (
                "Fekunditas",
                "F = (Bg / Bs) × Fs",
                formulas::fecundity(values[0], values[1], values[2]),
                "butir",
            )
        }
        CalcIndex::Gsi => {
            expect_args(index, values, 2)?;
            (
                "Gonado Somatic Index (GSI)",
                "GSI = (Bg / Bt) × 100%",
                formulas::gonadosomatic_index(values[0], values[1]),
                "%",
            )
        }
        CalcIndex::Fr => {
            expect_args(index, values, 2)?;
            (
                "Fertilization Rate (FR)",
                "FR = (telur terbuahi / total telur) × 100%",
                formulas::fertilization_rate(values[0], values[1]),
                "%",
            )
        }
        CalcIndex::Hr => {
            expect_args(index, values, 2)?;
            (
                "Hatching Rate (HR)",
                "HR = (telur menetas / telur terbuahi) × 100%",
                formulas::hatching_rate(values[0], values[1]),
                "%",
            )
        }
        CalcIndex::Hsi => {
            expect_args(index, values, 2)?;
            (
                "Hepato Somatic Index (HSI)",
                "HSI = (bobot hati / bobot tubuh) × 100%",
                formulas::hepatosomatic_index(values[0], values[1]),
                "%",
            )
        }
        _ => bail!("{:?} is not a reproductive index", index),
    };

    Ok(vec![
        name.to_string(),
        formula.to_string(),
        format!("= {} {}", display::format::to_fixed(value, 2), unit),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fcr_from_raw_numbers() {
        let lines = calculate(CalcIndex::Fcr, &[80_000.0, 42_750.0, 2000.0, 30_000.0]).unwrap();
        assert_eq!(lines[2], "FCR = 80.000 / ((42.750 + 2.000) - 30.000)");
        assert_eq!(lines[3], "= 5.424");
    }

    #[test]
    fn tkp_accepts_any_number_of_amounts() {
        let lines = calculate(CalcIndex::Tkp, &[100.0, 150.0, 250.0]).unwrap();
        assert_eq!(lines.last().unwrap(), "= 500.00 gram");
    }

    #[test]
    fn reproductive_index() {
        let lines = calculate(CalcIndex::Gsi, &[12.0, 240.0]).unwrap();
        assert_eq!(lines[2], "= 5.00 %");
    }

    #[test]
    fn wrong_arity_is_an_error() {
        assert!(calculate(CalcIndex::Sr, &[10.0]).is_err());
        assert!(calculate(CalcIndex::Hr, &[1.0, 2.0, 3.0]).is_err());
    }
}
