use anyhow::{Context, Result};
use aquaforge_core::{
    derive_for,
    display::BiomassMode,
    error::AquaforgeError,
    logger::{self, MetricsLogger},
    series,
    PondRecords,
};
use aquaforge_schemas::metric::MetricKind;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::{fs, path::PathBuf};

mod calculator;
mod config;
mod plotting;
mod report;

#[derive(Debug, Parser)]
#[command(name = "aquaforge", version, about = "Aquaculture pond performance metrics")]
struct Cli {
    /// Directory holding the YAML record files.
    #[arg(long, global = true, default_value = "./data")]
    data: PathBuf,

    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Total,
    Individual,
}

impl From<ModeArg> for BiomassMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Total => BiomassMode::Total,
            ModeArg::Individual => BiomassMode::Individual,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the recorded ponds.
    Ponds,
    /// Full metrics report for one pond.
    Report {
        #[arg(long)]
        pond: String,
        /// Number formatting for the biomass traces of FCR and EPP.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Formula explanation for one metric (SR, FCR, SGR, RGR, EPP, TKP,
    /// AbsoluteWeight, AbsoluteLength).
    Explain {
        metric: String,
        #[arg(long)]
        pond: String,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Write CSV snapshots, growth series and charts for one pond.
    Export {
        #[arg(long)]
        pond: String,
        #[arg(long, default_value = "./exports")]
        out: PathBuf,
    },
    /// Evaluate a formula on raw numbers.
    Calc {
        #[arg(value_enum)]
        index: calculator::CalcIndex,
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let as_of = cli
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    match cli.command {
        Command::Calc { index, values } => {
            for line in calculator::calculate(index, &values)? {
                println!("{}", line);
            }
        }
        Command::Ponds => {
            let state = config::load_state(&cli.data)?;
            report::print_pond_list(&state);
        }
        Command::Report { pond, mode } => {
            let state = config::load_state(&cli.data)?;
            let vars = derive_for(&state, &pond, as_of)?;
            let pond = state
                .pond(&pond)
                .ok_or_else(|| AquaforgeError::PondNotFound(pond.clone()))?;
            report::print_pond_report(&state, pond, &vars, mode.map(Into::into));
        }
        Command::Explain { metric, pond, mode } => {
            let kind = MetricKind::from_code(&metric)
                .ok_or_else(|| AquaforgeError::UnknownMetric(metric.clone()))?;
            let state = config::load_state(&cli.data)?;
            let vars = derive_for(&state, &pond, as_of)?;
            report::print_formula(&vars, kind, mode.map(Into::into));
        }
        Command::Export { pond, out } => {
            let state = config::load_state(&cli.data)?;
            let vars = derive_for(&state, &pond, as_of)?;
            let pond = state
                .pond(&pond)
                .ok_or_else(|| AquaforgeError::PondNotFound(pond.clone()))?;

            let output_dir = out.join(format!("{}_{}", pond.id, as_of.format("%Y%m%d")));
            fs::create_dir_all(&output_dir)
                .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

            let snapshot_path = output_dir.join("snapshot.csv");
            let mut metrics_log = MetricsLogger::new(&snapshot_path.to_string_lossy())
                .with_context(|| format!("Failed to create {:?}", snapshot_path))?;
            metrics_log.log_snapshot(&vars, as_of)?;

            let growth = series::growth_series(pond, &state.samplings);
            logger::write_series(&output_dir.join("growth.csv").to_string_lossy(), &growth)?;
            let lengths = series::length_series(&pond.id, &state.samplings);
            if !lengths.is_empty() {
                logger::write_series(&output_dir.join("length.csv").to_string_lossy(), &lengths)?;
            }

            plotting::plot_growth(&output_dir, &pond.name, &growth)?;
            let water = series::water_quality_series(&pond.id, &state.water_quality);
            plotting::plot_water_quality(&output_dir, &water)?;

            println!("Export complete. Results are in '{}'", output_dir.display());
        }
    }

    Ok(())
}
