use aquaforge_core::{
    display::{self, BiomassMode},
    interpretation::{interpret_fcr, interpret_sr},
    series,
    state::AppState,
    PondVariables,
};
use aquaforge_schemas::{metric::MetricKind, pond::Pond};

pub fn print_pond_list(state: &AppState) {
    if state.ponds.is_empty() {
        println!("No ponds recorded.");
        return;
    }
    println!("{:<10} {:<20} {:<8} {:>8} {:>12}  {}", "ID", "Name", "Species", "N0", "W0 (g)", "Start");
    for pond in &state.ponds {
        println!(
            "{:<10} {:<20} {:<8} {:>8} {:>12.2}  {}",
            pond.id,
            pond.name,
            pond.species.label(),
            pond.initial_stock,
            pond.initial_total_weight,
            pond.start_date
        );
    }
}

/// Prints the dashboard of one pond. `mode` overrides the per-metric default
/// formatting of the biomass traces.
pub fn print_pond_report(
    state: &AppState,
    pond: &Pond,
    vars: &PondVariables,
    mode: Option<BiomassMode>,
) {
    println!("\n--- [Laporan] {} ({}) ---", pond.name, pond.id);
    println!("========================================");
    println!("Spesies:             {}", pond.species.label());
    println!("Tanggal tebar:       {}", pond.start_date);
    println!("Lama pemeliharaan:   {} hari (rencana {} hari)", vars.days, pond.duration_days);
    println!("Populasi awal (N0):  {} ekor", vars.n0);
    println!("Populasi kini (Nt):  {} ekor", vars.nt);
    println!("Bobot awal (W0):     {:.2} g/ekor, {:.2} g total", vars.w0_ind, vars.w0_total);
    println!("Bobot kini (Wt):     {:.2} g/ekor, {:.2} g total", vars.wt_ind, vars.wt_total);
    println!("Bobot mati (D):      {:.2} g", vars.dead_weight);
    println!("Total pakan (F):     {:.2} g", vars.feed_total);
    if vars.nt < 0 {
        println!("PERINGATAN: kematian tercatat melebihi populasi awal.");
    }
    println!("----------------------------------------");

    let metrics = vars.metrics();
    for kind in MetricKind::ALL.into_iter().filter(|k| pond.shows(*k)) {
        let mode = mode.unwrap_or_else(|| BiomassMode::for_metric(kind));
        let shown = display::build(&vars.inputs_for(kind), mode);
        println!("\n{}", shown.name);
        println!("  Rumus:   {}", shown.formula);
        println!("  Hitung:  {}", shown.calculation);
        println!("  Hasil:   {} {}", shown.result, shown.unit);
        match kind {
            MetricKind::Sr => println!("  Status:  {}", interpret_sr(metrics.sr)),
            MetricKind::Fcr => println!("  Status:  {}", interpret_fcr(metrics.fcr)),
            _ => {}
        }
    }

    println!("\n----------------------------------------");
    match series::latest_water_quality(&pond.id, &state.water_quality) {
        Some(reading) => {
            println!("Kualitas air terakhir ({}):", reading.timestamp.format("%Y-%m-%d %H:%M"));
            println!("  - pH:     {:.1}", reading.ph);
            println!("  - Suhu:   {:.1} °C", reading.temperature);
            println!("  - DO:     {:.1} mg/L", reading.dissolved_oxygen);
            if let Some(salinity) = reading.salinity {
                println!("  - Salinitas: {:.1} ppt", salinity);
            }
        }
        None => println!("Belum ada data kualitas air."),
    }
    println!("========================================");
}

/// Prints a single formula explanation, fraction form included.
pub fn print_formula(vars: &PondVariables, kind: MetricKind, mode: Option<BiomassMode>) {
    let mode = mode.unwrap_or_else(|| BiomassMode::for_metric(kind));
    let shown = display::build(&vars.inputs_for(kind), mode);
    println!("{} [{}]", shown.name, kind.label());
    println!("{}", shown.formula);
    match &shown.fraction {
        Some(fraction) => {
            let width = fraction
                .numerator_calc
                .chars()
                .count()
                .max(fraction.denominator_calc.chars().count());
            println!("  {:^width$}", fraction.numerator_calc, width = width);
            println!("  {}  {}", "─".repeat(width), fraction.suffix.unwrap_or(""));
            println!("  {:^width$}", fraction.denominator_calc, width = width);
        }
        None => println!("{}", shown.calculation),
    }
    println!("= {} {}", shown.result, shown.unit);
}
