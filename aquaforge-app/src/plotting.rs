//! PNG charts for the export command.

use anyhow::Result;
use aquaforge_core::series::SeriesPoint;
use aquaforge_schemas::water_quality::WaterQuality;
use plotters::prelude::*;
use std::path::Path;

/// Line chart of average weight per sampling day.
pub fn plot_growth(output_dir: &Path, pond_name: &str, points: &[SeriesPoint]) -> Result<()> {
    let path = output_dir.join("growth.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let min_day = points.iter().map(|p| p.day).min().unwrap_or(0).min(0);
    let max_day = points.iter().map(|p| p.day).max().unwrap_or(1).max(min_day + 1);
    let max_weight = points.iter().map(|p| p.value).fold(0.0, f64::max);
    let y_max = if max_weight > 0.0 { max_weight * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Bobot Rata-rata - {}", pond_name),
            ("sans-serif", 40).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(min_day..max_day, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Hari")
        .y_desc("Bobot (g)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().map(|p| (p.day, p.value)),
        RGBColor(20, 184, 166).stroke_width(2),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.day, p.value), 4, RGBColor(20, 184, 166).filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Temperature, pH and dissolved oxygen over the readings of one pond.
pub fn plot_water_quality(output_dir: &Path, series: &[(String, &WaterQuality)]) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }
    let path = output_dir.join("water_quality.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = series.iter().map(|(label, _)| label.clone()).collect();
    let x_max = (series.len().max(2) - 1) as f64;
    let y_max = series
        .iter()
        .map(|(_, w)| w.temperature.max(w.ph).max(w.dissolved_oxygen))
        .fold(0.0, f64::max)
        * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Kualitas Air", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max.max(1.0))?;

    let label_at = |x: &f64| labels.get(x.round() as usize).cloned().unwrap_or_default();
    chart
        .configure_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&label_at)
        .draw()?;

    let lines: [(&str, RGBColor, fn(&WaterQuality) -> f64); 3] = [
        ("Suhu (°C)", RGBColor(239, 68, 68), |w| w.temperature),
        ("pH", RGBColor(59, 130, 246), |w| w.ph),
        ("DO (mg/L)", RGBColor(34, 197, 94), |w| w.dissolved_oxygen),
    ];
    for (name, color, value) in lines {
        chart
            .draw_series(LineSeries::new(
                series.iter().enumerate().map(|(i, (_, w))| (i as f64, value(w))),
                color.stroke_width(2),
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
