//! Efficiency scatter: cycles vs proving time on log-log axes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use zkbench_report::{status_color, BenchmarkRecord, Dataset, ZkvmStatus};

use crate::{present, to_color, EFFICIENCY_BASENAME, SCATTER_CHART_SIZE};

const SCATTER_TITLE: &str = "zkVM Efficiency: Cycles vs Proving Time";

/// One point per record that has both a cycle count and a proving time.
/// Completed runs are circles, everything else a triangle; each point is
/// annotated with the zkVM name and its formatted proving-time label.
pub fn render_efficiency_scatter(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let png = out_dir.join(format!("{EFFICIENCY_BASENAME}.png"));
    {
        let root = BitMapBackend::new(&png, SCATTER_CHART_SIZE).into_drawing_area();
        draw_scatter(&root, dataset)?;
        present(root, &png)?;
    }

    let svg = out_dir.join(format!("{EFFICIENCY_BASENAME}.svg"));
    {
        let root = SVGBackend::new(&svg, SCATTER_CHART_SIZE).into_drawing_area();
        draw_scatter(&root, dataset)?;
        present(root, &svg)?;
    }

    Ok(vec![png, svg])
}

fn draw_scatter<DB>(root: &DrawingArea<DB, Shift>, dataset: &Dataset) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).context("filling chart background")?;

    let records: Vec<&BenchmarkRecord> = dataset.with_complete_data().collect();

    let (x_lo, x_hi) = log_bounds(records.iter().filter_map(|r| r.cycle_count.map(|c| c as f64)));
    let (y_lo, y_hi) = log_bounds(records.iter().filter_map(|r| r.proving_time_seconds));

    let mut chart = ChartBuilder::on(root)
        .caption(SCATTER_TITLE, ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())
        .context("building efficiency scatter axes")?;

    chart
        .configure_mesh()
        .x_desc("VM Cycles")
        .y_desc("Proving Time (seconds)")
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .context("drawing efficiency scatter mesh")?;

    let name_font = ("sans-serif", 15).into_font();
    let label_font = ("sans-serif", 13).into_font();

    for record in &records {
        let x = record.cycle_count.unwrap_or(0) as f64;
        let y = record.proving_time_seconds.unwrap_or(0.0);
        // Zero values have no position on a log axis; leave them out like
        // any other record the scatter cannot place.
        if x <= 0.0 || y <= 0.0 {
            continue;
        }
        let color = to_color(status_color(record.status));
        let name = record.name.clone();
        let time_label = record.proving_time_label().unwrap_or_default();

        // Fixed pixel offsets keep annotations legible regardless of the
        // log-log position of the point.
        if record.status == ZkvmStatus::Completed {
            chart
                .draw_series(std::iter::once(
                    EmptyElement::at((x, y))
                        + Circle::new((0, 0), 9, color.filled())
                        + Circle::new((0, 0), 9, BLACK.stroke_width(1))
                        + Text::new(name, (12, -18), name_font.clone())
                        + Text::new(time_label, (12, -2), label_font.clone()),
                ))
                .context("drawing efficiency scatter point")?;
        } else {
            chart
                .draw_series(std::iter::once(
                    EmptyElement::at((x, y))
                        + TriangleMarker::new((0, 0), 10, color.filled())
                        + Text::new(name, (12, -18), name_font.clone())
                        + Text::new(time_label, (12, -2), label_font.clone()),
                ))
                .context("drawing efficiency scatter point")?;
        }
    }

    Ok(())
}

/// Decade-aligned bounds around a set of positive values, with a fallback
/// window when the set is empty.
fn log_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| *v > 0.0) {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (1.0, 10.0);
    }
    (10f64.powf(min.log10().floor()), 10f64.powf(max.log10().ceil()).max(max * 2.0))
}
