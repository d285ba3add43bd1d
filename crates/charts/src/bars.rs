//! Bar-chart renderers: proving time (linear y), cycle counts (log y),
//! and the combined side-by-side panel.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use zkbench_report::{cycle_color, format_cycles, status_color, BenchmarkRecord, Dataset};

use crate::{
    present, to_color, BAR_CHART_SIZE, COMBINED_BASENAME, COMBINED_CHART_SIZE,
    CYCLES_BASENAME, PROVING_TIME_BASENAME,
};

const PROVING_TITLE: &str = "XMSS Signature Verification - Proving Time Comparison";
const CYCLES_TITLE: &str = "XMSS Signature Verification - VM Cycles Comparison";
const COMBINED_TITLE: &str = "leanSig XMSS Verification - zkVM Benchmark Comparison";

/// Proving-time bar chart: one bar per record that has a proving time,
/// status colors, value labels, status legend.
pub fn render_proving_time(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let png = out_dir.join(format!("{PROVING_TIME_BASENAME}.png"));
    {
        let root = BitMapBackend::new(&png, BAR_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).context("filling chart background")?;
        draw_proving_panel(&root, dataset, PROVING_TITLE, true)?;
        present(root, &png)?;
    }

    let svg = out_dir.join(format!("{PROVING_TIME_BASENAME}.svg"));
    {
        let root = SVGBackend::new(&svg, BAR_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).context("filling chart background")?;
        draw_proving_panel(&root, dataset, PROVING_TITLE, true)?;
        present(root, &svg)?;
    }

    Ok(vec![png, svg])
}

/// Cycle-count bar chart: log y-axis, magnitude colors, `M`/`K` labels.
pub fn render_cycles(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let png = out_dir.join(format!("{CYCLES_BASENAME}.png"));
    {
        let root = BitMapBackend::new(&png, BAR_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).context("filling chart background")?;
        draw_cycles_panel(&root, dataset, CYCLES_TITLE)?;
        present(root, &png)?;
    }

    let svg = out_dir.join(format!("{CYCLES_BASENAME}.svg"));
    {
        let root = SVGBackend::new(&svg, BAR_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).context("filling chart background")?;
        draw_cycles_panel(&root, dataset, CYCLES_TITLE)?;
        present(root, &svg)?;
    }

    Ok(vec![png, svg])
}

/// Both bar charts side by side under one overall title.
pub fn render_combined(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let png = out_dir.join(format!("{COMBINED_BASENAME}.png"));
    {
        let root = BitMapBackend::new(&png, COMBINED_CHART_SIZE).into_drawing_area();
        draw_combined(&root, dataset)?;
        present(root, &png)?;
    }

    let svg = out_dir.join(format!("{COMBINED_BASENAME}.svg"));
    {
        let root = SVGBackend::new(&svg, COMBINED_CHART_SIZE).into_drawing_area();
        draw_combined(&root, dataset)?;
        present(root, &svg)?;
    }

    Ok(vec![png, svg])
}

fn draw_combined<DB>(root: &DrawingArea<DB, Shift>, dataset: &Dataset) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).context("filling chart background")?;
    let titled = root
        .titled(COMBINED_TITLE, ("sans-serif", 28).into_font())
        .context("drawing combined chart title")?;
    let panels = titled.split_evenly((1, 2));
    draw_proving_panel(&panels[0], dataset, "Proving Time", false)?;
    draw_cycles_panel(&panels[1], dataset, "VM Cycles (RISC-V based)")?;
    Ok(())
}

fn draw_proving_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    title: &str,
    with_legend: bool,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let records: Vec<&BenchmarkRecord> = dataset.with_proving_time().collect();
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();

    let max = records
        .iter()
        .filter_map(|r| r.proving_time_seconds)
        .fold(0.0_f64, f64::max);
    // Headroom for the value labels above the bars.
    let y_max = if max > 0.0 { max * 1.15 } else { 1.0 };
    let x_end = records.len().max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..x_end).into_segmented(), 0f64..y_max)
        .context("building proving-time chart axes")?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("zkVM")
        .y_desc("Proving Time (seconds)")
        .axis_desc_style(("sans-serif", 16))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < names.len() => names[*i].clone(),
            _ => String::new(),
        })
        .x_labels(records.len().max(1))
        .y_labels(10)
        .draw()
        .context("drawing proving-time mesh")?;

    // One series per status so the legend gets one patch per status present.
    let mut statuses = Vec::new();
    for record in &records {
        if !statuses.contains(&record.status) {
            statuses.push(record.status);
        }
    }
    for status in statuses {
        let color = to_color(status_color(status));
        let series = chart
            .draw_series(records.iter().enumerate().filter(|(_, r)| r.status == status).map(
                |(i, r)| {
                    let value = r.proving_time_seconds.unwrap_or(0.0);
                    let mut bar = Rectangle::new(
                        [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), value)],
                        color.filled(),
                    );
                    bar.set_margin(0, 0, 8, 8);
                    bar
                },
            ))
            .context("drawing proving-time bars")?;
        if with_legend {
            series.label(status.legend_label()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
            });
        }
    }

    draw_bar_outlines(&mut chart, records.len(), 0.0, |i| {
        records[i].proving_time_seconds.unwrap_or(0.0)
    })?;

    let label_style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let value = r.proving_time_seconds.unwrap_or(0.0);
            let label = r.proving_time_label().unwrap_or_default();
            Text::new(label, (SegmentValue::CenterOf(i), value), label_style.clone())
        }))
        .context("drawing proving-time labels")?;

    if with_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .context("drawing proving-time legend")?;
    }

    Ok(())
}

fn draw_cycles_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    title: &str,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let records: Vec<&BenchmarkRecord> = dataset.with_cycles().collect();
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();

    let min = records.iter().filter_map(|r| r.cycle_count).min().unwrap_or(1).max(1) as f64;
    let max = records.iter().filter_map(|r| r.cycle_count).max().unwrap_or(10) as f64;

    // Cycle counts span several orders of magnitude, so the y-axis is
    // logarithmic; bars rise from the bottom decade of the smallest value.
    let mut y_lo = 10f64.powf(min.log10().floor());
    if min / y_lo < 1.5 {
        y_lo /= 10.0;
    }
    let y_hi = 10f64.powf(max.log10().ceil()).max(max * 2.0);
    let x_end = records.len().max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0..x_end).into_segmented(), (y_lo..y_hi).log_scale())
        .context("building cycle-count chart axes")?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("zkVM")
        .y_desc("VM Cycles")
        .axis_desc_style(("sans-serif", 16))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < names.len() => names[*i].clone(),
            _ => String::new(),
        })
        .x_labels(records.len().max(1))
        .y_label_formatter(&|v| format_cycles(*v as u64))
        .draw()
        .context("drawing cycle-count mesh")?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let cycles = r.cycle_count.unwrap_or(0);
            let color = to_color(cycle_color(cycles));
            // A zero cycle count has no log-scale position; clamp it to the
            // baseline instead of drawing below the axis.
            let top = (cycles as f64).max(y_lo);
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), y_lo), (SegmentValue::Exact(i + 1), top)],
                color.filled(),
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))
        .context("drawing cycle-count bars")?;

    draw_bar_outlines(&mut chart, records.len(), y_lo, |i| {
        (records[i].cycle_count.unwrap_or(0) as f64).max(y_lo)
    })?;

    let label_style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let top = (r.cycle_count.unwrap_or(0) as f64).max(y_lo);
            Text::new(
                r.cycle_label().unwrap_or_default(),
                (SegmentValue::CenterOf(i), top),
                label_style.clone(),
            )
        }))
        .context("drawing cycle-count labels")?;

    Ok(())
}

/// Black outlines over the filled bars, matching the bar margins.
fn draw_bar_outlines<DB, X, Y, F>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
    count: usize,
    baseline: f64,
    value_at: F,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    X: Ranged<ValueType = SegmentValue<usize>>,
    Y: Ranged<ValueType = f64>,
    F: Fn(usize) -> f64,
{
    chart
        .draw_series((0..count).map(|i| {
            let mut outline = Rectangle::new(
                [(SegmentValue::Exact(i), baseline), (SegmentValue::Exact(i + 1), value_at(i))],
                ShapeStyle { color: BLACK.to_rgba(), filled: false, stroke_width: 1 },
            );
            outline.set_margin(0, 0, 8, 8);
            outline
        }))
        .context("drawing bar outlines")?;
    Ok(())
}
