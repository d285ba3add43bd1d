//! plotters-based renderers for zkVM benchmark comparison charts.
//!
//! Four chart kinds, each exported twice (PNG raster + SVG vector) under a
//! fixed base filename in the caller-supplied output directory:
//!
//! - proving-time bar chart (`proving_time_comparison`)
//! - cycle-count bar chart with a log y-axis (`cycles_comparison`)
//! - both of the above side by side (`benchmark_comparison`)
//! - cycles-vs-proving-time scatter, log-log (`efficiency_scatter`)
//!
//! Records missing the field a chart needs are excluded from that chart
//! only; that is filtering, not an error. Backend and I/O failures
//! propagate as errors.

mod bars;
mod scatter;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;
use tracing::debug;
use zkbench_report::{Dataset, Rgb};

pub use bars::{render_combined, render_cycles, render_proving_time};
pub use scatter::render_efficiency_scatter;

pub const PROVING_TIME_BASENAME: &str = "proving_time_comparison";
pub const CYCLES_BASENAME: &str = "cycles_comparison";
pub const COMBINED_BASENAME: &str = "benchmark_comparison";
pub const EFFICIENCY_BASENAME: &str = "efficiency_scatter";

pub(crate) const BAR_CHART_SIZE: (u32, u32) = (1000, 600);
pub(crate) const COMBINED_CHART_SIZE: (u32, u32) = (1400, 600);
pub(crate) const SCATTER_CHART_SIZE: (u32, u32) = (1000, 700);

/// Render all four chart kinds into `out_dir`, returning every written
/// file in render order.
pub fn render_all(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    written.extend(render_proving_time(dataset, out_dir)?);
    written.extend(render_cycles(dataset, out_dir)?);
    written.extend(render_combined(dataset, out_dir)?);
    written.extend(render_efficiency_scatter(dataset, out_dir)?);
    debug!(files = written.len(), "all charts rendered");
    Ok(written)
}

pub(crate) fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Finish a drawing area, attaching the target path to any backend error.
pub(crate) fn present<DB>(area: DrawingArea<DB, plotters::coord::Shift>, path: &Path) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    area.present().with_context(|| format!("writing chart to {}", path.display()))?;
    debug!(path = %path.display(), "chart written");
    Ok(())
}
