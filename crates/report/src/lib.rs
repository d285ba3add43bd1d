//! Benchmark record model and chart derivation rules for zkVM comparisons.
//!
//! This crate owns everything a chart needs to know about a benchmark run
//! before any drawing happens: the per-zkVM [`BenchmarkRecord`], the
//! validated ordered [`Dataset`], the duration/cycle label formatting, and
//! the status/magnitude color palettes. It deliberately knows nothing about
//! plotting backends.

mod dataset;
mod format;
mod palette;
mod record;

pub use dataset::{Dataset, DatasetError};
pub use format::{format_cycles, format_duration, format_duration_with_status};
pub use palette::{cycle_color, status_color, Rgb, CYCLE_MAGNITUDE_THRESHOLD};
pub use record::{BenchmarkRecord, ZkvmStatus};
