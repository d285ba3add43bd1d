//! On-chart label formatting.
//!
//! These are the only numeric formats anywhere in the system, so they live
//! in one place: durations render as `"45.2s"` below a minute and
//! `"20.9min"` from sixty seconds up, cycle counts as `"136K"` below a
//! million and `"6.3M"` at or above it.

use crate::ZkvmStatus;

/// Format a duration in seconds as `"{t:.1}s"` or, from 60s up, `"{t/60:.1}min"`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.1}s")
    } else {
        format!("{:.1}min", seconds / 60.0)
    }
}

/// Same as [`format_duration`], with a `">"` prefix for timed-out runs
/// (the recorded value is a lower bound, not a measurement).
#[must_use]
pub fn format_duration_with_status(seconds: f64, status: ZkvmStatus) -> String {
    let label = format_duration(seconds);
    if status == ZkvmStatus::Timeout {
        format!(">{label}")
    } else {
        label
    }
}

/// Format a cycle count as `"{c/1e6:.1}M"` or, below a million, `"{c/1e3:.0}K"`.
#[must_use]
pub fn format_cycles(cycles: u64) -> String {
    if cycles >= 1_000_000 {
        format!("{:.1}M", cycles as f64 / 1_000_000.0)
    } else {
        format!("{:.0}K", cycles as f64 / 1_000.0)
    }
}
