//! Per-zkVM benchmark measurements for one verification workload.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Outcome of one benchmark attempt.
///
/// Older data revisions spelled two of these `wip` and `oom`; the serde
/// aliases keep those files loadable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ZkvmStatus {
    Completed,
    Timeout,
    #[serde(alias = "wip")]
    WorkInProgress,
    #[serde(alias = "oom")]
    OutOfMemory,
}

impl ZkvmStatus {
    /// Human-readable legend entry for this status.
    #[must_use]
    pub const fn legend_label(&self) -> &'static str {
        match self {
            ZkvmStatus::Completed => "Completed",
            ZkvmStatus::Timeout => "Timeout",
            ZkvmStatus::WorkInProgress => "WIP",
            ZkvmStatus::OutOfMemory => "Out of memory",
        }
    }
}

/// One evaluated zkVM.
///
/// `proving_time_seconds` is `None` when the prover could not finish the
/// workload at all (e.g. ran out of memory). `cycle_count` is `None` when
/// the zkVM does not expose a comparable cycle metric (different
/// architecture). A record missing a field is silently excluded from any
/// chart that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    #[serde(default)]
    pub proving_time_seconds: Option<f64>,
    #[serde(default)]
    pub cycle_count: Option<u64>,
    /// Plain (non-proving) execution time. Informational only, never charted.
    pub execution_time_seconds: f64,
    pub status: ZkvmStatus,
}

impl BenchmarkRecord {
    /// Proving-time label for this record, `">"`-prefixed on timeout.
    #[must_use]
    pub fn proving_time_label(&self) -> Option<String> {
        self.proving_time_seconds
            .map(|t| crate::format_duration_with_status(t, self.status))
    }

    /// Cycle-count label (`"6.3M"` / `"136K"`) for this record.
    #[must_use]
    pub fn cycle_label(&self) -> Option<String> {
        self.cycle_count.map(crate::format_cycles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_aliases_deserialize() {
        let wip: ZkvmStatus = serde_json::from_str("\"wip\"").unwrap();
        assert_eq!(wip, ZkvmStatus::WorkInProgress);
        let oom: ZkvmStatus = serde_json::from_str("\"oom\"").unwrap();
        assert_eq!(oom, ZkvmStatus::OutOfMemory);
        let canonical: ZkvmStatus = serde_json::from_str("\"work_in_progress\"").unwrap();
        assert_eq!(canonical, ZkvmStatus::WorkInProgress);
    }

    #[test]
    fn status_roundtrips_snake_case() {
        let json = serde_json::to_string(&ZkvmStatus::OutOfMemory).unwrap();
        assert_eq!(json, "\"out_of_memory\"");
        assert_eq!(ZkvmStatus::Timeout.to_string(), "timeout");
    }

    #[test]
    fn timeout_record_label_is_prefixed() {
        let record = BenchmarkRecord {
            name: "RISC Zero".into(),
            proving_time_seconds: Some(600.0),
            cycle_count: Some(5_728_806),
            execution_time_seconds: 0.275,
            status: ZkvmStatus::Timeout,
        };
        assert_eq!(record.proving_time_label().unwrap(), ">10.0min");
        assert_eq!(record.cycle_label().unwrap(), "5.7M");
    }

    #[test]
    fn absent_fields_yield_no_labels() {
        let record = BenchmarkRecord {
            name: "OpenVM".into(),
            proving_time_seconds: Some(294.5),
            cycle_count: None,
            execution_time_seconds: 0.150,
            status: ZkvmStatus::Completed,
        };
        assert!(record.cycle_label().is_none());
        assert_eq!(record.proving_time_label().unwrap(), "4.9min");
    }
}
