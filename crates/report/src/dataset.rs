//! The ordered, validated record set one render run works from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{BenchmarkRecord, ZkvmStatus};

/// Rejection reasons for a candidate record set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("duplicate zkVM name: {0}")]
    DuplicateName(String),
    #[error("{name}: {field} must be a finite, non-negative number")]
    InvalidValue { name: String, field: &'static str },
}

/// An immutable, insertion-ordered set of benchmark records.
///
/// Construction validates the whole set; after that the data is read-only
/// for the lifetime of a render run. Insertion order defines chart order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BenchmarkRecord>", into = "Vec<BenchmarkRecord>")]
pub struct Dataset {
    records: Vec<BenchmarkRecord>,
}

impl Dataset {
    /// Validate and wrap a record set.
    ///
    /// Names must be unique and every numeric field, when present, finite
    /// and non-negative.
    pub fn new(records: Vec<BenchmarkRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(DatasetError::DuplicateName(record.name.clone()));
            }
            if let Some(t) = record.proving_time_seconds {
                if !t.is_finite() || t < 0.0 {
                    return Err(DatasetError::InvalidValue {
                        name: record.name.clone(),
                        field: "proving_time_seconds",
                    });
                }
            }
            let exec = record.execution_time_seconds;
            if !exec.is_finite() || exec < 0.0 {
                return Err(DatasetError::InvalidValue {
                    name: record.name.clone(),
                    field: "execution_time_seconds",
                });
            }
        }
        debug!(records = records.len(), "dataset validated");
        Ok(Self { records })
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that have a proving time, in original order.
    pub fn with_proving_time(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records.iter().filter(|r| r.proving_time_seconds.is_some())
    }

    /// Records that have a cycle count, in original order.
    pub fn with_cycles(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records.iter().filter(|r| r.cycle_count.is_some())
    }

    /// Records with both a proving time and a cycle count, in original order.
    pub fn with_complete_data(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records
            .iter()
            .filter(|r| r.proving_time_seconds.is_some() && r.cycle_count.is_some())
    }

    /// The built-in illustrative table: the XMSS verification workload
    /// (TargetSum W=1, 155 chains, Poseidon2) across four zkVMs.
    ///
    /// Measurement revisions of this table disagree over time; treat it as
    /// sample data and pass your own [`Dataset`] for anything serious.
    #[must_use]
    pub fn sample() -> Self {
        let records = vec![
            BenchmarkRecord {
                name: "SP1".into(),
                proving_time_seconds: Some(71.4),
                cycle_count: Some(60_424_086),
                execution_time_seconds: 2.65,
                status: ZkvmStatus::Completed,
            },
            BenchmarkRecord {
                name: "Zisk".into(),
                proving_time_seconds: Some(1580.3),
                cycle_count: Some(158_022),
                execution_time_seconds: 0.0034,
                status: ZkvmStatus::WorkInProgress,
            },
            BenchmarkRecord {
                name: "OpenVM".into(),
                // No comparable cycle metric: different architecture.
                proving_time_seconds: Some(294.5),
                cycle_count: None,
                execution_time_seconds: 0.150,
                status: ZkvmStatus::Completed,
            },
            BenchmarkRecord {
                name: "RISC Zero".into(),
                // Timeout estimate, not a completed measurement.
                proving_time_seconds: Some(600.0),
                cycle_count: Some(5_728_806),
                execution_time_seconds: 0.275,
                status: ZkvmStatus::Timeout,
            },
        ];
        Self::new(records).expect("sample dataset is valid")
    }
}

impl TryFrom<Vec<BenchmarkRecord>> for Dataset {
    type Error = DatasetError;

    fn try_from(records: Vec<BenchmarkRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<Dataset> for Vec<BenchmarkRecord> {
    fn from(dataset: Dataset) -> Self {
        dataset.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, proving: Option<f64>, cycles: Option<u64>) -> BenchmarkRecord {
        BenchmarkRecord {
            name: name.into(),
            proving_time_seconds: proving,
            cycle_count: cycles,
            execution_time_seconds: 0.1,
            status: ZkvmStatus::Completed,
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Dataset::new(vec![record("SP1", None, None), record("SP1", None, None)])
            .unwrap_err();
        assert_eq!(err, DatasetError::DuplicateName("SP1".into()));
    }

    #[test]
    fn negative_and_non_finite_times_are_rejected() {
        let err = Dataset::new(vec![record("SP1", Some(-1.0), None)]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::InvalidValue { name: "SP1".into(), field: "proving_time_seconds" }
        );

        let mut bad_exec = record("Zisk", None, None);
        bad_exec.execution_time_seconds = f64::NAN;
        let err = Dataset::new(vec![bad_exec]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::InvalidValue { name: "Zisk".into(), field: "execution_time_seconds" }
        );
    }

    #[test]
    fn filters_preserve_order_and_drop_absent_fields() {
        let dataset = Dataset::new(vec![
            record("SP1", Some(71.4), Some(135_801)),
            record("Zisk", Some(1253.9), Some(158_022)),
            record("Miden", None, Some(15_552_770)),
        ])
        .unwrap();

        let proving: Vec<&str> =
            dataset.with_proving_time().map(|r| r.name.as_str()).collect();
        assert_eq!(proving, vec!["SP1", "Zisk"]);

        let cycles: Vec<&str> = dataset.with_cycles().map(|r| r.name.as_str()).collect();
        assert_eq!(cycles, vec!["SP1", "Zisk", "Miden"]);

        let complete: Vec<&str> =
            dataset.with_complete_data().map(|r| r.name.as_str()).collect();
        assert_eq!(complete, vec!["SP1", "Zisk"]);
    }

    #[test]
    fn mixed_availability_labels() {
        // SP1 71.4s / 135801 cycles, Zisk 1253.9s / 158022, Miden oom.
        let dataset = Dataset::new(vec![
            record("SP1", Some(71.4), Some(135_801)),
            record("Zisk", Some(1253.9), Some(158_022)),
            BenchmarkRecord {
                name: "Miden".into(),
                proving_time_seconds: None,
                cycle_count: Some(15_552_770),
                execution_time_seconds: 0.5,
                status: ZkvmStatus::OutOfMemory,
            },
        ])
        .unwrap();

        let proving_labels: Vec<String> = dataset
            .with_proving_time()
            .map(|r| r.proving_time_label().unwrap())
            .collect();
        // 71.4s crosses the sixty-second unit boundary, so it labels in minutes.
        assert_eq!(proving_labels, vec!["1.2min", "20.9min"]);

        let cycle_labels: Vec<String> =
            dataset.with_cycles().map(|r| r.cycle_label().unwrap()).collect();
        assert_eq!(cycle_labels, vec!["136K", "158K", "15.6M"]);
    }

    #[test]
    fn json_roundtrip_rejects_invalid_sets() {
        let dataset = Dataset::sample();
        let json = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(dataset, back);

        let dup = r#"[
            {"name": "A", "execution_time_seconds": 0.1, "status": "completed"},
            {"name": "A", "execution_time_seconds": 0.1, "status": "completed"}
        ]"#;
        assert!(serde_json::from_str::<Dataset>(dup).is_err());
    }

    #[test]
    fn sample_is_valid_and_ordered() {
        let dataset = Dataset::sample();
        let names: Vec<&str> = dataset.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["SP1", "Zisk", "OpenVM", "RISC Zero"]);
        // OpenVM has no cycle metric and must drop out of cycle-keyed views.
        assert_eq!(dataset.with_cycles().count(), 3);
        assert_eq!(dataset.with_complete_data().count(), 3);
    }
}
