//! Process workloads.
//!
//! A workload is the ordered list of process definitions a simulation runs
//! on. It can come from the embedded sample, a JSON file or a seeded random
//! generator. The workload itself is never mutated by a run: every call to
//! [`Workload::processes`] hands out fresh, independently owned records.
//!
//! # File Format
//!
//! ```json
//! {
//!   "processes": [
//!     { "id": 1, "arrival_time": 0, "burst_time": 8 },
//!     { "id": 2, "arrival_time": 1, "burst_time": 4 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{Process, ProcessDef};

/// Ordered set of process definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Definitions in caller order.
    pub processes: Vec<ProcessDef>,
}

/// Parameters for random workload generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSpec {
    /// Latest possible arrival time (inclusive).
    pub max_arrival: i64,
    /// Longest possible burst (inclusive, at least 1).
    pub max_burst: i64,
}

impl Default for RandomSpec {
    fn default() -> Self {
        Self {
            max_arrival: 20,
            max_burst: 10,
        }
    }
}

impl Workload {
    /// Creates a workload from definitions.
    pub fn new(processes: Vec<ProcessDef>) -> Self {
        Self { processes }
    }

    /// Builds a workload from `(id, arrival, burst)` tuples.
    pub fn from_tuples(tuples: &[(u32, i64, i64)]) -> Self {
        Self::new(
            tuples
                .iter()
                .map(|&(id, arrival, burst)| ProcessDef::new(id, arrival, burst))
                .collect(),
        )
    }

    /// The classic five-process comparison set.
    pub fn sample() -> Self {
        Self::from_tuples(&[(1, 0, 8), (2, 1, 4), (3, 2, 9), (4, 3, 5), (5, 4, 2)])
    }

    /// Parses a workload from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a workload from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let workload = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), processes = workload.len(), "loaded workload");
        Ok(workload)
    }

    /// Generates `count` processes with ids `1..=count`.
    ///
    /// The same `seed` always yields the same workload.
    pub fn random(count: u32, spec: &RandomSpec, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::random_with(count, spec, &mut rng)
    }

    /// Generates `count` processes from the given RNG.
    pub fn random_with<R: Rng>(count: u32, spec: &RandomSpec, rng: &mut R) -> Self {
        let max_arrival = spec.max_arrival.max(0);
        let max_burst = spec.max_burst.max(1);
        Self::new(
            (1..=count)
                .map(|id| {
                    ProcessDef::new(
                        id,
                        rng.random_range(0..=max_arrival),
                        rng.random_range(1..=max_burst),
                    )
                })
                .collect(),
        )
    }

    /// Serializes the workload as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fresh process records for one run.
    pub fn processes(&self) -> Vec<Process> {
        self.processes.iter().map(ProcessDef::instantiate).collect()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_sample() {
        let w = Workload::sample();
        assert_eq!(w.len(), 5);
        assert_eq!(w.processes[4], ProcessDef::new(5, 4, 2));
    }

    #[test]
    fn test_processes_are_fresh_copies() {
        let w = Workload::sample();
        let mut first = w.processes();
        first[0].complete(8);
        let second = w.processes();
        assert!(!second[0].is_completed());
        assert_eq!(second[0].remaining_time, 8);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{"processes":[
            {"id": 1, "arrival_time": 0, "burst_time": 8},
            {"id": 2, "arrival_time": 1, "burst_time": 4}
        ]}"#;
        let w = Workload::from_json_str(json).unwrap();
        assert_eq!(w.processes, vec![ProcessDef::new(1, 0, 8), ProcessDef::new(2, 1, 4)]);
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        let err = Workload::from_json_str(r#"{"processes":[{"id":1}]}"#).unwrap_err();
        assert!(matches!(err, SimError::Json(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Workload::from_path("/nonexistent/workload.json").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("cpu-sched-{}.json", std::process::id()));
        fs::write(&path, Workload::sample().to_json().unwrap()).unwrap();
        let loaded = Workload::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, Workload::sample());
    }

    #[test]
    fn test_bundled_workload_files() {
        let sample = Workload::from_json_str(include_str!("../workloads/sample.json")).unwrap();
        assert_eq!(sample, Workload::sample());

        let late = Workload::from_json_str(include_str!("../workloads/late_start.json")).unwrap();
        assert_eq!(late.len(), 4);
        assert!(late.processes.iter().all(|p| p.arrival_time > 0));
    }

    #[test]
    fn test_random_is_seeded() {
        let spec = RandomSpec::default();
        assert_eq!(Workload::random(8, &spec, 7), Workload::random(8, &spec, 7));
    }

    #[test]
    fn test_random_ids_are_contiguous() {
        let w = Workload::random(300, &RandomSpec::default(), 1);
        let ids: Vec<u32> = w.processes.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=300).collect::<Vec<u32>>());
        assert!(Workload::random(0, &RandomSpec::default(), 1).is_empty());
    }

    #[test]
    fn test_random_respects_bounds() {
        let spec = RandomSpec {
            max_arrival: 5,
            max_burst: 3,
        };
        let w = Workload::random(50, &spec, 42);
        assert_eq!(w.len(), 50);
        for (i, p) in w.processes.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!((0..=5).contains(&p.arrival_time));
            assert!((1..=3).contains(&p.burst_time));
        }
    }
}
