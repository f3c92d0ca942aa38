//! Simulation runner.
//!
//! Validates a workload once and runs one or more disciplines over it,
//! each on its own freshly built process records.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Result, SimError};
use crate::models::{Algorithm, Schedule};
use crate::scheduler::{scheduler_for, ScheduleKpi};
use crate::validation::validate_processes;
use crate::workload::Workload;

/// One line of the comparison summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub algorithm: Algorithm,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
}

/// Results of running several disciplines over the same workload.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Schedules in the order the algorithms were requested.
    pub schedules: Vec<Schedule>,
}

impl Comparison {
    /// Schedule produced by `algorithm`, if it was run.
    pub fn schedule(&self, algorithm: Algorithm) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.algorithm == algorithm)
    }

    /// One summary row per schedule.
    pub fn summary(&self) -> Vec<SummaryRow> {
        self.schedules
            .iter()
            .map(|s| SummaryRow {
                algorithm: s.algorithm,
                avg_turnaround: s.average_turnaround(),
                avg_waiting: s.average_waiting(),
            })
            .collect()
    }

    /// KPIs for every schedule, in run order.
    pub fn kpis(&self) -> Vec<ScheduleKpi> {
        self.schedules.iter().map(ScheduleKpi::calculate).collect()
    }

    /// Algorithm with the lowest average waiting time (first wins on ties).
    pub fn best_by_waiting(&self) -> Option<Algorithm> {
        self.summary()
            .into_iter()
            .reduce(|best, row| {
                if row.avg_waiting < best.avg_waiting {
                    row
                } else {
                    best
                }
            })
            .map(|row| row.algorithm)
    }

    /// Pretty-printed JSON document with the schedules, summary and KPIs.
    pub fn to_json(&self) -> Result<String> {
        let document = ComparisonDocument {
            schedules: &self.schedules,
            summary: self.summary(),
            kpis: self.kpis(),
            best_by_waiting: self.best_by_waiting(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[derive(Serialize)]
struct ComparisonDocument<'a> {
    schedules: &'a [Schedule],
    summary: Vec<SummaryRow>,
    kpis: Vec<ScheduleKpi>,
    best_by_waiting: Option<Algorithm>,
}

fn validate(workload: &Workload) -> Result<()> {
    validate_processes(&workload.processes()).map_err(|errors| {
        warn!(errors = errors.len(), "workload failed validation");
        SimError::InvalidWorkload(errors)
    })
}

/// Validates `workload` and runs a single discipline on it.
pub fn simulate(algorithm: Algorithm, workload: &Workload) -> Result<Schedule> {
    validate(workload)?;
    Ok(scheduler_for(algorithm).schedule(workload.processes()))
}

/// Validates `workload` once and runs every algorithm in `algorithms` on
/// an independent copy of it.
pub fn compare(workload: &Workload, algorithms: &[Algorithm]) -> Result<Comparison> {
    validate(workload)?;
    info!(
        processes = workload.len(),
        algorithms = algorithms.len(),
        "running comparison"
    );

    let schedules = algorithms
        .iter()
        .map(|&algorithm| scheduler_for(algorithm).schedule(workload.processes()))
        .collect();

    Ok(Comparison { schedules })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::assert_invariants;
    use crate::validation::ValidationErrorKind;
    use crate::workload::RandomSpec;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_compare_sample() {
        let comparison = compare(&Workload::sample(), &Algorithm::ALL).unwrap();
        let summary = comparison.summary();

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].algorithm, Algorithm::Spn);
        assert!((summary[0].avg_turnaround - 13.8).abs() < 1e-10);
        assert!((summary[0].avg_waiting - 8.2).abs() < 1e-10);
        assert!((summary[1].avg_turnaround - 12.2).abs() < 1e-10);
        assert!((summary[1].avg_waiting - 6.6).abs() < 1e-10);
        assert!((summary[2].avg_turnaround - 13.8).abs() < 1e-10);
        assert!((summary[2].avg_waiting - 8.2).abs() < 1e-10);
        assert_eq!(comparison.best_by_waiting(), Some(Algorithm::Srn));
    }

    #[test]
    fn test_kpis_follow_run_order() {
        let comparison = compare(&Workload::sample(), &[Algorithm::Hrrn, Algorithm::Srn]).unwrap();
        let kpis = comparison.kpis();

        assert_eq!(kpis.len(), 2);
        assert_eq!(kpis[0].algorithm, Algorithm::Hrrn);
        assert_eq!(kpis[1].algorithm, Algorithm::Srn);
        assert_eq!(kpis[1].preemptions, 1);
        assert!((kpis[1].avg_waiting - 6.6).abs() < 1e-10);
    }

    #[test]
    fn test_to_json_includes_kpis() {
        let workload = Workload::from_tuples(&[(1, 0, 2), (2, 5, 1)]);
        let comparison = compare(&workload, &Algorithm::ALL).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&comparison.to_json().unwrap()).unwrap();

        assert_eq!(doc["schedules"].as_array().unwrap().len(), 3);
        assert_eq!(doc["summary"].as_array().unwrap().len(), 3);
        let kpis = doc["kpis"].as_array().unwrap();
        assert_eq!(kpis.len(), 3);
        // busy 3 of 6 ticks
        assert!((kpis[0]["occupancy"].as_f64().unwrap() - 0.5).abs() < 1e-10);
        assert_eq!(kpis[0]["makespan"], 6);
        assert!(kpis[0].get("avg_response").is_some());
        assert!(kpis[0].get("max_waiting").is_some());
        assert!(kpis[0].get("throughput").is_some());
        assert!(doc.get("best_by_waiting").is_some());
    }

    #[test]
    fn test_runs_are_independent() {
        let workload = Workload::sample();
        let comparison = compare(&workload, &[Algorithm::Srn, Algorithm::Spn]).unwrap();

        // SRN mutated its own records; SPN still sees untouched bursts
        let alone = simulate(Algorithm::Spn, &workload).unwrap();
        let spn = comparison.schedule(Algorithm::Spn).unwrap();
        assert_eq!(spn.processes, alone.processes);
        assert_eq!(spn.trace, alone.trace);
    }

    #[test]
    fn test_invalid_workload_rejected() {
        let workload = Workload::from_tuples(&[(1, 0, 3), (1, 2, 0)]);
        match compare(&workload, &Algorithm::ALL) {
            Err(SimError::InvalidWorkload(errors)) => {
                let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
                assert!(kinds.contains(&ValidationErrorKind::DuplicateId));
                assert!(kinds.contains(&ValidationErrorKind::NonPositiveBurst));
            }
            other => panic!("expected InvalidWorkload, got {other:?}"),
        }
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let workload = Workload::from_tuples(&[(1, 0, i64::MAX), (2, 1, 1)]);
        match simulate(Algorithm::Srn, &workload) {
            Err(SimError::InvalidWorkload(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
            }
            other => panic!("expected InvalidWorkload, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_workload_rejected() {
        assert!(simulate(Algorithm::Hrrn, &Workload::default()).is_err());
    }

    #[test]
    fn test_random_workloads_hold_invariants() {
        let mut rng = SmallRng::seed_from_u64(42);
        let spec = RandomSpec {
            max_arrival: 15,
            max_burst: 6,
        };

        for round in 0..50 {
            let workload = Workload::random_with(1 + round % 9, &spec, &mut rng);
            let comparison = compare(&workload, &Algorithm::ALL).unwrap();
            for schedule in &comparison.schedules {
                assert_invariants(schedule, &workload.processes());
                if !schedule.algorithm.is_preemptive() {
                    assert_eq!(schedule.preemptions, 0);
                }
            }
        }
    }

    #[test]
    fn test_srn_never_worse_on_average_waiting() {
        // SRN is optimal for mean waiting time on a single CPU
        let spec = RandomSpec::default();
        for seed in 0..30 {
            let workload = Workload::random(6, &spec, seed);
            let comparison = compare(&workload, &Algorithm::ALL).unwrap();
            let srn = comparison.schedule(Algorithm::Srn).unwrap().average_waiting();
            let spn = comparison.schedule(Algorithm::Spn).unwrap().average_waiting();
            assert!(srn <= spn + 1e-10, "seed {seed}: SRN {srn} > SPN {spn}");
        }
    }
}
