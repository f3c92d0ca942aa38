//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Response | Mean of first dispatch - arrival |
//! | Max Waiting | Longest single wait |
//! | CPU Utilization | Busy time over accounted time (idle ticks excluded) |
//! | Occupancy | Busy time over `[first arrival, makespan)` |
//! | Throughput | Completions per time unit |

use serde::Serialize;

use crate::models::{Algorithm, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Discipline that produced the schedule.
    pub algorithm: Algorithm,
    /// Final simulation clock.
    pub makespan: i64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Largest waiting time of any single process.
    pub max_waiting: i64,
    /// Busy fraction of accounted time. Idle ticks are not accounted, so
    /// this is 1.0 for any non-empty schedule.
    pub cpu_utilization: f64,
    /// Busy fraction of the span from first arrival to makespan.
    pub occupancy: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of preemptions.
    pub preemptions: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let max_waiting = schedule
            .processes
            .iter()
            .filter_map(|p| p.waiting_time)
            .max()
            .unwrap_or(0);

        let cpu_utilization = if schedule.busy_time > 0 { 1.0 } else { 0.0 };

        let first_arrival = schedule
            .processes
            .iter()
            .map(|p| p.arrival_time)
            .min()
            .unwrap_or(0);
        let span = schedule.makespan - first_arrival;
        let occupancy = if span > 0 {
            schedule.busy_time as f64 / span as f64
        } else {
            0.0
        };

        let throughput = if schedule.makespan > 0 {
            schedule.process_count() as f64 / schedule.makespan as f64
        } else {
            0.0
        };

        Self {
            algorithm: schedule.algorithm,
            makespan: schedule.makespan,
            avg_turnaround: schedule.average_turnaround(),
            avg_waiting: schedule.average_waiting(),
            avg_response: schedule.average_response(),
            max_waiting,
            cpu_utilization,
            occupancy,
            throughput,
            preemptions: schedule.preemptions,
        }
    }
}
