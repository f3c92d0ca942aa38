//! Schedule (solution) model.
//!
//! A schedule is the complete result of simulating one scheduling
//! discipline over a process set: the finished process records, the event
//! trace, the Gantt timeline and the busy/idle time accounting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Process, Timeline, TraceEvent};
use crate::error::SimError;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// Shortest Process Next (non-preemptive).
    Spn,
    /// Shortest Remaining Time Next (preemptive).
    Srn,
    /// Highest Response Ratio Next (non-preemptive).
    Hrrn,
}

impl Algorithm {
    /// All disciplines in report order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Spn, Algorithm::Srn, Algorithm::Hrrn];

    /// Short name (e.g., "SPN").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Spn => "SPN",
            Algorithm::Srn => "SRN",
            Algorithm::Hrrn => "HRRN",
        }
    }

    /// Long name.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Spn => "Shortest Process Next",
            Algorithm::Srn => "Shortest Remaining Time Next",
            Algorithm::Hrrn => "Highest Response Ratio Next",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srn)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spn" | "sjf" => Ok(Algorithm::Spn),
            "srn" | "srt" | "srtf" => Ok(Algorithm::Srn),
            "hrrn" => Ok(Algorithm::Hrrn),
            _ => Err(SimError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Result of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Discipline that produced this schedule.
    pub algorithm: Algorithm,
    /// Completed processes, in completion order.
    pub processes: Vec<Process>,
    /// Ordered event trace.
    pub trace: Vec<TraceEvent>,
    /// Gantt timeline covering `[0, makespan)`.
    pub timeline: Timeline,
    /// Ticks during which some process ran.
    pub busy_time: i64,
    /// Ticks during which the CPU was idle.
    pub idle_time: i64,
    /// Final simulation clock.
    pub makespan: i64,
    /// Number of preemptions (always 0 for SPN and HRRN).
    pub preemptions: usize,
}

impl Schedule {
    /// Creates an empty schedule for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            processes: Vec::new(),
            trace: Vec::new(),
            timeline: Timeline::new(),
            busy_time: 0,
            idle_time: 0,
            makespan: 0,
            preemptions: 0,
        }
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Looks up a completed process by id.
    pub fn process(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Completion time of a process.
    pub fn completion_time(&self, id: u32) -> Option<i64> {
        self.process(id).and_then(|p| p.completion_time)
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<u32> {
        self.processes.iter().map(|p| p.id).collect()
    }

    /// Processes sorted by id, for tabular output.
    pub fn processes_by_id(&self) -> Vec<&Process> {
        let mut sorted: Vec<&Process> = self.processes.iter().collect();
        sorted.sort_by_key(|p| p.id);
        sorted
    }

    /// Mean turnaround time (0.0 for an empty schedule).
    pub fn average_turnaround(&self) -> f64 {
        mean(self.processes.iter().filter_map(|p| p.turnaround_time))
    }

    /// Mean waiting time (0.0 for an empty schedule).
    pub fn average_waiting(&self) -> f64 {
        mean(self.processes.iter().filter_map(|p| p.waiting_time))
    }

    /// Mean response time (0.0 for an empty schedule).
    pub fn average_response(&self) -> f64 {
        mean(self.processes.iter().filter_map(|p| p.response_time()))
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    // f64 sum: per-process times are bounded by validation, their total is not
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v as f64, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
