//! Process model.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! It carries its identity, the caller-fixed timing inputs and the
//! run-time state a scheduler mutates while simulating.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Caller-supplied process definition: `(id, arrival_time, burst_time)`.
///
/// Definitions are immutable inputs. Every scheduling run builds its own
/// [`Process`] records from them via [`ProcessDef::instantiate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDef {
    /// Unique process identifier (positive).
    pub id: u32,
    /// Time at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl ProcessDef {
    /// Creates a new definition.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Builds a fresh, not-yet-arrived process record.
    pub fn instantiate(&self) -> Process {
        Process::new(self.id, self.arrival_time, self.burst_time)
    }
}

/// A process record with timing state and derived metrics.
///
/// `completion_time`, `turnaround_time` and `waiting_time` stay `None`
/// until [`Process::complete`] is called, which happens exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: u32,
    /// Time at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed. Starts at `burst_time`, ends at 0.
    pub remaining_time: i64,
    /// First time the process was dispatched.
    pub start_time: Option<i64>,
    /// Time at which the last unit of work finished.
    pub completion_time: Option<i64>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<i64>,
}

impl Process {
    /// Creates a process with `remaining_time = burst_time`.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Records the first dispatch. Later calls keep the original value.
    pub fn mark_started(&mut self, time: i64) {
        self.start_time.get_or_insert(time);
    }

    /// Time spent in the ready queue so far, as seen at `time`.
    #[inline]
    pub fn waited_at(&self, time: i64) -> i64 {
        time - self.arrival_time
    }

    /// HRRN response ratio at `time`: `(waited + burst) / burst`.
    ///
    /// Burst time must be positive; validation rejects anything else.
    pub fn response_ratio(&self, time: i64) -> f64 {
        (self.waited_at(time) + self.burst_time) as f64 / self.burst_time as f64
    }

    /// Marks the process completed at `time` and derives its metrics.
    pub fn complete(&mut self, time: i64) {
        debug_assert!(
            self.completion_time.is_none(),
            "P{} completed twice",
            self.id
        );
        let turnaround = time - self.arrival_time;
        self.remaining_time = 0;
        self.completion_time = Some(time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    /// Response time: first dispatch minus arrival.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P{}(AT:{}, BT:{})",
            self.id, self.arrival_time, self.burst_time
        )
    }
}
