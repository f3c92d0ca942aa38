//! Shortest Process Next scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by the current time.
//! 2. If the ready queue is empty, idle for one tick.
//! 3. Otherwise pick the shortest burst (ties: earliest arrival, lowest id)
//!    and run it to completion without interruption.
//!
//! # Complexity
//! O(n²) rule evaluations for n processes, plus one iteration per idle tick.

use tracing::info;

use super::state::SimState;
use super::Scheduler;
use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, Process, Schedule};

/// Non-preemptive shortest-burst-first scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Scheduler, SpnScheduler};
///
/// let procs = vec![Process::new(1, 0, 8), Process::new(2, 1, 4), Process::new(3, 1, 2)];
/// let schedule = SpnScheduler::new().schedule(procs);
/// assert_eq!(schedule.completion_order(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct SpnScheduler {
    engine: RuleEngine,
}

impl SpnScheduler {
    /// Creates a scheduler with the standard SPN tie-breaking chain.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::spn(),
        }
    }
}

impl Default for SpnScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SpnScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Spn
    }

    fn schedule(&self, processes: Vec<Process>) -> Schedule {
        let mut state = SimState::new(Algorithm::Spn, processes);

        while !state.is_done() {
            state.admit_arrivals();
            match state.select(&self.engine) {
                Some(pid) => {
                    state.dispatch(pid);
                    state.run_to_completion(pid);
                }
                None => state.idle_tick(),
            }
        }

        let schedule = state.finish();
        info!(
            algorithm = %schedule.algorithm,
            makespan = schedule.makespan,
            avg_turnaround = schedule.average_turnaround(),
            avg_waiting = schedule.average_waiting(),
            "simulation finished"
        );
        schedule
    }
}
