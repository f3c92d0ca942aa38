//! Highest Response Ratio Next scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by the current time.
//! 2. If the ready queue is empty, idle for one tick.
//! 3. Otherwise compute `(waited + burst) / burst` for every ready process,
//!    pick the maximum and run it to completion. On equal ratios the
//!    process admitted first wins.
//!
//! Every ratio evaluation is written to the trace so the decision can be
//! audited after the fact.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use tracing::info;

use super::state::SimState;
use super::Scheduler;
use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, Process, Schedule};

/// Non-preemptive highest-response-ratio scheduler.
#[derive(Debug, Clone)]
pub struct HrrnScheduler {
    engine: RuleEngine,
}

impl HrrnScheduler {
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::hrrn(),
        }
    }
}

impl Default for HrrnScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for HrrnScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Hrrn
    }

    fn schedule(&self, processes: Vec<Process>) -> Schedule {
        let mut state = SimState::new(Algorithm::Hrrn, processes);

        while !state.is_done() {
            state.admit_arrivals();
            state.trace_response_ratios();
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
