//! CPU schedulers and KPI evaluation.
//!
//! # Disciplines
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | `SpnScheduler` | no | shortest burst |
//! | `SrnScheduler` | yes, per tick | shortest remaining time |
//! | `HrrnScheduler` | no | highest response ratio |
//!
//! Every scheduler consumes an owned `Vec<Process>`, so two runs can never
//! share process state.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average turnaround, waiting and response time,
//! CPU utilization and throughput.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod hrrn;
mod kpi;
mod ready;
mod spn;
mod srn;
mod state;

pub use hrrn::HrrnScheduler;
pub use kpi::ScheduleKpi;
pub use ready::ReadyQueue;
pub use spn::SpnScheduler;
pub use srn::SrnScheduler;

use tracing::warn;

use crate::error::{Result, SimError};
use crate::models::{Algorithm, Process, Schedule};
use crate::validation::validate_processes;

/// A single-CPU scheduling discipline.
pub trait Scheduler {
    /// Discipline implemented by this scheduler.
    fn algorithm(&self) -> Algorithm;

    /// Simulates `processes` until every one has completed.
    ///
    /// Input must satisfy [`validate_processes`]; use [`Scheduler::run`]
    /// to have that checked first. Debug builds panic on invalid input.
    fn schedule(&self, processes: Vec<Process>) -> Schedule;

    /// Validates `processes`, then simulates them.
    fn run(&self, processes: Vec<Process>) -> Result<Schedule> {
        if let Err(errors) = validate_processes(&processes) {
            warn!(
                algorithm = %self.algorithm(),
                errors = errors.len(),
                "rejecting invalid process set"
            );
            return Err(SimError::InvalidWorkload(errors));
        }
        Ok(self.schedule(processes))
    }
}

/// Returns the scheduler implementing `algorithm`.
pub fn scheduler_for(algorithm: Algorithm) -> Box<dyn Scheduler> {
    match algorithm {
        Algorithm::Spn => Box::new(SpnScheduler::new()),
        Algorithm::Srn => Box::new(SrnScheduler::new()),
        Algorithm::Hrrn => Box::new(HrrnScheduler::new()),
    }
}
