//! Built-in dispatching rules.
//!
//! - **SPN**: shortest total burst
//! - **SRN**: shortest remaining time
//! - **HRRN**: highest response ratio
//! - **Arrival order**: earliest arrival, used as a tie-breaker
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// Shortest Process Next.
///
/// Prioritizes processes with the smaller total burst time. Non-preemptive
/// use minimizes mean waiting time when all jobs are available at once.
#[derive(Debug, Clone, Copy)]
pub struct Spn;

impl DispatchingRule for Spn {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time as f64
    }
}

/// Shortest Remaining Time Next.
///
/// Prioritizes processes closest to completion.
#[derive(Debug, Clone, Copy)]
pub struct Srn;

impl DispatchingRule for Srn {
    fn name(&self) -> &'static str {
        "SRN"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.remaining_time as f64
    }
}

/// Highest Response Ratio Next.
///
/// `ratio = (waited + burst) / burst`. Short jobs start with an advantage
/// but every tick spent waiting raises a job's ratio, so long jobs cannot
/// starve. Burst must be positive.
#[derive(Debug, Clone, Copy)]
pub struct Hrrn;

impl DispatchingRule for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore {
        -process.response_ratio(context.current_time)
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl DispatchingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time as f64
    }
}
