//! Scheduling context for dispatching rule evaluation.

/// Runtime simulation state passed to dispatching rules.
///
/// Process-level state (remaining time, arrival) lives on the process
/// record itself; the context only carries the simulation clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
