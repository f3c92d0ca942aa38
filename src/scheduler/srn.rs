//! Shortest Remaining Time Next scheduler.
//!
//! # Algorithm
//!
//! Simulates one tick at a time:
//! 1. Admit every process that has arrived by the current tick.
//! 2. Find the ready process with the least remaining time (ties: earliest
//!    arrival, lowest id).
//! 3. If nothing is running, dispatch it. If something is running and the
//!    candidate's remaining time is strictly smaller, preempt the incumbent
//!    back into the ready queue and dispatch the candidate. Equal remaining
//!    time never preempts.
//! 4. Run the CPU holder for one tick, or idle if there is none.
//!
//! # Complexity
//! O(T · n) for a makespan of T ticks and n processes.

use tracing::info;

use super::state::SimState;
use super::Scheduler;
use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, Process, Schedule};

/// Preemptive shortest-remaining-time scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Scheduler, SrnScheduler};
///
/// let procs = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
/// let schedule = SrnScheduler::new().schedule(procs);
/// assert_eq!(schedule.preemptions, 1);
/// assert_eq!(schedule.completion_time(2), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct SrnScheduler {
    engine: RuleEngine,
}

impl SrnScheduler {
    /// Creates a scheduler with the standard SRN tie-breaking chain.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::srn(),
        }
    }
}

impl Default for SrnScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SrnScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srn
    }

    fn schedule(&self, processes: Vec<Process>) -> Schedule {
        let mut state = SimState::new(Algorithm::Srn, processes);
        let mut running: Option<u32> = None;

        while !state.is_done() {
            state.admit_arrivals();

            if let Some(best) = state.select(&self.engine) {
                match running {
                    None => {
                        state.dispatch(best);
                        running = Some(best);
                    }
                    Some(current) => {
                        let challenger = state.process(best).remaining_time;
                        let incumbent = state.process(current).remaining_time;
                        if challenger < incumbent {
                            state.preempt(current, best);
                            state.dispatch(best);
                            running = Some(best);
                        }
                    }
                }
            }

            match running {
                Some(pid) => {
                    if state.execute(pid, 1) {
                        running = None;
                    }
                }
                None => state.idle_tick(),
            }
        }

        let schedule = state.finish();
        info!(
            algorithm = %schedule.algorithm,
            makespan = schedule.makespan,
            preemptions = schedule.preemptions,
            avg_turnaround = schedule.average_turnaround(),
            avg_waiting = schedule.average_waiting(),
            "simulation finished"
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;
    use crate::scheduler::test_support::{assert_invariants, sample};

    #[test]
    fn test_sample_trace() {
        let schedule = SrnScheduler::new().schedule(sample());

        assert_eq!(schedule.completion_order(), vec![2, 5, 4, 1, 3]);
        assert_eq!(schedule.completion_time(2), Some(5));
        assert_eq!(schedule.completion_time(5), Some(7));
        assert_eq!(schedule.completion_time(4), Some(12));
        assert_eq!(schedule.completion_time(1), Some(19));
        assert_eq!(schedule.completion_time(3), Some(28));

        assert!((schedule.average_turnaround() - 12.2).abs() < 1e-10);
        assert!((schedule.average_waiting() - 6.6).abs() < 1e-10);
        assert_invariants(&schedule, &sample());
    }

    #[test]
    fn test_p2_preempts_p1() {
        let schedule = SrnScheduler::new().schedule(sample());

        // P2 arrives at t=1 with 4 < P1's remaining 7
        assert_eq!(schedule.preemptions, 1);
        let preempt = schedule
            .trace
            .iter()
            .find(|e| matches!(e.kind, EventKind::Preempt { .. }))
            .unwrap();
        assert_eq!(preempt.time, 1);
        assert_eq!(preempt.kind, EventKind::Preempt { pid: 1, by: 2 });

        // P5 (2) arriving at t=4 does not preempt P2 (1 left)
        assert!(!schedule
            .trace
            .iter()
            .any(|e| e.kind == EventKind::Preempt { pid: 2, by: 5 }));

        // P1 resumes at 12 and keeps its original start time
        assert!(schedule
            .trace
            .iter()
            .any(|e| e.time == 12 && e.kind == EventKind::Resume { pid: 1 }));
        assert_eq!(schedule.process(1).unwrap().start_time, Some(0));
        assert_eq!(schedule.timeline.segments_for(1).count(), 2);
    }

    #[test]
    fn test_equal_remaining_does_not_preempt() {
        // At t=1, P1 has 3 left and P2 needs 3: incumbent keeps running
        let procs = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
        let schedule = SrnScheduler::new().schedule(procs);

        assert_eq!(schedule.preemptions, 0);
        assert_eq!(schedule.completion_time(1), Some(4));
        assert_eq!(schedule.completion_time(2), Some(7));
    }

    #[test]
    fn test_remaining_time_reaches_zero_once() {
        let schedule = SrnScheduler::new().schedule(sample());
        for p in &schedule.processes {
            assert_eq!(p.remaining_time, 0);
            let completions = schedule
                .trace
                .iter()
                .filter(|e| e.kind == EventKind::Complete { pid: p.id })
                .count();
            assert_eq!(completions, 1);
        }
        let total_burst: i64 = sample().iter().map(|p| p.burst_time).sum();
        assert_eq!(schedule.busy_time, total_burst);
    }

    #[test]
    fn test_idle_then_run() {
        let procs = vec![Process::new(1, 2, 2), Process::new(2, 6, 1)];
        let schedule = SrnScheduler::new().schedule(procs.clone());

        // idle 0,1 → P1 2–4 → idle 4,5 → P2 6–7
        assert_eq!(schedule.idle_time, 4);
        assert_eq!(schedule.makespan, 7);
        let idle_segments = schedule
            .timeline
            .segments()
            .iter()
            .filter(|s| s.is_idle())
            .count();
        assert_eq!(idle_segments, 2);
        assert_invariants(&schedule, &procs);
    }

    #[test]
    fn test_remaining_ties_break_by_arrival_then_id() {
        // P2 and P3 arrive together with equal bursts; lower id goes first
        // once P1 finishes at t=2.
        let procs = vec![
            Process::new(1, 0, 2),
            Process::new(3, 1, 2),
            Process::new(2, 1, 2),
        ];
        let schedule = SrnScheduler::new().schedule(procs);
        assert_eq!(schedule.completion_order(), vec![1, 2, 3]);
        assert_eq!(schedule.preemptions, 0);
    }
}
