//! Simulation state shared by all disciplines.
//!
//! Owns the process records of one run and implements the bookkeeping
//! every scheduler needs: arrival admission, dispatch, execution, idle
//! ticks, preemption and completion. Each mutation appends the matching
//! trace event and timeline segment, so the schedulers themselves only
//! decide *what* runs next.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::ReadyQueue;
use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::models::{Algorithm, EventKind, Process, Schedule, TraceEvent};
use crate::validation::validate_processes;

pub(crate) struct SimState {
    processes: Vec<Process>,
    index: HashMap<u32, usize>,
    /// Indices into `processes`, by arrival time (stable w.r.t. input order).
    arrivals: Vec<usize>,
    next_arrival: usize,
    ready: ReadyQueue,
    completed: HashSet<u32>,
    completion_order: Vec<u32>,
    time: i64,
    schedule: Schedule,
}

impl SimState {
    pub(crate) fn new(algorithm: Algorithm, processes: Vec<Process>) -> Self {
        // duplicate ids never finish, non-positive bursts rewind the clock
        debug_assert!(
            validate_processes(&processes).is_ok(),
            "invalid process set: {:?}",
            validate_processes(&processes).err()
        );
        let index = processes
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();
        let mut arrivals: Vec<usize> = (0..processes.len()).collect();
        arrivals.sort_by_key(|&i| processes[i].arrival_time);

        Self {
            processes,
            index,
            arrivals,
            next_arrival: 0,
            ready: ReadyQueue::new(),
            completed: HashSet::new(),
            completion_order: Vec::new(),
            time: 0,
            schedule: Schedule::new(algorithm),
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.completed.len() == self.processes.len()
    }

    pub(crate) fn process(&self, pid: u32) -> &Process {
        &self.processes[self.index[&pid]]
    }

    fn process_mut(&mut self, pid: u32) -> &mut Process {
        let i = self.index[&pid];
        &mut self.processes[i]
    }

    fn emit(&mut self, kind: EventKind) {
        self.schedule.trace.push(TraceEvent::new(self.time, kind));
    }

    /// Moves every process that has arrived by now into the ready queue.
    pub(crate) fn admit_arrivals(&mut self) {
        while let Some(&i) = self.arrivals.get(self.next_arrival) {
            let p = &self.processes[i];
            if !p.has_arrived(self.time) {
                break;
            }
            let pid = p.id;
            self.next_arrival += 1;
            if self.completed.contains(&pid) || !self.ready.push(pid) {
                continue;
            }
            debug!(time = self.time, pid, "arrive");
            self.emit(EventKind::Arrive { pid });
        }
    }

    /// Ready processes in queue order.
    pub(crate) fn ready_processes(&self) -> Vec<&Process> {
        self.ready.iter().map(|pid| self.process(pid)).collect()
    }

    /// Best ready process according to `engine`, without dequeuing it.
    pub(crate) fn select(&self, engine: &RuleEngine) -> Option<u32> {
        let candidates = self.ready_processes();
        let context = SchedulingContext::at_time(self.time);
        engine
            .select_best(&candidates, &context)
            .map(|i| candidates[i].id)
    }

    /// Appends a response-ratio evaluation for every ready process.
    pub(crate) fn trace_response_ratios(&mut self) {
        let time = self.time;
        let evaluations: Vec<EventKind> = self
            .ready_processes()
            .into_iter()
            .map(|p| EventKind::RatioEvaluated {
                pid: p.id,
                waited: p.waited_at(time),
                ratio: p.response_ratio(time),
            })
            .collect();
        for kind in evaluations {
            self.emit(kind);
        }
    }

    /// Takes `pid` off the ready queue and gives it the CPU.
    pub(crate) fn dispatch(&mut self, pid: u32) {
        self.ready.remove(pid);
        let time = self.time;
        let process = self.process_mut(pid);
        let resumed = process.start_time.is_some();
        process.mark_started(time);
        debug!(time, pid, resumed, "dispatch");
        if resumed {
            self.emit(EventKind::Resume { pid });
        } else {
            self.emit(EventKind::Start { pid });
        }
    }

    /// Returns the running `pid` to the ready queue in favor of `by`.
    pub(crate) fn preempt(&mut self, pid: u32, by: u32) {
        debug!(time = self.time, pid, by, "preempt");
        self.ready.push(pid);
        self.schedule.preemptions += 1;
        self.emit(EventKind::Preempt { pid, by });
    }

    /// Runs `pid` for `ticks` units. Returns `true` if it completed.
    pub(crate) fn execute(&mut self, pid: u32, ticks: i64) -> bool {
        let start = self.time;
        self.time += ticks;
        self.schedule.busy_time += ticks;
        self.schedule.timeline.record(Some(pid), start, self.time);

        let time = self.time;
        let process = self.process_mut(pid);
        process.remaining_time -= ticks;
        if process.remaining_time > 0 {
            return false;
        }

        process.complete(time);
        self.completed.insert(pid);
        self.completion_order.push(pid);
        debug!(time, pid, "complete");
        self.emit(EventKind::Complete { pid });
        true
    }

    /// Runs `pid` for its entire remaining time.
    pub(crate) fn run_to_completion(&mut self, pid: u32) {
        let remaining = self.process(pid).remaining_time;
        self.execute(pid, remaining);
    }

    /// Advances the clock one tick with nothing running.
    pub(crate) fn idle_tick(&mut self) {
        self.emit(EventKind::Idle);
        self.schedule.timeline.record(None, self.time, self.time + 1);
        self.schedule.idle_time += 1;
        self.time += 1;
    }

    /// Consumes the state into the finished schedule.
    pub(crate) fn finish(self) -> Schedule {
        let Self {
            processes,
            index,
            completion_order,
            time,
            mut schedule,
            ..
        } = self;

        let mut slots: Vec<Option<Process>> = processes.into_iter().map(Some).collect();
        schedule.processes = completion_order
            .iter()
            .filter_map(|pid| slots[index[pid]].take())
            .collect();
        schedule.makespan = time;
        schedule
    }
}
