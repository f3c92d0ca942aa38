//! Trace events and Gantt timeline.
//!
//! Schedulers describe what happened during a run as data: an ordered list
//! of [`TraceEvent`]s and a [`Timeline`] of contiguous [`Segment`]s.
//! Formatting is left to the `report` module.

use serde::{Deserialize, Serialize};

/// A single event in the simulation trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Simulated time at which the event happened.
    pub time: i64,
    /// What happened.
    pub kind: EventKind,
}

/// Classification of trace events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// Process admitted to the ready queue.
    Arrive { pid: u32 },
    /// Process dispatched for the first time.
    Start { pid: u32 },
    /// Previously preempted process dispatched again.
    Resume { pid: u32 },
    /// Running process returned to the ready queue in favor of `by`.
    Preempt { pid: u32, by: u32 },
    /// Process finished its last unit of work.
    Complete { pid: u32 },
    /// CPU had nothing to run during `[time, time + 1)`.
    Idle,
    /// HRRN response ratio computed for a ready process.
    RatioEvaluated { pid: u32, waited: i64, ratio: f64 },
}

impl TraceEvent {
    /// Creates an event.
    pub fn new(time: i64, kind: EventKind) -> Self {
        Self { time, kind }
    }

    /// Process this event refers to, if any.
    pub fn pid(&self) -> Option<u32> {
        match self.kind {
            EventKind::Arrive { pid }
            | EventKind::Start { pid }
            | EventKind::Resume { pid }
            | EventKind::Preempt { pid, .. }
            | EventKind::Complete { pid }
            | EventKind::RatioEvaluated { pid, .. } => Some(pid),
            EventKind::Idle => None,
        }
    }
}

/// A contiguous slice of the timeline.
///
/// `pid = None` marks an idle slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that ran, or `None` for idle.
    pub pid: Option<u32>,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Segment {
    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the CPU was idle during this slice.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pid.is_none()
    }
}

/// Ordered, gap-free sequence of segments.
///
/// Adjacent slices for the same occupant are merged, so a process that runs
/// several consecutive ticks under SRN shows up as one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[start, end)` for `pid`, merging with the previous slice
    /// when it has the same occupant and ends at `start`.
    pub fn record(&mut self, pid: Option<u32>, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(Segment { pid, start, end });
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// End of the last segment (0 if empty).
    pub fn end(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Segments during which `pid` ran.
    pub fn segments_for(&self, pid: u32) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.pid == Some(pid))
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration)
            .sum()
    }
}
