//! Simulation domain models.
//!
//! Provides the data types describing a CPU scheduling run: the process
//! records being scheduled, the events a scheduler emits and the
//! resulting schedule.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDef` | Immutable `(id, arrival, burst)` input |
//! | `Process` | Per-run mutable record with derived metrics |
//! | `TraceEvent` | Arrival, dispatch, preemption, completion, idle |
//! | `Timeline` | Gantt segments |
//! | `Schedule` | Everything one run produced |

mod process;
mod schedule;
mod trace;

pub use process::{Process, ProcessDef};
pub use schedule::{Algorithm, Schedule};
pub use trace::{EventKind, Segment, Timeline, TraceEvent};
