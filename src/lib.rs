//! Discrete-event CPU scheduling simulator.
//!
//! Compares three classical single-CPU disciplines over the same process
//! set and reports per-process timing metrics and averages.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `TraceEvent`, `Timeline`, `Schedule`, `Algorithm`
//! - **`dispatching`**: selection rules (SPN, SRN, HRRN) and the rule engine
//! - **`scheduler`**: the three schedulers and `ScheduleKpi`
//! - **`validation`**: input precondition checks
//! - **`workload`**: sample, JSON and random process sets
//! - **`runner`**: validated single runs and multi-algorithm comparisons
//! - **`report`**: text rendering of traces, tables and Gantt charts
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Algorithm;
//! use cpu_sched::runner::compare;
//! use cpu_sched::workload::Workload;
//!
//! let comparison = compare(&Workload::sample(), &Algorithm::ALL).unwrap();
//! let srn = comparison.schedule(Algorithm::Srn).unwrap();
//! assert!((srn.average_waiting() - 6.6).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod runner;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimError};
