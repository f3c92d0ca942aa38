//! Dispatching rules and rule engine.
//!
//! Each scheduling discipline reduces to "pick the ready process with the
//! best score". The score is produced by a [`DispatchingRule`], and
//! [`RuleEngine`] chains rules so that later ones only break ties of
//! earlier ones.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
//! use cpu_sched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spn)
//!     .with_tie_breaker(rules::ArrivalOrder)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let ready = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
//! let refs: Vec<&Process> = ready.iter().collect();
//! assert_eq!(engine.select_best(&refs, &SchedulingContext::at_time(1)), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that prefer larger values
/// (e.g., HRRN's response ratio) negate them.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPN", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process at the current simulation time.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;
}
