//! Rule engine for multi-criteria dispatching.
//!
//! Applies dispatching rules in sequence, consulting the next rule only
//! when the previous one ties, and finishes with a configurable
//! tie-breaking strategy.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, SchedulingContext};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep whichever candidate came first in the ready queue.
    #[default]
    ReadyOrder,
    /// Lowest process ID wins.
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Srn)
///     .with_tie_breaker(rules::ArrivalOrder);
/// assert_eq!(engine.rule_names(), vec!["SRN", "FCFS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::ReadyOrder,
            epsilon: 1e-9,
        }
    }

    /// SPN selection: shortest burst, then earliest arrival, then lowest id.
    pub fn spn() -> Self {
        Self::new()
            .with_rule(rules::Spn)
            .with_tie_breaker(rules::ArrivalOrder)
            .with_final_tie_breaker(TieBreaker::ById)
    }

    /// SRN selection: shortest remaining time, then earliest arrival, then lowest id.
    pub fn srn() -> Self {
        Self::new()
            .with_rule(rules::Srn)
            .with_tie_breaker(rules::ArrivalOrder)
            .with_final_tie_breaker(TieBreaker::ById)
    }

    /// HRRN selection: highest response ratio, first in ready order on ties.
    ///
    /// Ratios are compared exactly. Close but distinct ratios arise once
    /// bursts reach ~1e5, and the higher one must still win.
    pub fn hrrn() -> Self {
        Self::new()
            .with_rule(rules::Hrrn)
            .with_final_tie_breaker(TieBreaker::ReadyOrder)
            .with_epsilon(0.0)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sets the tolerance below which two scores count as equal.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes. `Less` means `a` should be dispatched first.
    pub fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match self.tie_breaker {
            TieBreaker::ReadyOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// Candidates are scanned in order and the incumbent is replaced only
    /// on a strict improvement, so full ties resolve to the earliest one.
    pub fn select_best(&self, candidates: &[&Process], context: &SchedulingContext) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }

        let mut best = 0;
        for (i, candidate) in candidates.iter().enumerate().skip(1) {
            if self.compare(candidate, candidates[best], context) == Ordering::Less {
                best = i;
            }
        }
        Some(best)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .field("epsilon", &self.epsilon)
            .finish()
    }
}
