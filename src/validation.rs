//! Input validation for process sets.
//!
//! Checks preconditions before any simulation runs. Detects:
//! - Empty process sets
//! - Duplicate or zero process IDs
//! - Negative arrival times
//! - Non-positive burst times (HRRN would divide by zero, SPN/SRN would
//!   never retire the process)
//! - Workloads whose last possible completion overflows `i64`
//!
//! Every violation is reported, not just the first one.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes to schedule.
    Empty,
    /// Two processes share the same ID.
    DuplicateId,
    /// Process ID is zero.
    ZeroId,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Latest arrival plus total burst does not fit the clock.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. All IDs positive
/// 3. No duplicate IDs
/// 4. All arrival times ≥ 0
/// 5. All burst times > 0
/// 6. Latest arrival + sum of bursts fits in `i64` (bounds the makespan)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::Empty,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroId,
                "Process ID must be positive, got 0",
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{} has burst time {}", p.id, p.burst_time),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time.max(0)).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Latest arrival {latest_arrival} plus total burst overflows the clock"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample()).is_ok());
    }

    #[test]
    fn test_empty() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::Empty);
    }

    #[test]
    fn test_duplicate_id() {
        let mut procs = sample();
        procs.push(Process::new(2, 5, 1));

        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('2')));
    }

    #[test]
    fn test_zero_id() {
        let errors = validate_processes(&[Process::new(0, 0, 1)]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroId));
    }

    #[test]
    fn test_non_positive_burst() {
        let procs = vec![Process::new(1, 0, 0), Process::new(2, 0, -3)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new(1, -1, 3)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_time_overflow() {
        let procs = vec![Process::new(1, 0, i64::MAX), Process::new(2, 1, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let late = vec![Process::new(1, i64::MAX, 1)];
        let errors = validate_processes(&late).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_large_but_bounded_input() {
        let procs = vec![Process::new(1, i64::MAX - 10, 4), Process::new(2, 0, 6)];
        assert!(validate_processes(&procs).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + zero burst on the duplicate
        let procs = vec![Process::new(1, 0, 2), Process::new(1, 3, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
