//! Error types for the simulator.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors that can occur while loading or simulating a workload.
#[derive(Error, Debug)]
pub enum SimError {
    /// The workload failed input validation.
    #[error("invalid workload: {}", summarize(.0))]
    InvalidWorkload(Vec<ValidationError>),

    /// Algorithm name not recognized.
    #[error("unknown algorithm '{0}' (expected spn, srn or hrrn)")]
    UnknownAlgorithm(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Workload file is not valid JSON for the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_workload_message() {
        let err = SimError::InvalidWorkload(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "P2 has burst time 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid workload: Duplicate process ID: 1; P2 has burst time 0"
        );
    }

    #[test]
    fn test_unknown_algorithm_message() {
        let err = SimError::UnknownAlgorithm("fifo".into());
        assert!(err.to_string().contains("'fifo'"));
    }
}
