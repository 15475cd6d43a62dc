//! Error types for Synheart Stride

use thiserror::Error;

/// Errors that can occur while building or reporting workouts
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("No such workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("{kind} takes {expected} sensor values, got {got}")]
    ArgumentCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse sensor package: {0}")]
    ParseError(String),

    #[error("Invalid sensor package: {0}")]
    InvalidPackage(String),
}
