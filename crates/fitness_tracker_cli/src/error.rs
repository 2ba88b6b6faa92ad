//! Errors surfaced by the command-line runner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("tracker error: {0}")]
    Tracker(#[from] fitness_tracker::TrackerError),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{failed} of {total} packages failed")]
    PackagesFailed { failed: usize, total: usize },
}

/// Result type alias for runner operations.
pub type CliResult<T> = Result<T, CliError>;
