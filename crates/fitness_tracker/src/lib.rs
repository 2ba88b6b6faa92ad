//! Workout calculator: turns raw sensor packages into distance, speed and
//! calorie summaries for running, sports walking and swimming.

use thiserror::Error;

pub mod config;
pub mod dispatch;
pub mod message;
pub mod package;
pub mod training;

pub use dispatch::{Workout, read_package};
pub use message::InfoMessage;
pub use package::Package;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, WorkoutKind};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid argument `{field}` = {value}: {reason}")]
    InvalidArgument {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("unknown workout kind: {0:?}")]
    UnknownWorkoutKind(String),
    #[error("workout {tag:?} expects {expected} arguments, got {actual}: {args:?}")]
    ArgumentArityMismatch {
        tag: String,
        expected: usize,
        actual: usize,
        args: Vec<f64>,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_carries_counts_and_args() {
        let err = TrackerError::ArgumentArityMismatch {
            tag: "WLK".into(),
            expected: 4,
            actual: 3,
            args: vec![9000.0, 1.0, 75.0],
        };
        let text = err.to_string();
        assert!(text.contains("WLK"));
        assert!(text.contains("expects 4"));
        assert!(text.contains("got 3"));
        assert!(text.contains("[9000.0, 1.0, 75.0]"));
    }

    #[test]
    fn unknown_kind_message_names_tag() {
        let err = TrackerError::UnknownWorkoutKind("XYZ".into());
        assert!(err.to_string().contains("XYZ"));
    }
}
