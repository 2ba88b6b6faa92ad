//! Turns a raw `(tag, args)` sensor package into a concrete workout.

use tracing::{debug, warn};

use crate::training::{
    Running, SportsWalking, Swimming, Training, TrainingBase, WorkoutKind, count, positive_count,
};
use crate::{TrackerError, TrackerResult};

/// Any supported workout, resolved from a sensor package.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }

    /// Build a workout of `kind` from positional arguments in declared field
    /// order. `args` must already have the kind's arity.
    fn from_args(kind: WorkoutKind, args: &[f64]) -> TrackerResult<Self> {
        let action = count("action", args[0])?;
        let (duration, weight) = (args[1], args[2]);
        Ok(match kind {
            WorkoutKind::Running => Workout::Running(Running::new(action, duration, weight)?),
            WorkoutKind::SportsWalking => {
                Workout::SportsWalking(SportsWalking::new(action, duration, weight, args[3])?)
            }
            WorkoutKind::Swimming => Workout::Swimming(Swimming::new(
                action,
                duration,
                weight,
                args[3],
                positive_count("count_pool", args[4])?,
            )?),
        })
    }
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        self.inner().base()
    }

    fn kind(&self) -> WorkoutKind {
        self.inner().kind()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }
}

/// Read a sensor package: resolve `workout_type` and bind `data`
/// positionally to that workout's fields.
pub fn read_package(workout_type: &str, data: &[f64]) -> TrackerResult<Workout> {
    let result = WorkoutKind::from_tag(workout_type).and_then(|kind| {
        if data.len() != kind.arity() {
            return Err(TrackerError::ArgumentArityMismatch {
                tag: workout_type.to_string(),
                expected: kind.arity(),
                actual: data.len(),
                args: data.to_vec(),
            });
        }
        Workout::from_args(kind, data)
    });

    match &result {
        Ok(workout) => {
            debug!(kind = workout.kind().tag(), "package accepted");
            metrics::counter!("fitness_tracker_packages_total", "kind" => workout.kind().tag())
                .increment(1);
        }
        Err(e) => {
            warn!(workout_type = workout_type, error = %e, "package rejected");
            metrics::counter!("fitness_tracker_packages_rejected_total", "reason" => rejection_reason(e))
                .increment(1);
        }
    }
    result
}

fn rejection_reason(err: &TrackerError) -> &'static str {
    match err {
        TrackerError::UnknownWorkoutKind(_) => "unknown_kind",
        TrackerError::ArgumentArityMismatch { .. } => "arity",
        TrackerError::InvalidArgument { .. } => "invalid_argument",
        _ => "other",
    }
}
