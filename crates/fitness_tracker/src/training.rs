//! Workout kinds and their distance, speed and calorie formulas.
//!
//! Every workout shares [`TrainingBase`] (action count, duration in hours and
//! weight in kg). The [`Training`] trait supplies the generic distance and
//! speed formulas; each variant provides its own calorie formula and may
//! override speed.

use std::fmt;
use std::str::FromStr;

use crate::message::InfoMessage;
use crate::{TrackerError, TrackerResult};

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Step length factor for running and walking; divided by `M_IN_KM` to get
/// km per action.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length factor for swimming; divided by `M_IN_KM` to get km per
/// stroke.
pub const SWIM_LEN_STEP: f64 = 1.38;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Sensor package tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Resolve a raw package tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> TrackerResult<Self> {
        match tag {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            other => Err(TrackerError::UnknownWorkoutKind(other.to_string())),
        }
    }

    /// Name shown in the rendered summary.
    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional arguments a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    pub fn len_step(self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::SportsWalking => LEN_STEP,
            WorkoutKind::Swimming => SWIM_LEN_STEP,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// Requires a finite value strictly greater than zero.
pub(crate) fn positive(field: &'static str, value: f64) -> TrackerResult<f64> {
    if !value.is_finite() {
        return Err(TrackerError::InvalidArgument {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(TrackerError::InvalidArgument {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Requires a finite, non-negative whole number.
pub(crate) fn count(field: &'static str, value: f64) -> TrackerResult<u64> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrackerError::InvalidArgument {
            field,
            value,
            reason: "must be a non-negative number",
        });
    }
    if value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(TrackerError::InvalidArgument {
            field,
            value,
            reason: "must be a whole number",
        });
    }
    Ok(value as u64)
}

/// Requires a whole number strictly greater than zero.
pub(crate) fn positive_count(field: &'static str, value: f64) -> TrackerResult<u64> {
    let n = count(field, value)?;
    if n == 0 {
        return Err(TrackerError::InvalidArgument {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(n)
}

/// Fields every workout carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainingBase {
    action: u64,
    duration: f64,
    weight: f64,
}

impl TrainingBase {
    /// `action` is the step or stroke count, `duration` is in hours and
    /// `weight` in kilograms.
    pub fn new(action: u64, duration: f64, weight: f64) -> TrackerResult<Self> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }

    pub fn action(&self) -> u64 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

pub trait Training {
    fn base(&self) -> &TrainingBase;

    fn kind(&self) -> WorkoutKind;

    /// Distance covered in km.
    fn distance(&self) -> f64 {
        self.base().action as f64 * self.kind().len_step() / M_IN_KM
    }

    /// Average speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Energy spent in kcal.
    fn spent_calories(&self) -> f64;

    fn summarize(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind().display_name(),
            self.base().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> TrackerResult<Self> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * (self.base.duration * MIN_IN_H)
    }
}

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// 1000 / 3600 rounded to three decimals. Output digits depend on the rounding.
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height_m: f64,
    mean_speed_ms: f64,
}

impl SportsWalking {
    /// `height` is in centimetres.
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> TrackerResult<Self> {
        let base = TrainingBase::new(action, duration, weight)?;
        let height_m = positive("height", height)? / CM_IN_M;
        let mut walking = Self {
            base,
            height_m,
            mean_speed_ms: 0.0,
        };
        walking.mean_speed_ms = walking.mean_speed() * KMH_IN_MSEC;
        Ok(walking)
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    /// Average speed in m/s.
    pub fn mean_speed_ms(&self) -> f64 {
        self.mean_speed_ms
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.base.weight;
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + (self.mean_speed_ms.powi(2) / self.height_m)
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * (self.base.duration * MIN_IN_H)
    }
}

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_FACTOR: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool: f64,
    count_pool: u64,
}

impl Swimming {
    /// `length_pool` is in metres; `count_pool` is the number of pool
    /// lengths and must be at least one.
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u64,
    ) -> TrackerResult<Self> {
        let base = TrainingBase::new(action, duration, weight)?;
        let length_pool = positive("length_pool", length_pool)?;
        if count_pool == 0 {
            return Err(TrackerError::InvalidArgument {
                field: "count_pool",
                value: 0.0,
                reason: "must be greater than zero",
            });
        }
        Ok(Self {
            base,
            length_pool,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    // distance() keeps the stroke-based formula; only speed uses the pool.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_FACTOR
            * self.base.weight
            * self.base.duration
    }
}
