use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::TrackerResult;
use crate::dispatch::{Workout, read_package};

/// One raw sensor package: a workout tag plus positional readings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Package {
    /// `RUN`, `WLK` or `SWM`.
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> TrackerResult<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Packages processed when no input file is configured.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of packages.
pub fn parse_packages(json: &str) -> TrackerResult<Vec<Package>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_packages(path: &Path) -> TrackerResult<Vec<Package>> {
    let text = std::fs::read_to_string(path)?;
    parse_packages(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackerError;

    #[test]
    fn parses_integer_and_float_readings() {
        let packages =
            parse_packages(r#"[{"workout_type": "RUN", "data": [15000, 1.5, 75]}]"#).unwrap();
        assert_eq!(packages, vec![Package::new("RUN", [15000.0, 1.5, 75.0])]);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_packages(r#"[{"workout_type": "RUN"}]"#).unwrap_err();
        assert!(matches!(err, TrackerError::Json(_)));
    }

    #[test]
    fn sample_packages_all_dispatch() {
        for package in sample_packages() {
            assert!(package.read().is_ok(), "{package:?}");
        }
    }
}
