use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Summary of one completed workout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Kilometres per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the fixed one-line report.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_template() {
        let msg = InfoMessage::new("test", 1.25, 150.0, 4.0, 3.525);
        assert_eq!(
            msg.get_message(),
            "Тип тренировки: test; Длительность: 1.250 ч.; Дистанция: 150.000 км; \
             Ср. скорость: 4.000 км/ч; Потрачено ккал: 3.525."
        );
    }

    #[test]
    fn serializes_field_names() {
        let msg = InfoMessage::new("Running", 1.0, 9.75, 9.75, 797.805);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["calories"].as_f64(), Some(797.805));
    }

    #[test]
    fn schema_lists_all_fields() {
        let schema = schemars::schema_for!(InfoMessage);
        let value = serde_json::to_value(&schema).unwrap();
        for field in ["training_type", "duration", "distance", "speed", "calories"] {
            assert!(value["properties"].get(field).is_some(), "missing {field}");
        }
    }
}
