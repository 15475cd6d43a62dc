//! Core types for the Stride metrics engine
//!
//! This module defines the data that flows through the engine: the workout
//! kind identifier, the raw session record shared by every kind, and the
//! computed summary handed to the renderer.

use serde::{Deserialize, Serialize};

/// Workout kind identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Sensor package code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Resolve a sensor package code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::SportsWalking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    /// Label used in summary messages
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of raw values a sensor package of this kind carries
    pub fn sensor_value_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

/// Raw sensor fields shared by every workout session
///
/// Immutable once constructed; lives for one report cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    /// Steps or strokes registered by the tracker
    pub action_count: u32,
    /// Session length in hours; must be positive for a meaningful speed
    pub duration_hours: f64,
    /// Athlete weight (kg)
    pub weight_kg: f64,
}

/// Derived metrics for one workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout kind label
    pub workout_kind: String,
    /// Session length (hours)
    pub duration_hours: f64,
    /// Distance covered (km)
    pub distance_km: f64,
    /// Mean speed (km/h)
    pub mean_speed_kmh: f64,
    /// Energy spent (kcal)
    pub calories_kcal: f64,
}

impl WorkoutSummary {
    /// Render the fixed one-line report
    ///
    /// Every metric is printed with exactly three decimal digits, decimal
    /// point, no locale.
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.workout_kind,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_codes_round() {
        for kind in [
            WorkoutKind::Running,
            WorkoutKind::SportsWalking,
            WorkoutKind::Swimming,
        ] {
            assert_eq!(WorkoutKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(WorkoutKind::from_code("XYZ"), None);
    }

    #[test]
    fn test_message_layout() {
        let summary = WorkoutSummary {
            workout_kind: "Running".to_string(),
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_kcal: 699.75,
        };

        assert_eq!(
            summary.message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_message_always_three_decimals() {
        let summary = WorkoutSummary {
            workout_kind: "Swimming".to_string(),
            duration_hours: 0.5,
            distance_km: 0.9936,
            mean_speed_kmh: 2.0,
            calories_kcal: 12345.6789,
        };

        let message = summary.message();
        assert!(message.contains("Длительность: 0.500 ч."));
        assert!(message.contains("Дистанция: 0.994 км"));
        assert!(message.contains("Ср. скорость: 2.000 км/ч"));
        assert!(message.contains("Потрачено ккал: 12345.679."));
    }
}
