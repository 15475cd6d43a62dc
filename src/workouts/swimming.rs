//! Swimming workout

use super::{Workout, M_IN_KM};
use crate::types::{SessionRecord, WorkoutKind};

/// Swimming metric calculator
#[derive(Debug, Clone)]
pub struct Swimming {
    record: SessionRecord,
    /// Pool length (m)
    pool_length_m: f64,
    /// Laps swum during the session
    pool_lap_count: f64,
}

impl Swimming {
    /// Distance covered by one stroke (m)
    const STROKE_LENGTH_M: f64 = 1.38;
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_FACTOR: f64 = 2.0;

    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: f64,
    ) -> Self {
        Self {
            record: SessionRecord {
                action_count,
                duration_hours,
                weight_kg,
            },
            pool_length_m,
            pool_lap_count,
        }
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn record(&self) -> &SessionRecord {
        &self.record
    }

    fn step_length_m(&self) -> f64 {
        Self::STROKE_LENGTH_M
    }

    /// Mean speed from pool geometry rather than stroke distance
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count / M_IN_KM / self.record.duration_hours
    }

    fn spent_calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT) * Self::WEIGHT_FACTOR * self.record.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_swim() -> Swimming {
        Swimming::new(720, 1.0, 80.0, 25.0, 40.0)
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        // 720 strokes * 1.38 m / 1000 = 0.9936 km
        assert!((reference_swim().distance_km() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed_uses_pool_geometry() {
        // 25 m * 40 laps / 1000 / 1 h = 1.0 km/h, independent of strokes
        assert!((reference_swim().mean_speed_kmh() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories() {
        // (1.0 + 1.1) * 2 * 80 = 336.0
        assert!((reference_swim().spent_calories_kcal() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_reports_stroke_distance() {
        let summary = reference_swim().summary();
        assert_eq!(summary.workout_kind, "Swimming");
        assert!((summary.distance_km - 0.9936).abs() < 1e-9);
        assert!((summary.mean_speed_kmh - 1.0).abs() < 1e-9);
    }
}
