//! Sports walking workout

use super::{Workout, MIN_IN_HOUR};
use crate::types::{SessionRecord, WorkoutKind};

/// Sports walking metric calculator
#[derive(Debug, Clone)]
pub struct SportsWalking {
    record: SessionRecord,
    /// Athlete height (cm); must be nonzero
    height_cm: f64,
}

impl SportsWalking {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;

    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            record: SessionRecord {
                action_count,
                duration_hours,
                weight_kg,
            },
            height_cm,
        }
    }
}

impl Workout for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn record(&self) -> &SessionRecord {
        &self.record
    }

    fn spent_calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        // Floored quotient of squared speed over height, not a plain ratio.
        let speed_height_term = (speed.powi(2) / self.height_cm).floor();

        (Self::WEIGHT_FACTOR * self.record.weight_kg
            + speed_height_term * Self::SPEED_HEIGHT_FACTOR * self.record.weight_kg)
            * self.record.duration_hours
            * MIN_IN_HOUR
    }
}
