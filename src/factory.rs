//! Sensor package dispatch
//!
//! Maps a workout type code to the matching metric calculator and binds the
//! raw sensor values positionally: action count, duration in hours, weight in
//! kg, then the kind-specific tail (height for walking; pool length and lap
//! count for swimming).

use crate::error::MetricsError;
use crate::types::WorkoutKind;
use crate::workouts::{Running, SportsWalking, Swimming, Workout};

/// Build a workout calculator from raw sensor data
///
/// Fails with [`MetricsError::UnknownWorkoutType`] for an unrecognized code
/// and [`MetricsError::ArgumentCount`] when the value count does not match
/// the kind's field order; no partial calculator is ever constructed.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Workout>, MetricsError> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| MetricsError::UnknownWorkoutType(workout_type.to_string()))?;

    let expected = kind.sensor_value_count();
    if data.len() != expected {
        return Err(MetricsError::ArgumentCount {
            kind: kind.label(),
            expected,
            got: data.len(),
        });
    }

    let workout: Box<dyn Workout> = match kind {
        WorkoutKind::Running => Box::new(Running::new(data[0] as u32, data[1], data[2])),
        WorkoutKind::SportsWalking => {
            Box::new(SportsWalking::new(data[0] as u32, data[1], data[2], data[3]))
        }
        WorkoutKind::Swimming => Box::new(Swimming::new(
            data[0] as u32,
            data[1],
            data[2],
            data[3],
            data[4],
        )),
    };

    Ok(workout)
}
