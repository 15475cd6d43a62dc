//! Pipeline orchestration
//!
//! This module provides the public API for Synheart Stride: turn sensor
//! packages into computed summaries and rendered report lines. Each package
//! is processed independently; no state is carried between workouts.

use crate::error::MetricsError;
use crate::factory::read_package;
use crate::schema::SensorPackage;
use crate::types::WorkoutSummary;

/// Compute derived metrics for one sensor package
pub fn package_to_summary(package: &SensorPackage) -> Result<WorkoutSummary, MetricsError> {
    let workout = read_package(&package.workout_type, &package.data)?;
    Ok(workout.summary())
}

/// Compute summaries for a batch of packages, preserving input order
///
/// Fails on the first bad package; callers that prefer to skip instead
/// process packages one at a time.
pub fn process_packages(packages: &[SensorPackage]) -> Result<Vec<WorkoutSummary>, MetricsError> {
    packages.iter().map(package_to_summary).collect()
}

/// Render the one-line report for each package, preserving input order
pub fn render_report(packages: &[SensorPackage]) -> Result<Vec<String>, MetricsError> {
    let summaries = process_packages(packages)?;
    Ok(summaries.iter().map(WorkoutSummary::message).collect())
}

/// Built-in demo batch mirroring a typical tracker hand-off
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_report_lines() {
        let lines = render_report(&demo_packages()).unwrap();

        assert_eq!(
            lines,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
                    .to_string(),
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
                    .to_string(),
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let summaries = process_packages(&demo_packages()).unwrap();
        let kinds: Vec<&str> = summaries.iter().map(|s| s.workout_kind.as_str()).collect();
        assert_eq!(kinds, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_bad_package_stops_the_batch() {
        let mut packages = demo_packages();
        packages.insert(1, SensorPackage::new("XYZ", vec![1.0]));

        let err = process_packages(&packages).unwrap_err();
        assert!(matches!(err, MetricsError::UnknownWorkoutType(_)));
    }

    #[test]
    fn test_processing_is_repeatable() {
        let packages = demo_packages();
        let first = process_packages(&packages).unwrap();
        let second = process_packages(&packages).unwrap();
        assert_eq!(first, second);
    }
}
