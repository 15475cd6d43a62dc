//! stride.sensor_package.v1 schema
//!
//! Vendor-neutral input record for one workout session: a type code plus an
//! ordered list of raw sensor values, as handed off by the tracker. Batches
//! arrive either as NDJSON (one package per line) or as a JSON array.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::types::WorkoutKind;

/// Current input schema version
pub const SCHEMA_VERSION: &str = "stride.sensor_package.v1";

/// One raw workout session as delivered by the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout type code (RUN, WLK, SWM)
    pub workout_type: String,
    /// Ordered raw sensor values for that workout type
    pub data: Vec<f64>,
    /// When the tracker recorded the session (UTC), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
            recorded_at: None,
        }
    }

    /// Attach the tracker-side recording time
    pub fn with_recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Validate the package against the known workout codes and arities
    ///
    /// This is the validation surface for batch tooling; the compute path
    /// itself performs the same code and arity checks on construction.
    pub fn validate(&self) -> Result<(), MetricsError> {
        let kind = WorkoutKind::from_code(&self.workout_type)
            .ok_or_else(|| MetricsError::UnknownWorkoutType(self.workout_type.clone()))?;

        let expected = kind.sensor_value_count();
        if self.data.len() != expected {
            return Err(MetricsError::ArgumentCount {
                kind: kind.label(),
                expected,
                got: self.data.len(),
            });
        }

        if let Some(value) = self.data.iter().find(|value| !value.is_finite()) {
            return Err(MetricsError::InvalidPackage(format!(
                "non-finite sensor value {value}"
            )));
        }

        Ok(())
    }
}

/// Parses sensor package batches from JSON inputs
pub struct PackageReader;

impl PackageReader {
    /// Parse a JSON array of sensor packages
    pub fn parse_array(json: &str) -> Result<Vec<SensorPackage>, MetricsError> {
        let packages: Vec<SensorPackage> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse NDJSON (one sensor package per line, blank lines skipped)
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<SensorPackage>, MetricsError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<SensorPackage>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(MetricsError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }

    /// Validate a batch, returning one entry per failing package
    pub fn validate_packages(packages: &[SensorPackage]) -> Vec<ValidationResult> {
        packages
            .iter()
            .enumerate()
            .filter_map(|(index, package)| {
                package.validate().err().map(|error| ValidationResult {
                    index,
                    workout_type: package.workout_type.clone(),
                    error,
                })
            })
            .collect()
    }
}

/// A package that failed validation
#[derive(Debug)]
pub struct ValidationResult {
    pub index: usize,
    pub workout_type: String,
    pub error: MetricsError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_package() {
        let json = r#"{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}"#;
        let package: SensorPackage = serde_json::from_str(json).unwrap();

        assert_eq!(package.workout_type, "SWM");
        assert_eq!(package.data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        assert!(package.recorded_at.is_none());
        assert!(package.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_recorded_at() {
        let json = r#"{"workout_type": "RUN", "data": [15000, 1, 75], "recorded_at": "2024-01-15T08:30:00Z"}"#;
        let package: SensorPackage = serde_json::from_str(json).unwrap();

        assert!(package.recorded_at.is_some());
        assert!(package.validate().is_ok());
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let ndjson = r#"
{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}

{"workout_type": "RUN", "data": [15000, 1, 75]}
"#;
        let packages = PackageReader::parse_ndjson(ndjson).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "SWM");
        assert_eq!(packages[1].workout_type, "RUN");
    }

    #[test]
    fn test_parse_ndjson_reports_line_number() {
        let ndjson = "{\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]}\nnot json";
        let err = PackageReader::parse_ndjson(ndjson).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_array() {
        let json = r#"[
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "WLK", "data": [9000, 1, 75, 180]}
        ]"#;
        let packages = PackageReader::parse_array(json).unwrap();
        assert_eq!(packages.len(), 2);
    }

    #[test]
    fn test_validate_catches_bad_packages() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("XYZ", vec![1.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0]),
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, f64::NAN]),
        ];

        let failures = PackageReader::validate_packages(&packages);
        assert_eq!(failures.len(), 3);
        assert_eq!(failures[0].index, 1);
        assert!(matches!(
            failures[0].error,
            MetricsError::UnknownWorkoutType(_)
        ));
        assert!(matches!(
            failures[1].error,
            MetricsError::ArgumentCount { expected: 4, got: 2, .. }
        ));
        assert!(matches!(
            failures[2].error,
            MetricsError::InvalidPackage(_)
        ));
    }
}
