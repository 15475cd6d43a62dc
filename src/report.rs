//! Report encoding
//!
//! Wraps computed workout summaries in a versioned JSON envelope with
//! producer and provenance metadata for downstream consumers.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MetricsError;
use crate::types::WorkoutSummary;
use crate::{PRODUCER_NAME, STRIDE_VERSION};

/// Current report schema version
pub const REPORT_VERSION: &str = "stride.report.v1";

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Complete report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub workouts: Vec<WorkoutSummary>,
}

/// Report encoder for producing versioned JSON payloads
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Wrap summaries in the report envelope
    pub fn encode(&self, workouts: &[WorkoutSummary]) -> ReportPayload {
        ReportPayload {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: STRIDE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            workouts: workouts.to_vec(),
        }
    }

    /// Encode to a JSON string
    pub fn encode_to_json(&self, workouts: &[WorkoutSummary]) -> Result<String, MetricsError> {
        let payload = self.encode(workouts);
        serde_json::to_string_pretty(&payload).map_err(MetricsError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{demo_packages, process_packages};

    #[test]
    fn test_envelope_fields() {
        let summaries = process_packages(&demo_packages()).unwrap();
        let encoder = ReportEncoder::with_instance_id("test-instance".to_string());
        let payload = encoder.encode(&summaries);

        assert_eq!(payload.report_version, REPORT_VERSION);
        assert_eq!(payload.producer.name, PRODUCER_NAME);
        assert_eq!(payload.producer.instance_id, "test-instance");
        assert_eq!(payload.workouts.len(), 3);
    }

    #[test]
    fn test_encode_to_json() {
        let summaries = process_packages(&demo_packages()).unwrap();
        let json = ReportEncoder::new().encode_to_json(&summaries).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["report_version"], "stride.report.v1");
        assert_eq!(value["producer"]["name"], "synheart-stride");
        assert_eq!(value["workouts"][1]["workout_kind"], "Running");
        assert!((value["workouts"][1]["calories_kcal"].as_f64().unwrap() - 699.75).abs() < 1e-6);
    }
}
