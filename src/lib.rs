//! Synheart Stride - Workout metrics engine for raw fitness sensor packages
//!
//! Stride turns raw workout sensor packages into derived fitness metrics
//! (distance, mean speed, calories) through a small deterministic pipeline:
//! package dispatch → per-kind metric calculation → summary rendering.
//!
//! ## Modules
//!
//! - **workouts**: Metric calculators for running, sports walking, swimming
//! - **factory**: Workout type dispatch from raw sensor packages
//! - **pipeline**: Batch processing and report line rendering
//! - **schema / report**: Versioned input and output JSON surfaces

pub mod error;
pub mod factory;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod types;
pub mod workouts;

pub use error::MetricsError;
pub use factory::read_package;
pub use pipeline::{demo_packages, package_to_summary, process_packages, render_report};
pub use report::{ReportEncoder, ReportPayload, REPORT_VERSION};
pub use schema::{PackageReader, SensorPackage, SCHEMA_VERSION};
pub use types::{SessionRecord, WorkoutKind, WorkoutSummary};
pub use workouts::{Running, SportsWalking, Swimming, Workout};

/// Stride version embedded in report payloads
pub const STRIDE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "synheart-stride";
