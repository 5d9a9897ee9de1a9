//! Rainfall hazard alerting.
//!
//! Submodules:
//! - `thresholds`: intensity → hazard level and rainfall → city status.
//! - `assessment`: the fixed per-level alert bundles.
//! - `scale`: hazard scale reference bands and the risk gauge.
//! - `staleness`: flags a record the controller has stopped updating.

pub mod assessment;
pub mod scale;
pub mod staleness;
pub mod thresholds;

pub use assessment::{assess, HazardAssessment};
pub use thresholds::{classify_city, classify_hazard};
