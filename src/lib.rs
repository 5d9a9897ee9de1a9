//! Rainfall hazard monitoring for a controller/viewer dashboard.
//!
//! One controller writes a shared rainfall record; several viewers poll it
//! and derive their facets (hazard alert, hazard scale, affected cities,
//! statistics, charts). The classification core lives in `alert`; everything
//! else here is the plumbing around it, minus transport and storage.

pub mod alert;
pub mod analysis;
pub mod config;
pub mod controller;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod viewer;

pub use alert::{assess, classify_city, classify_hazard, HazardAssessment};
pub use model::{City, CityStatus, HazardLevel, RainfallRecord, RecordEnvelope, RecordError};
