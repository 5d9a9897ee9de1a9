/// Core data types for the rainfall monitoring dashboard.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no classification logic and no I/O, only types and the
/// record shapes exchanged with the `/data/{id}` endpoints.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Severity types
// ---------------------------------------------------------------------------

/// Region-wide rainfall hazard, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl HazardLevel {
    /// All levels, lowest first.
    pub const ALL: [HazardLevel; 4] = [
        HazardLevel::Low,
        HazardLevel::Medium,
        HazardLevel::High,
        HazardLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HazardLevel::Low => "low",
            HazardLevel::Medium => "medium",
            HazardLevel::High => "high",
            HazardLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for HazardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HazardLevel::Low => write!(f, "LOW"),
            HazardLevel::Medium => write!(f, "MEDIUM"),
            HazardLevel::High => write!(f, "HIGH"),
            HazardLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for HazardLevel {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(HazardLevel::Low),
            "medium" => Ok(HazardLevel::Medium),
            "high" => Ok(HazardLevel::High),
            "critical" => Ok(HazardLevel::Critical),
            other => Err(RecordError::UnknownLevel(other.to_string())),
        }
    }
}

/// Per-city rainfall status, in ascending order of severity.
///
/// Deliberately a separate type from `HazardLevel`: the thresholds are in mm
/// of accumulated rainfall rather than mm/hr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityStatus {
    Safe,
    Warning,
    Danger,
    Critical,
}

impl CityStatus {
    pub const ALL: [CityStatus; 4] = [
        CityStatus::Safe,
        CityStatus::Warning,
        CityStatus::Danger,
        CityStatus::Critical,
    ];

    /// Position in a severity-sorted city list: critical 0, danger 1,
    /// warning 2, safe 3.
    pub fn sort_rank(&self) -> u8 {
        match self {
            CityStatus::Critical => 0,
            CityStatus::Danger => 1,
            CityStatus::Warning => 2,
            CityStatus::Safe => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CityStatus::Safe => "safe",
            CityStatus::Warning => "warning",
            CityStatus::Danger => "danger",
            CityStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for CityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityStatus::Safe => write!(f, "SAFE"),
            CityStatus::Warning => write!(f, "WARNING"),
            CityStatus::Danger => write!(f, "DANGER"),
            CityStatus::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for CityStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe" => Ok(CityStatus::Safe),
            "warning" => Ok(CityStatus::Warning),
            "danger" => Ok(CityStatus::Danger),
            "critical" => Ok(CityStatus::Critical),
            other => Err(RecordError::UnknownLevel(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// A city affected by the current rainfall event.
///
/// `status` is a snapshot taken when the city was added to the record; it
/// is not recomputed when the record is read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub rainfall: f64,   // mm
    pub population: u64,
    pub status: CityStatus,
}

/// The shared measurement record written by the controller and polled by
/// every viewer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfallRecord {
    pub rainfall: f64,    // mm
    pub duration: f64,    // hours
    pub intensity: f64,   // mm/hr
    pub region: String,
    pub cities: Vec<City>,
    pub wind_speed: f64,  // km/h
    pub humidity: f64,    // %
    pub temperature: f64, // °C
}

/// Response body of `GET /data/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEnvelope {
    pub id: String,
    pub data: RainfallRecord,
    /// Epoch milliseconds at which the record was written.
    pub timestamp: i64,
}

impl RecordEnvelope {
    /// The write time as a UTC datetime, or `None` if the timestamp is out
    /// of chrono's representable range.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

/// Request body of `PUT /data/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub data: RainfallRecord,
}

/// Response body of a successful `PUT /data/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateReceipt {
    pub message: String,
    pub id: String,
    pub timestamp: i64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when decoding or editing a rainfall record.
#[derive(Debug, PartialEq)]
pub enum RecordError {
    /// The payload was not valid JSON.
    ParseError(String),
    /// Valid JSON, but not shaped like a record or envelope.
    InvalidShape(String),
    /// A severity label did not match any known level.
    UnknownLevel(String),
    /// A city failed the add-time checks (name, rainfall, population).
    InvalidCity { name: String, reason: String },
    /// `remove_city` was given an index past the end of the list.
    CityIndexOutOfRange { index: usize, len: usize },
    /// An envelope timestamp (epoch ms) outside chrono's representable range.
    TimestampOutOfRange(i64),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RecordError::InvalidShape(msg) => write!(f, "Invalid record shape: {}", msg),
            RecordError::UnknownLevel(label) => write!(f, "Unknown severity label: {}", label),
            RecordError::InvalidCity { name, reason } => {
                write!(f, "Invalid city '{}': {}", name, reason)
            }
            RecordError::CityIndexOutOfRange { index, len } => {
                write!(f, "City index {} out of range for {} cities", index, len)
            }
            RecordError::TimestampOutOfRange(ms) => {
                write!(f, "Timestamp {} ms is out of range", ms)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::ParseError(err.to_string())
    }
}
