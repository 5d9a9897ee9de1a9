/// Boundary normalization for polled rainfall records.
///
/// Records written by older controllers are not always the strict shape
/// in `model::RainfallRecord`. Measurements may arrive as plain numbers,
/// numeric strings, `null`, or objects of the form
/// `{ "amount": 12.5, "unit": "mm", "intensity": 3.1 }`. This module is the
/// single place those variants are coerced; everything downstream sees only
/// strict `f64` values.
///
/// Coercion rules:
///   - number               → itself (non-finite → 0)
///   - numeric string       → parsed value
///   - `{amount, ...}`      → `amount`
///   - missing / null / bad → 0, the lowest severity on every scale

use serde_json::{Map, Value};

use crate::alert::thresholds::classify_city;
use crate::logging::{self, Component};
use crate::model::{City, CityStatus, RainfallRecord, RecordEnvelope, RecordError};

/// Envelope id used when a bare record is normalized without one.
pub const UNKNOWN_RECORD_ID: &str = "unknown";

// ---------------------------------------------------------------------------
// Scalar coercion
// ---------------------------------------------------------------------------

/// Coerces a loosely-typed measurement into a finite number, if possible.
pub fn measurement_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Object(obj) => obj.get("amount").and_then(measurement_value),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn number_field(obj: &Map<String, Value>, key: &str) -> f64 {
    obj.get(key).and_then(measurement_value).unwrap_or(0.0)
}

/// Intensity may be reported at the top level or nested in a rainfall object.
fn intensity_field(obj: &Map<String, Value>) -> f64 {
    obj.get("intensity")
        .and_then(measurement_value)
        .or_else(|| {
            obj.get("rainfall")
                .and_then(Value::as_object)
                .and_then(|r| r.get("intensity"))
                .and_then(measurement_value)
        })
        .unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// City coercion
// ---------------------------------------------------------------------------

/// Normalizes one city entry. Entries without a name are dropped.
///
/// A stored status is kept as-is: it is the snapshot taken at add time. The
/// status is only classified here when the entry carries none.
fn normalize_city(value: &Value) -> Option<City> {
    let obj = value.as_object()?;
    let name = obj.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }

    let rainfall = number_field(obj, "rainfall").max(0.0);
    let population = obj
        .get("population")
        .and_then(measurement_value)
        .filter(|p| *p > 0.0)
        .map(|p| p.round() as u64)
        .unwrap_or(0);
    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<CityStatus>().ok())
        .unwrap_or_else(|| classify_city(rainfall));

    Some(City {
        name: name.to_string(),
        rainfall,
        population,
        status,
    })
}

// ---------------------------------------------------------------------------
// Record coercion
// ---------------------------------------------------------------------------

/// Normalizes a record object (the `data` field of an envelope).
pub fn normalize_record(value: &Value) -> Result<RainfallRecord, RecordError> {
    let obj = value
        .as_object()
        .ok_or_else(|| RecordError::InvalidShape("record must be a JSON object".to_string()))?;

    let cities = match obj.get("cities") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => {
            let cities: Vec<City> = entries.iter().filter_map(normalize_city).collect();
            if cities.len() < entries.len() {
                logging::debug(
                    Component::Ingest,
                    None,
                    &format!("Dropped {} unnamed city entries", entries.len() - cities.len()),
                );
            }
            cities
        }
        Some(_) => {
            return Err(RecordError::InvalidShape("'cities' must be an array".to_string()));
        }
    };

    Ok(RainfallRecord {
        rainfall: number_field(obj, "rainfall"),
        duration: number_field(obj, "duration"),
        intensity: intensity_field(obj),
        region: obj
            .get("region")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        cities,
        wind_speed: number_field(obj, "windSpeed"),
        humidity: number_field(obj, "humidity"),
        temperature: number_field(obj, "temperature"),
    })
}

/// Parses a `GET /data/{id}` body, or a bare record, into an envelope.
///
/// A body is treated as an envelope when it has an object-valued `data`
/// field. Bare records get id `UNKNOWN_RECORD_ID` and timestamp 0.
pub fn parse_envelope(body: &str) -> Result<RecordEnvelope, RecordError> {
    let value: Value = serde_json::from_str(body)?;
    let obj = value
        .as_object()
        .ok_or_else(|| RecordError::InvalidShape("body must be a JSON object".to_string()))?;

    match obj.get("data") {
        Some(data @ Value::Object(_)) => {
            let id = obj
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_RECORD_ID)
                .to_string();
            let timestamp = obj
                .get("timestamp")
                .and_then(measurement_value)
                .map(|t| t as i64)
                .unwrap_or(0);
            let record = normalize_record(data).inspect_err(|e| {
                logging::log_record_failure(&id, "normalize", e);
            })?;
            Ok(RecordEnvelope {
                id,
                data: record,
                timestamp,
            })
        }
        Some(_) => Err(RecordError::InvalidShape("'data' must be an object".to_string())),
        None => Ok(RecordEnvelope {
            id: UNKNOWN_RECORD_ID.to_string(),
            data: normalize_record(&value)?,
            timestamp: 0,
        }),
    }
}
