/// Controller-side record editing.
///
/// The controller view edits a draft of the shared record and submits it
/// with `PUT /data/{id}`. Intensity is never entered directly: it is derived
/// from rainfall and duration whenever either changes. City statuses are
/// classified once, when the city is added.

use crate::alert::thresholds::classify_city;
use crate::logging::{self, Component};
use crate::model::{City, RainfallRecord, RecordError, UpdateRequest};

/// `rainfall / duration`, or 0 when duration is not positive.
pub fn derive_intensity(rainfall_mm: f64, duration_hours: f64) -> f64 {
    if duration_hours > 0.0 {
        rainfall_mm / duration_hours
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    record: RainfallRecord,
}

impl RecordDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a draft from an existing record, recomputing its intensity.
    pub fn from_record(record: RainfallRecord) -> Self {
        let mut draft = Self { record };
        draft.refresh_intensity();
        draft
    }

    pub fn record(&self) -> &RainfallRecord {
        &self.record
    }

    fn refresh_intensity(&mut self) {
        self.record.intensity = derive_intensity(self.record.rainfall, self.record.duration);
    }

    pub fn set_rainfall(&mut self, rainfall_mm: f64) {
        self.record.rainfall = rainfall_mm;
        self.refresh_intensity();
    }

    pub fn set_duration(&mut self, duration_hours: f64) {
        self.record.duration = duration_hours;
        self.refresh_intensity();
    }

    pub fn set_region(&mut self, region: &str) {
        self.record.region = region.to_string();
    }

    pub fn set_wind_speed(&mut self, kmh: f64) {
        self.record.wind_speed = kmh;
    }

    pub fn set_humidity(&mut self, percent: f64) {
        self.record.humidity = percent;
    }

    pub fn set_temperature(&mut self, celsius: f64) {
        self.record.temperature = celsius;
    }

    /// Adds a city, stamping its status from `rainfall_mm`.
    ///
    /// Requires a non-empty name, a finite rainfall of at least 0 and a
    /// population above 0.
    pub fn add_city(
        &mut self,
        name: &str,
        rainfall_mm: f64,
        population: u64,
    ) -> Result<&City, RecordError> {
        let name = name.trim();
        let reject = |reason: &str| {
            let err = RecordError::InvalidCity {
                name: name.to_string(),
                reason: reason.to_string(),
            };
            logging::warn(Component::Controller, None, &err.to_string());
            err
        };

        if name.is_empty() {
            return Err(reject("name is required"));
        }
        if !rainfall_mm.is_finite() || rainfall_mm < 0.0 {
            return Err(reject("rainfall must be a non-negative number"));
        }
        if population == 0 {
            return Err(reject("population must be greater than zero"));
        }

        let status = classify_city(rainfall_mm);
        logging::debug(
            Component::Controller,
            None,
            &format!("Added {} ({} mm) as {}", name, rainfall_mm, status),
        );
        self.record.cities.push(City {
            name: name.to_string(),
            rainfall: rainfall_mm,
            population,
            status,
        });
        Ok(&self.record.cities[self.record.cities.len() - 1])
    }

    pub fn remove_city(&mut self, index: usize) -> Result<City, RecordError> {
        let len = self.record.cities.len();
        if index >= len {
            return Err(RecordError::CityIndexOutOfRange { index, len });
        }
        Ok(self.record.cities.remove(index))
    }

    /// The `PUT /data/{id}` body for the current draft.
    pub fn update_request(&self) -> UpdateRequest {
        UpdateRequest {
            data: self.record.clone(),
        }
    }

    pub fn into_record(self) -> RainfallRecord {
        self.record
    }
}
