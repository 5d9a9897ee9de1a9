//! Running rainfall statistics accumulated across viewer polls.

use crate::logging::{self, Component};

/// Summary of every valid rainfall value seen so far.
///
/// `maximum` starts at 0 so an all-zero session reads 0 rather than
/// undefined; `minimum` stays `None` until the first reading arrives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RainfallStatistics {
    pub average: f64,
    pub maximum: f64,
    pub minimum: Option<f64>,
    pub total_readings: u64,
}

impl RainfallStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one reading into the statistics.
    ///
    /// Returns `false` and leaves the statistics unchanged if `rainfall_mm`
    /// is not finite.
    pub fn record(&mut self, rainfall_mm: f64) -> bool {
        if !rainfall_mm.is_finite() {
            logging::warn(
                Component::Viewer,
                None,
                &format!("Ignoring invalid rainfall value: {}", rainfall_mm),
            );
            return false;
        }

        let count = self.total_readings + 1;
        self.average = (self.average * self.total_readings as f64 + rainfall_mm) / count as f64;
        self.maximum = self.maximum.max(rainfall_mm);
        self.minimum = Some(self.minimum.map_or(rainfall_mm, |m| m.min(rainfall_mm)));
        self.total_readings = count;
        true
    }
}
