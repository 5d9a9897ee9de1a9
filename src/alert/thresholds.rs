//! Rainfall threshold classification.
//!
//! Two independent scales live here: the region-wide hazard level driven by
//! intensity (mm/hr), and the per-city status driven by accumulated rainfall
//! (mm). Both evaluate inclusive lower bounds from the most severe band down.
//!
//! Non-finite input (NaN, ±infinity) classifies as the lowest band on either
//! scale. Negative values fall below every bound and land there as well.

use crate::model::{CityStatus, HazardLevel};

// ---------------------------------------------------------------------------
// Hazard level thresholds (mm/hr)
// ---------------------------------------------------------------------------

pub const HAZARD_MEDIUM_MM_HR: f64 = 2.5;
pub const HAZARD_HIGH_MM_HR: f64 = 10.0;
pub const HAZARD_CRITICAL_MM_HR: f64 = 50.0;

// ---------------------------------------------------------------------------
// City status thresholds (mm)
// ---------------------------------------------------------------------------

pub const CITY_WARNING_MM: f64 = 25.0;
pub const CITY_DANGER_MM: f64 = 50.0;
pub const CITY_CRITICAL_MM: f64 = 100.0;

/// Classifies rainfall intensity into a hazard level.
pub fn classify_hazard(intensity_mm_hr: f64) -> HazardLevel {
    if !intensity_mm_hr.is_finite() {
        return HazardLevel::Low;
    }

    if intensity_mm_hr >= HAZARD_CRITICAL_MM_HR {
        HazardLevel::Critical
    } else if intensity_mm_hr >= HAZARD_HIGH_MM_HR {
        HazardLevel::High
    } else if intensity_mm_hr >= HAZARD_MEDIUM_MM_HR {
        HazardLevel::Medium
    } else {
        HazardLevel::Low
    }
}

/// Classifies a city's accumulated rainfall into a status.
///
/// Called once when a city is added to the record; the result is stored on
/// the city rather than recomputed on read.
pub fn classify_city(rainfall_mm: f64) -> CityStatus {
    if !rainfall_mm.is_finite() {
        return CityStatus::Safe;
    }

    if rainfall_mm >= CITY_CRITICAL_MM {
        CityStatus::Critical
    } else if rainfall_mm >= CITY_DANGER_MM {
        CityStatus::Danger
    } else if rainfall_mm >= CITY_WARNING_MM {
        CityStatus::Warning
    } else {
        CityStatus::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Hazard boundaries --------------------------------------------------

    #[test]
    fn test_hazard_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(classify_hazard(2.5), HazardLevel::Medium);
        assert_eq!(classify_hazard(2.4999), HazardLevel::Low);
        assert_eq!(classify_hazard(10.0), HazardLevel::High);
        assert_eq!(classify_hazard(9.9999), HazardLevel::Medium);
        assert_eq!(classify_hazard(50.0), HazardLevel::Critical);
        assert_eq!(classify_hazard(49.9999), HazardLevel::High);
    }

    #[test]
    fn test_zero_and_extreme_intensity() {
        assert_eq!(classify_hazard(0.0), HazardLevel::Low);
        assert_eq!(classify_hazard(1_000.0), HazardLevel::Critical);
    }

    #[test]
    fn test_hazard_is_monotonic_over_a_sweep() {
        let mut previous = classify_hazard(-5.0);
        let mut i = -5.0;
        while i <= 120.0 {
            let current = classify_hazard(i);
            assert!(
                current >= previous,
                "classification dropped from {:?} to {:?} at {} mm/hr",
                previous,
                current,
                i
            );
            previous = current;
            i += 0.25;
        }
    }

    // --- Malformed input ----------------------------------------------------

    #[test]
    fn test_non_finite_intensity_is_low() {
        assert_eq!(classify_hazard(f64::NAN), HazardLevel::Low);
        assert_eq!(classify_hazard(f64::INFINITY), HazardLevel::Low);
        assert_eq!(classify_hazard(f64::NEG_INFINITY), HazardLevel::Low);
    }

    #[test]
    fn test_negative_values_are_lowest_severity() {
        assert_eq!(classify_hazard(-3.0), HazardLevel::Low);
        assert_eq!(classify_city(-40.0), CityStatus::Safe);
    }

    // --- City boundaries ----------------------------------------------------

    #[test]
    fn test_city_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(classify_city(0.0), CityStatus::Safe);
        assert_eq!(classify_city(24.9999), CityStatus::Safe);
        assert_eq!(classify_city(25.0), CityStatus::Warning);
        assert_eq!(classify_city(50.0), CityStatus::Danger);
        assert_eq!(classify_city(99.9), CityStatus::Danger);
        assert_eq!(classify_city(100.0), CityStatus::Critical);
    }

    #[test]
    fn test_city_scale_is_independent_of_hazard_scale() {
        // 30 mm/hr is a high hazard, but 30 mm on a city is only a warning.
        assert_eq!(classify_hazard(30.0), HazardLevel::High);
        assert_eq!(classify_city(30.0), CityStatus::Warning);
    }

    #[test]
    fn test_non_finite_city_rainfall_is_safe() {
        assert_eq!(classify_city(f64::NAN), CityStatus::Safe);
        assert_eq!(classify_city(f64::INFINITY), CityStatus::Safe);
    }

    #[test]
    fn test_repeated_calls_return_same_result() {
        for _ in 0..3 {
            assert_eq!(classify_hazard(12.0), HazardLevel::High);
            assert_eq!(classify_city(60.0), CityStatus::Danger);
        }
    }
}
