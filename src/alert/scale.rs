//! Hazard scale reference and flood-risk gauge.

use crate::alert::assessment::ColorToken;
use crate::alert::thresholds::{classify_hazard, HAZARD_CRITICAL_MM_HR};
use crate::model::HazardLevel;

/// One row of the hazard scale reference card.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBand {
    pub level: HazardLevel,
    pub label: &'static str,
    pub range: &'static str,
    pub description: &'static str,
    pub color: ColorToken,
}

pub static HAZARD_SCALE: [ScaleBand; 4] = [
    ScaleBand {
        level: HazardLevel::Low,
        label: "Low",
        range: "< 2.5 mm/hr",
        description: "Light rainfall",
        color: ColorToken::Chart2,
    },
    ScaleBand {
        level: HazardLevel::Medium,
        label: "Medium",
        range: "2.5-10 mm/hr",
        description: "Moderate rainfall",
        color: ColorToken::Chart4,
    },
    ScaleBand {
        level: HazardLevel::High,
        label: "High",
        range: "10-50 mm/hr",
        description: "Heavy rainfall",
        color: ColorToken::Chart3,
    },
    ScaleBand {
        level: HazardLevel::Critical,
        label: "Critical",
        range: "> 50 mm/hr",
        description: "Extreme rainfall",
        color: ColorToken::Destructive,
    },
];

/// Pairs each scale band with whether it is the band for `intensity_mm_hr`.
/// Exactly one band is marked current.
pub fn scale_with_current(intensity_mm_hr: f64) -> Vec<(&'static ScaleBand, bool)> {
    let current = classify_hazard(intensity_mm_hr);
    HAZARD_SCALE
        .iter()
        .map(|band| (band, band.level == current))
        .collect()
}

/// Flood risk as a percentage of the critical intensity, clamped to 0..=100.
pub fn risk_percentage(intensity_mm_hr: f64) -> f64 {
    if !intensity_mm_hr.is_finite() {
        return 0.0;
    }
    (intensity_mm_hr / HAZARD_CRITICAL_MM_HR * 100.0).clamp(0.0, 100.0)
}
