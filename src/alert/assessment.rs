//! Hazard assessment lookup.
//!
//! Maps a rainfall reading to the full alert bundle shown on the warning and
//! hazard-scale views: level, color, description and the ordered list of
//! recommended actions. The bundles are fixed; only the level is computed.

use crate::alert::thresholds::classify_hazard;
use crate::model::HazardLevel;

/// Opaque display color, resolved to a CSS custom property by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Green.
    Chart2,
    /// Orange.
    Chart3,
    /// Yellow.
    Chart4,
    /// Red.
    Destructive,
}

impl ColorToken {
    pub fn token(&self) -> &'static str {
        match self {
            ColorToken::Chart2 => "chart-2",
            ColorToken::Chart3 => "chart-3",
            ColorToken::Chart4 => "chart-4",
            ColorToken::Destructive => "destructive",
        }
    }

    /// The token as a CSS color expression, e.g. `hsl(var(--chart-2))`.
    pub fn css(&self) -> String {
        format!("hsl(var(--{}))", self.token())
    }
}

/// Everything the alert views display for one hazard level.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardAssessment {
    pub level: HazardLevel,
    pub color: ColorToken,
    pub description: &'static str,
    /// Rendered as a numbered list; order is significant.
    pub recommendations: &'static [&'static str],
}

/// One entry per hazard level, lowest first.
pub static ASSESSMENT_TABLE: [HazardAssessment; 4] = [
    HazardAssessment {
        level: HazardLevel::Low,
        color: ColorToken::Chart2,
        description: "Light rainfall - Normal conditions",
        recommendations: &[
            "No immediate action required",
            "Continue normal operations",
            "Monitor weather updates",
        ],
    },
    HazardAssessment {
        level: HazardLevel::Medium,
        color: ColorToken::Chart4,
        description: "Moderate rainfall - Stay alert",
        recommendations: &[
            "Monitor drainage systems",
            "Prepare emergency equipment",
            "Stay informed of weather updates",
            "Avoid low-lying areas if possible",
        ],
    },
    HazardAssessment {
        level: HazardLevel::High,
        color: ColorToken::Chart3,
        description: "Heavy rainfall - Take precautions",
        recommendations: &[
            "Activate emergency response teams",
            "Evacuate low-lying areas",
            "Close flood-prone roads",
            "Prepare shelters and supplies",
            "Issue public warnings",
        ],
    },
    HazardAssessment {
        level: HazardLevel::Critical,
        color: ColorToken::Destructive,
        description: "Extreme rainfall - Emergency situation",
        recommendations: &[
            "IMMEDIATE EVACUATION of danger zones",
            "Deploy all emergency services",
            "Close all affected roads and bridges",
            "Open emergency shelters",
            "Issue emergency broadcast alerts",
            "Coordinate with disaster management",
        ],
    },
];

/// Returns the fixed assessment row for a level.
pub fn assessment_for(level: HazardLevel) -> &'static HazardAssessment {
    match level {
        HazardLevel::Low => &ASSESSMENT_TABLE[0],
        HazardLevel::Medium => &ASSESSMENT_TABLE[1],
        HazardLevel::High => &ASSESSMENT_TABLE[2],
        HazardLevel::Critical => &ASSESSMENT_TABLE[3],
    }
}

/// Assesses a reading by its intensity.
///
/// `_rainfall_total_mm` is accepted so callers can pass the full reading,
/// but it does not affect the selected level or the returned row.
pub fn assess(intensity_mm_hr: f64, _rainfall_total_mm: f64) -> &'static HazardAssessment {
    assessment_for(classify_hazard(intensity_mm_hr))
}
