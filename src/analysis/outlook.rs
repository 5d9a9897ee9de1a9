//! Narrative outlook for the statistics view.
//!
//! These sentences use strict `>` comparisons at 2.5 and 10 mm/hr, so an
//! intensity of exactly 10 reads as "moderate" here while the hazard
//! classifier already calls it high.

use crate::analysis::cities::requiring_attention;
use crate::model::RainfallRecord;

pub fn trend_summary(intensity_mm_hr: f64) -> &'static str {
    if intensity_mm_hr > 10.0 {
        "Heavy rainfall detected. Expect continued high intensity for the next few hours."
    } else if intensity_mm_hr > 2.5 {
        "Moderate rainfall ongoing. Monitor conditions closely for any changes."
    } else {
        "Light rainfall conditions. Situation is stable with low risk."
    }
}

pub fn duration_summary(duration_hours: f64) -> String {
    if duration_hours > 6.0 {
        format!(
            "Prolonged rainfall event ({} hours). Soil saturation levels are high, increasing flood risk.",
            duration_hours
        )
    } else if duration_hours > 3.0 {
        format!(
            "Moderate duration rainfall ({} hours). Continue monitoring drainage systems.",
            duration_hours
        )
    } else {
        format!(
            "Short duration event ({} hours). Risk levels remain manageable.",
            duration_hours
        )
    }
}

pub fn regional_summary(record: &RainfallRecord) -> String {
    let region = if record.region.trim().is_empty() {
        "N/A"
    } else {
        record.region.as_str()
    };
    let mut summary = format!(
        "Region: {}. {} cities are currently being monitored.",
        region,
        record.cities.len()
    );

    let attention = requiring_attention(&record.cities);
    if attention > 0 {
        summary.push_str(&format!(" {} cities require immediate attention.", attention));
    }
    summary
}

/// All three outlook sentences for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Outlook {
    pub trend: &'static str,
    pub duration: String,
    pub regional: String,
}

impl Outlook {
    pub fn for_record(record: &RainfallRecord) -> Self {
        Outlook {
            trend: trend_summary(record.intensity),
            duration: duration_summary(record.duration),
            regional: regional_summary(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{City, CityStatus};

    #[test]
    fn test_trend_uses_strict_boundaries() {
        assert!(trend_summary(10.0).starts_with("Moderate"));
        assert!(trend_summary(10.1).starts_with("Heavy"));
        assert!(trend_summary(2.5).starts_with("Light"));
        assert!(trend_summary(2.6).starts_with("Moderate"));
    }

    #[test]
    fn test_duration_formats_hours() {
        assert_eq!(
            duration_summary(8.0),
            "Prolonged rainfall event (8 hours). Soil saturation levels are high, increasing flood risk."
        );
        assert_eq!(
            duration_summary(4.5),
            "Moderate duration rainfall (4.5 hours). Continue monitoring drainage systems."
        );
        assert!(duration_summary(3.0).starts_with("Short duration event (3 hours)"));
    }

    #[test]
    fn test_regional_summary_without_region_or_risk() {
        let record = RainfallRecord::default();
        assert_eq!(
            regional_summary(&record),
            "Region: N/A. 0 cities are currently being monitored."
        );
    }

    #[test]
    fn test_regional_summary_counts_cities_needing_attention() {
        let city = |status| City {
            name: "X".to_string(),
            rainfall: 0.0,
            population: 1,
            status,
        };
        let record = RainfallRecord {
            region: "Central Valley".to_string(),
            cities: vec![
                city(CityStatus::Critical),
                city(CityStatus::Warning),
                city(CityStatus::Danger),
            ],
            ..Default::default()
        };
        assert_eq!(
            regional_summary(&record),
            "Region: Central Valley. 3 cities are currently being monitored. \
             2 cities require immediate attention."
        );
    }
}
