//! Affected-city ordering and aggregates.

use crate::alert::assessment::ColorToken;
use crate::model::{City, CityStatus};

/// Display color for a city status.
pub fn status_color(status: CityStatus) -> ColorToken {
    match status {
        CityStatus::Safe => ColorToken::Chart2,
        CityStatus::Warning => ColorToken::Chart4,
        CityStatus::Danger => ColorToken::Chart3,
        CityStatus::Critical => ColorToken::Destructive,
    }
}

/// Single-glyph badge for a city status.
pub fn status_icon(status: CityStatus) -> &'static str {
    match status {
        CityStatus::Safe => "✓",
        CityStatus::Warning | CityStatus::Danger => "⚠",
        CityStatus::Critical => "✕",
    }
}

/// Sorts cities most severe first. Stable, so cities with the same status
/// keep the order in which they were added.
pub fn sort_by_severity(cities: &mut [City]) {
    cities.sort_by_key(|c| c.status.sort_rank());
}

/// Returns a severity-sorted copy, leaving the record untouched.
pub fn sorted_by_severity(cities: &[City]) -> Vec<City> {
    let mut sorted = cities.to_vec();
    sort_by_severity(&mut sorted);
    sorted
}

pub fn total_population(cities: &[City]) -> u64 {
    cities.iter().map(|c| c.population).sum()
}

pub fn count_with_status(cities: &[City], status: CityStatus) -> usize {
    cities.iter().filter(|c| c.status == status).count()
}

/// Cities at danger or critical status.
pub fn requiring_attention(cities: &[City]) -> usize {
    cities
        .iter()
        .filter(|c| c.status >= CityStatus::Danger)
        .count()
}

/// Aggregates shown on the affected-cities and statistics views.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySummary {
    pub monitored: usize,
    pub total_population: u64,
    pub critical: usize,
    pub danger: usize,
    pub warning: usize,
    pub safe: usize,
}

impl CitySummary {
    pub fn from_cities(cities: &[City]) -> Self {
        CitySummary {
            monitored: cities.len(),
            total_population: total_population(cities),
            critical: count_with_status(cities, CityStatus::Critical),
            danger: count_with_status(cities, CityStatus::Danger),
            warning: count_with_status(cities, CityStatus::Warning),
            safe: count_with_status(cities, CityStatus::Safe),
        }
    }

    pub fn requiring_attention(&self) -> usize {
        self.critical + self.danger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, population: u64, status: CityStatus) -> City {
        City {
            name: name.to_string(),
            rainfall: 0.0,
            population,
            status,
        }
    }

    #[test]
    fn test_sort_puts_critical_first() {
        let mut cities = vec![
            city("Ames", 1, CityStatus::Safe),
            city("Boone", 1, CityStatus::Critical),
            city("Clive", 1, CityStatus::Warning),
            city("Dexter", 1, CityStatus::Danger),
        ];
        sort_by_severity(&mut cities);
        let statuses: Vec<CityStatus> = cities.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                CityStatus::Critical,
                CityStatus::Danger,
                CityStatus::Warning,
                CityStatus::Safe
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_within_a_status() {
        let cities = vec![
            city("First", 1, CityStatus::Warning),
            city("Second", 1, CityStatus::Critical),
            city("Third", 1, CityStatus::Warning),
        ];
        let names: Vec<String> = sorted_by_severity(&cities).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Second", "First", "Third"]);
        assert_eq!(cities[0].name, "First", "sorted copy must not reorder the input");
    }

    #[test]
    fn test_summary_counts_and_population() {
        let cities = vec![
            city("A", 12_000, CityStatus::Critical),
            city("B", 3_500, CityStatus::Danger),
            city("C", 800, CityStatus::Danger),
            city("D", 45_000, CityStatus::Safe),
        ];
        let summary = CitySummary::from_cities(&cities);
        assert_eq!(summary.monitored, 4);
        assert_eq!(summary.total_population, 61_300);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.danger, 2);
        assert_eq!(summary.warning, 0);
        assert_eq!(summary.safe, 1);
        assert_eq!(summary.requiring_attention(), 3);
        assert_eq!(requiring_attention(&cities), 3);
    }

    #[test]
    fn test_empty_city_list() {
        let summary = CitySummary::from_cities(&[]);
        assert_eq!(summary.monitored, 0);
        assert_eq!(summary.total_population, 0);
        assert_eq!(summary.requiring_attention(), 0);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(status_icon(CityStatus::Safe), "✓");
        assert_eq!(status_icon(CityStatus::Danger), "⚠");
        assert_eq!(status_icon(CityStatus::Critical), "✕");
        assert_eq!(status_color(CityStatus::Warning).token(), "chart-4");
        assert_eq!(status_color(CityStatus::Critical).token(), "destructive");
    }
}
