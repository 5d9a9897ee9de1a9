//! Bounded sample history behind the rainfall and intensity charts.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSample {
    pub time: DateTime<Utc>,
    pub rainfall: f64,
    pub intensity: f64,
}

/// Keeps the most recent `capacity` samples, dropping the oldest first.
#[derive(Debug, Clone)]
pub struct ChartHistory {
    capacity: usize,
    samples: VecDeque<ChartSample>,
}

impl ChartHistory {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: ChartSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &ChartSample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&ChartSample> {
        self.samples.back()
    }

    /// Highest intensity currently in the window.
    pub fn peak_intensity(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.intensity)
            .fold(None, |peak, i| Some(peak.map_or(i, |p: f64| p.max(i))))
    }
}

impl Default for ChartHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample(minute: i64, intensity: f64) -> ChartSample {
        ChartSample {
            time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minute),
            rainfall: intensity * 2.0,
            intensity,
        }
    }

    #[test]
    fn test_history_drops_oldest_when_full() {
        let mut history = ChartHistory::new(3);
        for minute in 0..5 {
            history.push(sample(minute, minute as f64));
        }
        assert_eq!(history.len(), 3);
        let intensities: Vec<f64> = history.samples().map(|s| s.intensity).collect();
        assert_eq!(intensities, vec![2.0, 3.0, 4.0]);
        assert_eq!(history.latest().unwrap().intensity, 4.0);
    }

    #[test]
    fn test_default_capacity_is_twenty() {
        let mut history = ChartHistory::default();
        for minute in 0..30 {
            history.push(sample(minute, 1.0));
        }
        assert_eq!(history.capacity(), 20);
        assert_eq!(history.len(), 20);
    }

    #[test]
    fn test_zero_capacity_still_holds_latest() {
        let mut history = ChartHistory::new(0);
        history.push(sample(0, 1.0));
        history.push(sample(1, 2.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().intensity, 2.0);
    }

    #[test]
    fn test_peak_intensity() {
        let mut history = ChartHistory::new(5);
        assert!(history.peak_intensity().is_none());
        history.push(sample(0, 3.0));
        history.push(sample(1, 11.0));
        history.push(sample(2, 6.0));
        assert_eq!(history.peak_intensity(), Some(11.0));
    }
}
