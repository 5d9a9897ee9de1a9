/// Viewer-side poll handling.
///
/// Each viewer fetches the shared record on an interval and derives its
/// facet. `ViewerState` holds what survives between polls (statistics and
/// chart history); `Snapshot` is what a single poll yields. Fetching itself
/// is left to the caller.

use chrono::{DateTime, Utc};

use crate::alert::assessment::{assess, HazardAssessment};
use crate::alert::scale::{risk_percentage, scale_with_current, ScaleBand};
use crate::alert::staleness::is_stale_at;
use crate::analysis::cities::{sorted_by_severity, CitySummary};
use crate::analysis::history::{ChartHistory, ChartSample};
use crate::analysis::outlook::Outlook;
use crate::analysis::statistics::RainfallStatistics;
use crate::config::DashboardConfig;
use crate::ingest::normalize::parse_envelope;
use crate::logging::{self, Component};
use crate::model::{City, HazardLevel, RecordEnvelope, RecordError};

/// Every facet derived from one polled record.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub envelope: RecordEnvelope,
    pub assessment: &'static HazardAssessment,
    pub scale: Vec<(&'static ScaleBand, bool)>,
    pub risk_percentage: f64,
    pub cities: Vec<City>,
    pub city_summary: CitySummary,
    pub outlook: Outlook,
    pub stale: bool,
}

impl Snapshot {
    pub fn level(&self) -> HazardLevel {
        self.assessment.level
    }
}

/// Derives all facets of a record as of `now`.
pub fn snapshot_at(envelope: RecordEnvelope, stale_after_secs: u64, now: DateTime<Utc>) -> Snapshot {
    let record = &envelope.data;
    // An unreadable timestamp counts as stale.
    let stale = is_stale_at(&envelope, stale_after_secs, now).unwrap_or(true);

    Snapshot {
        assessment: assess(record.intensity, record.rainfall),
        scale: scale_with_current(record.intensity),
        risk_percentage: risk_percentage(record.intensity),
        cities: sorted_by_severity(&record.cities),
        city_summary: CitySummary::from_cities(&record.cities),
        outlook: Outlook::for_record(record),
        stale,
        envelope,
    }
}

pub struct ViewerState {
    stale_after_secs: u64,
    statistics: RainfallStatistics,
    history: ChartHistory,
    last: Option<Snapshot>,
}

impl ViewerState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            stale_after_secs: config.stale_after_secs(),
            statistics: RainfallStatistics::new(),
            history: ChartHistory::new(config.history_length),
            last: None,
        }
    }

    /// Folds one polled envelope into the state and returns its snapshot.
    pub fn observe_at(&mut self, envelope: RecordEnvelope, now: DateTime<Utc>) -> &Snapshot {
        let record = &envelope.data;
        self.statistics.record(record.rainfall);
        self.history.push(ChartSample {
            time: envelope.last_update().unwrap_or(now),
            rainfall: record.rainfall,
            intensity: record.intensity,
        });

        let snapshot = snapshot_at(envelope, self.stale_after_secs, now);
        if self.last.as_ref().map(Snapshot::level) != Some(snapshot.level()) {
            logging::info(
                Component::Viewer,
                Some(snapshot.envelope.id.as_str()),
                &format!("Hazard level now {}", snapshot.level()),
            );
        }
        self.last.insert(snapshot)
    }

    /// Parses a raw poll body and observes it.
    ///
    /// On error the previous snapshot is kept and the failure is logged.
    pub fn observe_body_at(&mut self, body: &str, now: DateTime<Utc>) -> Result<&Snapshot, RecordError> {
        match parse_envelope(body) {
            Ok(envelope) => Ok(self.observe_at(envelope, now)),
            Err(e) => {
                let id = self
                    .last
                    .as_ref()
                    .map(|s| s.envelope.id.clone())
                    .unwrap_or_default();
                logging::log_record_failure(&id, "poll", &e);
                Err(e)
            }
        }
    }

    pub fn statistics(&self) -> &RainfallStatistics {
        &self.statistics
    }

    pub fn history(&self) -> &ChartHistory {
        &self.history
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }
}
