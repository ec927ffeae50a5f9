//! Dashboard metrics controller
//!
//! Same fetch discipline as the list controller, for a single aggregate
//! record instead of a page.

use async_trait::async_trait;
use galleria_api::DashboardMetrics;
use galleria_client::{AdminApi, Result};
use tracing::{debug, warn};

use crate::status::RequestStatus;

/// Source of dashboard metrics. Implemented by [`AdminApi`] and by scripted
/// fakes in tests.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn metrics(&self) -> Result<DashboardMetrics>;
}

#[async_trait]
impl MetricsSource for AdminApi {
    async fn metrics(&self) -> Result<DashboardMetrics> {
        self.dashboard_metrics().await
    }
}

/// State behind the dashboard screen.
pub struct DashboardController {
    source: Box<dyn MetricsSource>,
    metrics: Option<DashboardMetrics>,
    status: RequestStatus,
    seq: u64,
}

impl DashboardController {
    pub fn new(source: impl MetricsSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            metrics: None,
            status: RequestStatus::Idle,
            seq: 0,
        }
    }

    pub fn metrics(&self) -> Option<&DashboardMetrics> {
        self.metrics.as_ref()
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// Issue a refresh; the returned sequence number pairs with
    /// [`apply`](Self::apply).
    pub fn begin_refresh(&mut self) -> u64 {
        self.seq += 1;
        self.status = RequestStatus::Loading;
        debug!(seq = self.seq, "metrics refresh issued");
        self.seq
    }

    /// Apply a refresh outcome; stale outcomes are discarded.
    pub fn apply(&mut self, seq: u64, outcome: Result<DashboardMetrics>) -> bool {
        if seq != self.seq {
            debug!(seq, latest = self.seq, "stale metrics discarded");
            return false;
        }
        match outcome {
            Ok(metrics) => {
                self.metrics = Some(metrics);
                self.status = RequestStatus::Success;
            }
            Err(err) => {
                warn!(error = %err, "metrics refresh failed");
                self.status = RequestStatus::Error(err.to_string());
            }
        }
        true
    }

    /// Refresh and apply in one step.
    pub async fn refresh(&mut self) {
        let seq = self.begin_refresh();
        let outcome = self.source.metrics().await;
        self.apply(seq, outcome);
    }
}
