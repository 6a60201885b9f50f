use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

/// Request counters, shared by every handler through `AppState`.
#[derive(Clone, Default)]
pub struct Metrics {
    /// Problems that received a non-null `my_status`
    pub problems_annotated: Arc<AtomicU64>,
    pub recommendations_served: Arc<AtomicU64>,
    /// Recommendations whose weak field had nothing left to solve
    pub empty_recommendations: Arc<AtomicU64>,
    pub profile_not_found: Arc<AtomicU64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub problems_annotated: u64,
    pub recommendations_served: u64,
    pub empty_recommendations: u64,
    pub profile_not_found: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_annotated(&self, count: usize) {
        self.problems_annotated.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_recommendation(&self, sampled: usize) {
        self.recommendations_served.fetch_add(1, Ordering::Relaxed);
        if sampled == 0 {
            self.empty_recommendations.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_profile_not_found(&self) {
        self.profile_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            problems_annotated: self.problems_annotated.load(Ordering::Relaxed),
            recommendations_served: self.recommendations_served.load(Ordering::Relaxed),
            empty_recommendations: self.empty_recommendations.load(Ordering::Relaxed),
            profile_not_found: self.profile_not_found.load(Ordering::Relaxed),
        }
    }
}
