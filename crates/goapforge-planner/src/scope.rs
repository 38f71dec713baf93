//! Search-level scope.

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::statistics::SearchStatistics;

/// Progress of one search: timing, iteration count and counters.
#[derive(Debug, Clone)]
pub struct SearchScope {
    plan_id: Uuid,
    start_time: Option<Instant>,
    iteration: u64,
    statistics: SearchStatistics,
}

impl SearchScope {
    pub fn new(plan_id: Uuid) -> Self {
        Self {
            plan_id,
            start_time: None,
            iteration: 0,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn start_search(&mut self) {
        self.start_time = Some(Instant::now());
        self.iteration = 0;
        self.statistics = SearchStatistics::default();
    }

    pub fn plan_id(&self) -> Uuid {
        self.plan_id
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn increment_iteration(&mut self) {
        self.iteration += 1;
        self.statistics.iterations = self.iteration;
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.statistics
    }

    /// Final counters with the elapsed time filled in.
    pub fn finish(&self) -> SearchStatistics {
        let elapsed = self.elapsed().unwrap_or_default();
        SearchStatistics {
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            ..self.statistics.clone()
        }
    }
}
