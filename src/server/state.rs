//! Application state shared by request handlers

use std::sync::Arc;
use std::time::Instant;

use crate::render::Theme;
use crate::sample::SampleAggregator;

/// Read-only state shared by all page loads
pub struct AppState {
    pub aggregator: Arc<SampleAggregator>,
    /// Theme used when the page query does not pick one
    pub default_theme: Theme,
    start_time: Instant,
}

impl AppState {
    pub fn new(aggregator: Arc<SampleAggregator>, default_theme: Theme) -> Self {
        Self {
            aggregator,
            default_theme,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
