//! Per-run enumeration state read by termination guards.

use std::time::{Duration, Instant};

use crate::stats::EnumerationStats;

/// Tracks progress of a single enumeration call.
///
/// Island enumeration shares one scope across islands, so guards see the
/// totals for the whole call.
#[derive(Debug)]
pub struct EnumerationScope {
    start: Instant,
    layer: usize,
    stats: EnumerationStats,
}

impl EnumerationScope {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            layer: 0,
            stats: EnumerationStats::default(),
        }
    }

    /// Time since the scope was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The group currently being processed.
    pub fn current_layer(&self) -> usize {
        self.layer
    }

    pub fn branches_created(&self) -> u64 {
        self.stats.branches_created
    }

    pub fn stats(&self) -> &EnumerationStats {
        &self.stats
    }

    pub(crate) fn begin_layer(&mut self, layer: usize) {
        self.layer = layer;
    }

    pub(crate) fn record_created(&mut self, count: u64) {
        self.stats.record_created(count);
    }

    pub(crate) fn finish_layer(&mut self, pruned: usize, width: usize) {
        self.stats.record_layer(pruned, width);
    }

    pub(crate) fn record_island(&mut self) {
        self.stats.islands += 1;
    }

    /// Stamps the elapsed time and returns the final statistics.
    pub fn into_stats(mut self) -> EnumerationStats {
        self.stats.elapsed = self.start.elapsed();
        self.stats
    }
}

impl Default for EnumerationScope {
    fn default() -> Self {
        Self::new()
    }
}
