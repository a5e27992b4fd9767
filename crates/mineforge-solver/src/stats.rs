//! Enumeration statistics.

use std::time::Duration;

/// Counters describing one enumeration run.
///
/// # Example
///
/// ```
/// use mineforge_solver::stats::EnumerationStats;
///
/// let mut stats = EnumerationStats::default();
/// stats.record_created(3);
/// stats.record_layer(1, 2);
///
/// assert_eq!(stats.branches_created, 3);
/// assert_eq!(stats.branches_pruned, 1);
/// assert_eq!(stats.peak_frontier, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Layers (groups) processed.
    pub layers: usize,
    /// Branches ever created, including each root.
    pub branches_created: u64,
    /// Branches discarded on contradiction.
    pub branches_pruned: u64,
    /// Widest frontier seen after any layer.
    pub peak_frontier: usize,
    /// Independent islands enumerated (1 when not split).
    pub islands: usize,
    /// Wall time spent.
    pub elapsed: Duration,
}

impl EnumerationStats {
    /// Records newly created branches.
    pub fn record_created(&mut self, count: u64) {
        self.branches_created = self.branches_created.saturating_add(count);
    }

    /// Records a finished layer.
    pub fn record_layer(&mut self, pruned: usize, width: usize) {
        self.layers += 1;
        self.branches_pruned = self.branches_pruned.saturating_add(pruned as u64);
        self.peak_frontier = self.peak_frontier.max(width);
    }

    /// Returns the branch creation rate.
    pub fn branches_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.branches_created as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_tracks_maximum() {
        let mut stats = EnumerationStats::default();
        stats.record_layer(0, 4);
        stats.record_layer(3, 1);
        assert_eq!(stats.layers, 2);
        assert_eq!(stats.peak_frontier, 4);
        assert_eq!(stats.branches_pruned, 3);
    }

    #[test]
    fn test_rate_without_elapsed() {
        let mut stats = EnumerationStats::default();
        stats.record_created(10);
        assert_eq!(stats.branches_per_second(), 0.0);

        stats.elapsed = Duration::from_secs(2);
        assert!((stats.branches_per_second() - 5.0).abs() < f64::EPSILON);
    }
}
