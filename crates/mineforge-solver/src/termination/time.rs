//! Time-based termination.

use std::time::Duration;

use mineforge_core::TerminationReason;

use super::Termination;
use crate::scope::EnumerationScope;

/// Terminates after a time limit.
///
/// The deadline is only observed between layers; a layer whose bounding
/// outlasts the limit still completes before the run aborts.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use mineforge_solver::termination::TimeTermination;
///
/// // Terminate after 30 seconds
/// let term = TimeTermination::new(Duration::from_secs(30));
///
/// // Or use convenience constructors
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl Termination for TimeTermination {
    fn check(&self, scope: &EnumerationScope) -> Option<TerminationReason> {
        (scope.elapsed() >= self.limit).then_some(TerminationReason::TimeLimit { limit: self.limit })
    }
}
