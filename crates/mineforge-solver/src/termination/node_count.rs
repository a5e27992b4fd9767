//! Branch count termination.

use mineforge_core::TerminationReason;

use super::Termination;
use crate::scope::EnumerationScope;

/// Terminates once more branches were created than the limit.
///
/// # Example
///
/// ```
/// use mineforge_solver::termination::NodeCountTermination;
///
/// // Allow at most one million branches
/// let term = NodeCountTermination::new(1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn check(&self, scope: &EnumerationScope) -> Option<TerminationReason> {
        (scope.branches_created() > self.limit)
            .then_some(TerminationReason::NodeLimit { limit: self.limit })
    }
}
