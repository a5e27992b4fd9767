//! Termination guards for enumeration.
//!
//! Enumeration is exhaustive and its branching factor is unbounded, so
//! callers can cap it by branch count, wall time or an external flag. A
//! triggered guard aborts the call; no partial result is returned.

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::Debug;

use mineforge_core::TerminationReason;

use crate::scope::EnumerationScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop enumerating.
///
/// Guards are checked once per layer, after every live branch has been
/// bounded and before the frontier grows. A single wide layer is never
/// interrupted, so a guard can fire later than its limit.
pub trait Termination: Send + Sync + Debug {
    /// Returns the reason to stop, or `None` to keep going.
    fn check(&self, scope: &EnumerationScope) -> Option<TerminationReason>;

    /// Returns true if enumeration should terminate.
    fn is_terminated(&self, scope: &EnumerationScope) -> bool {
        self.check(scope).is_some()
    }
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn check(&self, _scope: &EnumerationScope) -> Option<TerminationReason> {
        None
    }
}

// An unset optional guard never fires.
impl<T: Termination> Termination for Option<T> {
    fn check(&self, scope: &EnumerationScope) -> Option<TerminationReason> {
        self.as_ref().and_then(|t| t.check(scope))
    }
}

impl<T: Termination + ?Sized> Termination for &T {
    fn check(&self, scope: &EnumerationScope) -> Option<TerminationReason> {
        (**self).check(scope)
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn check(&self, scope: &EnumerationScope) -> Option<TerminationReason> {
        (**self).check(scope)
    }
}

#[cfg(test)]
mod tests;
