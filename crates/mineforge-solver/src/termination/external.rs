//! External termination via a shared AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mineforge_core::TerminationReason;

use super::Termination;
use crate::scope::EnumerationScope;

/// Terminates when an external flag is set.
///
/// # Example
///
/// ```
/// use std::sync::atomic::Ordering;
/// use mineforge_solver::termination::ExternalTermination;
///
/// let term = ExternalTermination::new();
/// let flag = term.flag();
///
/// // Later, from another thread:
/// flag.store(true, Ordering::SeqCst);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    /// Creates a termination with a fresh, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a termination that checks an existing flag.
    pub fn from_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Handle for requesting termination.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }

    /// Requests termination.
    pub fn terminate(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl Termination for ExternalTermination {
    fn check(&self, _scope: &EnumerationScope) -> Option<TerminationReason> {
        self.flag
            .load(Ordering::Relaxed)
            .then_some(TerminationReason::External)
    }
}
