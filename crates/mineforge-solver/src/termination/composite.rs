//! Composite termination (OR).
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use mineforge_core::TerminationReason;

use super::Termination;
use crate::scope::EnumerationScope;

/// Combines multiple terminations with OR logic.
///
/// Wraps a tuple of terminations and reports the first one that fires.
///
/// # Examples
///
/// ```
/// use mineforge_solver::termination::{NodeCountTermination, OrTermination, TimeTermination};
///
/// // Terminate after 30 seconds OR one million branches
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(1_000_000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn check(&self, scope: &EnumerationScope) -> Option<TerminationReason> {
                None$(.or_else(|| (self.0).$idx.check(scope)))+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
