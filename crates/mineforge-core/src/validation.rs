//! Input invariant checks.
//!
//! The enumerator relies on every number's spans being strictly ascending so
//! that a number's sum is fully decided when its last group is processed.
//! Malformed input is rejected here, before any branch is allocated.

use crate::domain::Group;
use crate::error::InputError;

/// Checks the group sequence against the declared count and every member
/// number against the span invariants.
///
/// # Errors
///
/// Returns the first violation found, scanning groups and members in order.
pub fn validate(groups: &[Group], n_groups: usize) -> Result<(), InputError> {
    if groups.len() != n_groups {
        return Err(InputError::GroupCountMismatch {
            declared: n_groups,
            actual: groups.len(),
        });
    }

    for (g, group) in groups.iter().enumerate() {
        for (member, nr) in group.members().iter().enumerate() {
            let spans = nr.spans();
            if spans.is_empty() {
                return Err(InputError::EmptySpans { group: g, member });
            }
            if let Some(position) = spans.windows(2).position(|w| w[0] >= w[1]) {
                return Err(InputError::SpansNotAscending {
                    group: g,
                    member,
                    position: position + 1,
                });
            }
            // Ascending, so the last span is the largest.
            let last = spans[spans.len() - 1];
            if last >= n_groups {
                return Err(InputError::SpanOutOfRange {
                    group: g,
                    member,
                    index: last,
                    n_groups,
                });
            }
            if !nr.spans_group(g) {
                return Err(InputError::OwnerMissing { group: g, member });
            }
            if let Some(&missing_from) = spans
                .iter()
                .find(|&&h| h != g && !groups[h].members().contains(nr))
            {
                return Err(InputError::MembershipMissing {
                    group: g,
                    member,
                    missing_from,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Number;

    fn pair(target: i64) -> Vec<Group> {
        let nr = Number::new(target, vec![0, 1]);
        vec![Group::new(1, vec![nr.clone()]), Group::new(1, vec![nr])]
    }

    #[test]
    fn test_valid_pair() {
        assert_eq!(validate(&pair(1), 2), Ok(()));
    }

    #[test]
    fn test_empty_problem() {
        assert_eq!(validate(&[], 0), Ok(()));
    }

    #[test]
    fn test_count_mismatch() {
        assert_eq!(
            validate(&pair(1), 3),
            Err(InputError::GroupCountMismatch {
                declared: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_descending_spans() {
        let nr = Number::new(1, vec![1, 0]);
        let groups = vec![Group::new(1, vec![nr.clone()]), Group::new(1, vec![nr])];
        assert_eq!(
            validate(&groups, 2),
            Err(InputError::SpansNotAscending {
                group: 0,
                member: 0,
                position: 1
            })
        );
    }

    #[test]
    fn test_duplicate_span_index() {
        let nr = Number::new(1, vec![0, 0]);
        let groups = vec![Group::new(1, vec![nr])];
        assert!(matches!(
            validate(&groups, 1),
            Err(InputError::SpansNotAscending { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        let nr = Number::new(1, vec![0, 5]);
        let groups = vec![Group::new(1, vec![nr]), Group::unconstrained(1)];
        assert_eq!(
            validate(&groups, 2),
            Err(InputError::SpanOutOfRange {
                group: 0,
                member: 0,
                index: 5,
                n_groups: 2
            })
        );
    }

    #[test]
    fn test_owner_missing() {
        let nr = Number::new(1, vec![1]);
        let groups = vec![Group::new(1, vec![nr.clone()]), Group::new(1, vec![nr])];
        assert_eq!(
            validate(&groups, 2),
            Err(InputError::OwnerMissing {
                group: 0,
                member: 0
            })
        );
    }

    #[test]
    fn test_membership_missing() {
        let nr = Number::new(1, vec![0, 1]);
        let groups = vec![Group::new(1, vec![nr]), Group::unconstrained(1)];
        assert_eq!(
            validate(&groups, 2),
            Err(InputError::MembershipMissing {
                group: 0,
                member: 0,
                missing_from: 1
            })
        );
    }

    #[test]
    fn test_empty_spans() {
        let groups = vec![Group::new(1, vec![Number::new(0, vec![])])];
        assert_eq!(
            validate(&groups, 1),
            Err(InputError::EmptySpans {
                group: 0,
                member: 0
            })
        );
    }
}
