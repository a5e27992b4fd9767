//! Tests for termination guards.

use std::time::Duration;

use super::*;

#[test]
fn test_no_termination() {
    let mut scope = EnumerationScope::new();
    scope.record_created(u64::MAX);
    assert!(!NoTermination.is_terminated(&scope));
}

#[test]
fn test_node_count_termination() {
    let mut scope = EnumerationScope::new();
    let term = NodeCountTermination::new(3);

    scope.record_created(1);
    assert!(!term.is_terminated(&scope));
    scope.record_created(2);
    assert!(!term.is_terminated(&scope));
    scope.record_created(1);
    assert_eq!(
        term.check(&scope),
        Some(TerminationReason::NodeLimit { limit: 3 })
    );
}

#[test]
fn test_time_termination_zero_fires() {
    let scope = EnumerationScope::new();
    let term = TimeTermination::new(Duration::ZERO);
    assert_eq!(
        term.check(&scope),
        Some(TerminationReason::TimeLimit {
            limit: Duration::ZERO
        })
    );
}

#[test]
fn test_time_termination_not_reached() {
    let scope = EnumerationScope::new();
    assert!(!TimeTermination::seconds(3600).is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let scope = EnumerationScope::new();
    let term = ExternalTermination::new();
    assert!(!term.is_terminated(&scope));

    term.terminate();
    assert_eq!(term.check(&scope), Some(TerminationReason::External));
}

#[test]
fn test_external_termination_shared_flag() {
    use std::sync::atomic::Ordering;

    let scope = EnumerationScope::new();
    let term = ExternalTermination::new();
    let clone = term.clone();
    term.flag().store(true, Ordering::SeqCst);
    assert!(clone.is_terminated(&scope));
}

#[test]
fn test_option_termination() {
    let mut scope = EnumerationScope::new();
    scope.record_created(10);

    let unset: Option<NodeCountTermination> = None;
    assert!(!unset.is_terminated(&scope));
    assert!(Some(NodeCountTermination::new(5)).is_terminated(&scope));
}

#[test]
fn test_or_termination_reports_first() {
    let mut scope = EnumerationScope::new();
    scope.record_created(10);

    let term = OrTermination((
        TimeTermination::seconds(3600),
        NodeCountTermination::new(5),
        TimeTermination::new(Duration::ZERO),
    ));
    assert_eq!(
        term.check(&scope),
        Some(TerminationReason::NodeLimit { limit: 5 })
    );
}

#[test]
fn test_or_termination_none_fire() {
    let scope = EnumerationScope::new();
    let term = OrTermination((NoTermination, None::<TimeTermination>));
    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_boxed_termination() {
    let scope = EnumerationScope::new();
    let ext = ExternalTermination::new();
    let boxed: Box<dyn Termination> = Box::new(ext.clone());
    ext.terminate();
    assert!(boxed.is_terminated(&scope));
}
