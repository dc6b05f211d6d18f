//! Tests for the progress event system.

use std::sync::Arc;

use super::*;

#[test]
fn test_counting_listener_receives_fired_events() {
    let counter = Arc::new(CountingProgressListener::new());
    let mut support = ProgressEventSupport::new();
    support.add_listener(counter.clone());

    support.fire_recommendation_started(4);
    support.fire_stage_started(1, 4);
    support.fire_stage_ended(1, 4, 150);
    support.fire_stage_started(2, 4);
    support.fire_stage_ended(2, 4, 90);
    support.fire_ranking_started(90);
    support.fire_recommendation_ended(5);

    assert_eq!(counter.recommendation_started_count(), 1);
    assert_eq!(counter.stage_started_count(), 2);
    assert_eq!(counter.stage_ended_count(), 2);
    assert_eq!(counter.ranking_started_count(), 1);
    assert_eq!(counter.recommendation_ended_count(), 1);

    counter.reset();
    assert_eq!(counter.stage_started_count(), 0);
}

#[test]
fn test_all_listeners_are_notified() {
    let first = Arc::new(CountingProgressListener::new());
    let second = Arc::new(CountingProgressListener::new());
    let mut support = ProgressEventSupport::new();
    support.add_listener(first.clone());
    support.add_listener(second.clone());
    assert_eq!(support.listener_count(), 2);

    support.fire_stage_started(1, 1);
    assert_eq!(first.stage_started_count(), 1);
    assert_eq!(second.stage_started_count(), 1);
}

#[test]
fn test_clear_listeners() {
    let counter = Arc::new(CountingProgressListener::new());
    let mut support = ProgressEventSupport::new();
    support.add_listener(counter.clone());
    support.clear_listeners();
    assert!(!support.has_listeners());

    support.fire_stage_started(1, 1);
    assert_eq!(counter.stage_started_count(), 0);
}
