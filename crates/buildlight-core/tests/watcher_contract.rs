//! Contract tests for `Watcher` driven by the in-memory fakes.

use std::sync::Arc;

use buildlight_core::fakes::{RecordingSink, StaticStatusSource};
use buildlight_core::{
    Activity, BuildOutcome, IndicatorAction, ProjectStatus, WatchError, Watcher, WatcherConfig,
};

const CC_URL: &str = "http://jenkins.org/cc.xml";

fn status(activity: &str, outcome: &str) -> ProjectStatus {
    ProjectStatus::from_raw(activity, outcome)
}

/// Run one cycle for project "foo" and return the source and sink for inspection.
async fn run_cycle(
    source: StaticStatusSource,
) -> (
    Result<IndicatorAction, WatchError>,
    Arc<StaticStatusSource>,
    Arc<RecordingSink>,
) {
    let source = Arc::new(source);
    let sink = Arc::new(RecordingSink::new());
    let config = WatcherConfig::new(CC_URL, "foo").expect("valid config");
    let watcher = Watcher::new(config, source.clone(), sink.clone());

    let result = watcher.watch_server().await;
    (result, source, sink)
}

/// Test: idle project with a green build lights success exactly once
#[tokio::test]
async fn test_sleeping_success_signals_success_once() {
    let source = StaticStatusSource::with_projects([("foo", status("Sleeping", "Success"))]);

    let (result, source, sink) = run_cycle(source).await;

    assert_eq!(result.unwrap(), IndicatorAction::Success);
    assert_eq!(sink.calls(), vec![IndicatorAction::Success]);
    assert_eq!(source.call_count(), 1);
}

/// Test: a failing last build shows as failed even while building
#[tokio::test]
async fn test_building_after_failure_signals_failure() {
    let source = StaticStatusSource::single(status("Building", "Failure"));

    let (result, _, sink) = run_cycle(source).await;

    assert_eq!(result.unwrap(), IndicatorAction::Failure);
    assert_eq!(sink.calls(), vec![IndicatorAction::Failure]);
    assert!(!sink.calls().contains(&IndicatorAction::InProgress));
}

/// Test: an exception in the last build warns even while building
#[tokio::test]
async fn test_building_after_exception_signals_warning() {
    let source = StaticStatusSource::single(status("Building", "Exception"));

    let (result, _, sink) = run_cycle(source).await;

    assert_eq!(result.unwrap(), IndicatorAction::Warning);
    assert_eq!(sink.calls(), vec![IndicatorAction::Warning]);
}

/// Test: building on top of a green build shows progress
#[tokio::test]
async fn test_building_after_success_signals_in_progress() {
    let source = StaticStatusSource::single(status("Building", "Success"));

    let (result, _, sink) = run_cycle(source).await;

    assert_eq!(result.unwrap(), IndicatorAction::InProgress);
    assert_eq!(sink.calls(), vec![IndicatorAction::InProgress]);
}

/// Test: every known combination makes exactly one fetch and one sink call
#[tokio::test]
async fn test_every_cycle_fetches_once_and_signals_once() {
    let activities = ["Sleeping", "CheckingModifications", "Building"];
    let outcomes = ["Success", "Failure", "Exception"];

    for activity in activities {
        for outcome in outcomes {
            let source = StaticStatusSource::single(status(activity, outcome));

            let (result, source, sink) = run_cycle(source).await;

            let action = result.expect("cycle should succeed");
            assert_eq!(source.call_count(), 1, "{activity}/{outcome}");
            assert_eq!(sink.calls(), vec![action], "{activity}/{outcome}");
        }
    }
}

/// Test: missing project propagates and leaves the light untouched
#[tokio::test]
async fn test_missing_project_propagates_without_signal() {
    let source = StaticStatusSource::with_projects([("bar", status("Sleeping", "Success"))]);

    let (result, source, sink) = run_cycle(source).await;

    assert_eq!(
        result.unwrap_err(),
        WatchError::ProjectNotFound {
            project: "foo".to_string()
        }
    );
    assert_eq!(source.call_count(), 1);
    assert!(sink.calls().is_empty());
}

/// Test: fetch and parse failures propagate unchanged
#[tokio::test]
async fn test_source_errors_propagate_unchanged() {
    let errors = [
        WatchError::Fetch("connection refused".to_string()),
        WatchError::Parse("unexpected root element".to_string()),
    ];

    for error in errors {
        let source = StaticStatusSource::failing(error.clone());

        let (result, _, sink) = run_cycle(source).await;

        assert_eq!(result.unwrap_err(), error);
        assert!(sink.calls().is_empty());
    }
}

/// Test: repeated cycles are independent; nothing is remembered between them
#[tokio::test]
async fn test_repeated_cycles_signal_every_time() {
    let source = Arc::new(StaticStatusSource::single(status("Sleeping", "Success")));
    let sink = Arc::new(RecordingSink::new());
    let config = WatcherConfig::new(CC_URL, "foo").unwrap();
    let watcher = Watcher::new(config, source.clone(), sink.clone());

    for _ in 0..3 {
        watcher.watch_server().await.unwrap();
    }

    assert_eq!(source.call_count(), 3);
    assert_eq!(sink.calls(), vec![IndicatorAction::Success; 3]);
}

/// Test: unrecognized values still produce exactly one action
#[tokio::test]
async fn test_unrecognized_values_still_signal() {
    let source = StaticStatusSource::single(ProjectStatus::new(
        Activity::Unrecognized("Queued".to_string()),
        BuildOutcome::Unrecognized("Unknown".to_string()),
    ));

    let (result, _, sink) = run_cycle(source).await;

    assert_eq!(result.unwrap(), IndicatorAction::Warning);
    assert_eq!(sink.calls(), vec![IndicatorAction::Warning]);
}

/// Test: watchers for different projects share a source without interfering
#[tokio::test]
async fn test_concurrent_watchers_are_independent() {
    let source = Arc::new(StaticStatusSource::with_projects([
        ("foo", status("Building", "Success")),
        ("bar", status("Sleeping", "Failure")),
    ]));
    let foo_sink = Arc::new(RecordingSink::new());
    let bar_sink = Arc::new(RecordingSink::new());

    let foo = Watcher::new(
        WatcherConfig::new(CC_URL, "foo").unwrap(),
        source.clone(),
        foo_sink.clone(),
    );
    let bar = Watcher::new(
        WatcherConfig::new(CC_URL, "bar").unwrap(),
        source.clone(),
        bar_sink.clone(),
    );

    let (foo_result, bar_result) = tokio::join!(foo.watch_server(), bar.watch_server());

    assert_eq!(foo_result.unwrap(), IndicatorAction::InProgress);
    assert_eq!(bar_result.unwrap(), IndicatorAction::Failure);
    assert_eq!(foo_sink.calls(), vec![IndicatorAction::InProgress]);
    assert_eq!(bar_sink.calls(), vec![IndicatorAction::Failure]);
    assert_eq!(source.call_count(), 2);
}
