//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};

use massclass::telemetry;
use massclass::{
    ElementClassifier, ElementGeometry, MassclassError, Point3, ProbabilityVector,
    QuantizedFeatures, Result,
};

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum counter values matching a metric name and, optionally, a label pair.
fn counter_total(snapshot: &SnapshotVec, name: &str, label: Option<(&str, &str)>) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .filter(|(key, _, _, _)| match label {
            Some((k, v)) => key.key().labels().any(|l| l.key() == k && l.value() == v),
            None => true,
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

fn beam_engine(_: &QuantizedFeatures) -> Result<ProbabilityVector> {
    Ok(ProbabilityVector::new(vec![0.1, 0.1, 0.1, 0.7]))
}

fn failing_engine(_: &QuantizedFeatures) -> Result<ProbabilityVector> {
    Err(MassclassError::Inference("no runtime".into()))
}

fn beam() -> ElementGeometry {
    ElementGeometry::box_from_dimensions("Mass", Point3::ZERO, 20.0, 1.0, 1.5)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn successful_prediction_records_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        ElementClassifier::new(beam_engine).predict_element(&beam())
    });
    assert!(result.is_ok());

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(
        counter_total(&snapshot, telemetry::PREDICTIONS_TOTAL, Some(("label", "beam"))),
        1
    );
    assert_eq!(
        counter_total(&snapshot, telemetry::PREDICTIONS_TOTAL, Some(("status", "ok"))),
        1
    );
    assert!(has_histogram(&snapshot, telemetry::PREDICTION_DURATION_SECONDS));
}

#[test]
fn failed_prediction_records_error_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        ElementClassifier::new(failing_engine).predict_element(&beam())
    });
    assert!(result.is_err());

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(
        counter_total(&snapshot, telemetry::PREDICTIONS_TOTAL, Some(("status", "error"))),
        1
    );
    assert_eq!(counter_total(&snapshot, telemetry::PREDICTIONS_TOTAL, None), 1);
}

#[test]
fn rejected_category_records_nothing() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let element = ElementGeometry::box_from_dimensions("Walls", Point3::ZERO, 1.0, 1.0, 1.0);
    let _ = metrics::with_local_recorder(&recorder, || {
        ElementClassifier::new(beam_engine).predict_element(&element)
    });

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(counter_total(&snapshot, telemetry::PREDICTIONS_TOTAL, None), 0);
}
