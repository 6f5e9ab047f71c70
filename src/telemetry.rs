//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `massclass_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).

/// Total element predictions.
///
/// Labels: `label` (predicted category, or "none" on failure),
/// `status` ("ok" | "error").
pub const PREDICTIONS_TOTAL: &str = "massclass_predictions_total";

/// Time spent in extraction plus inference, in seconds.
///
/// Labels: `engine`.
pub const PREDICTION_DURATION_SECONDS: &str = "massclass_prediction_duration_seconds";
