//! End-to-end element classification.
//!
//! [`ElementClassifier`] owns an inference engine and the geometry settings,
//! and runs extraction followed by classification for one element at a time.
//! Calls share no state besides the engine itself.

use std::time::Instant;

use tracing::{instrument, warn};

use crate::classify::{InferenceEngine, classify};
use crate::config::GeometryConfig;
use crate::element::{DEFAULT_CATEGORY, ElementGeometry};
use crate::error::{MassclassError, Result};
use crate::extract::extract;
use crate::telemetry;
use crate::types::{EdgeGeometry, PredictionResult};
use crate::units::LengthUnit;

/// Extracts dimensions from element geometry and classifies them.
pub struct ElementClassifier<E> {
    engine: E,
    unit: LengthUnit,
    accepted_categories: Vec<String>,
}

impl<E: InferenceEngine> ElementClassifier<E> {
    /// Classifier with default geometry settings (feet, "Mass" only).
    pub fn new(engine: E) -> Self {
        Self::builder(engine).build()
    }

    pub fn builder(engine: E) -> ElementClassifierBuilder<E> {
        ElementClassifierBuilder::new(engine)
    }

    /// Unit the host geometry is expressed in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn accepted_categories(&self) -> &[String] {
        &self.accepted_categories
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Classify a solid from its boundary edges.
    #[instrument(skip_all, fields(engine = self.engine.name(), edges = edges.len()))]
    pub fn predict_edges<G: EdgeGeometry>(&mut self, edges: &[G]) -> Result<PredictionResult> {
        let start = Instant::now();
        let result = extract(edges, &self.unit).and_then(|f| classify(&f, &mut self.engine));
        record_prediction(self.engine.name(), start, &result);
        result
    }

    /// Classify an element: category check, boundary edges, then [`predict_edges`](Self::predict_edges).
    #[instrument(skip_all, fields(category = %element.category))]
    pub fn predict_element(&mut self, element: &ElementGeometry) -> Result<PredictionResult> {
        element.ensure_category(&self.accepted_categories)?;
        let edges = element.boundary_edges();
        if edges.is_empty() {
            return Err(MassclassError::NoGeometry);
        }
        self.predict_edges(edges)
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}

fn record_prediction(engine: &str, start: Instant, result: &Result<PredictionResult>) {
    let (label, status) = match result {
        Ok(r) => (r.label.name(), "ok"),
        Err(e) => {
            warn!(error = %e, "prediction failed");
            ("none", "error")
        }
    };
    metrics::counter!(telemetry::PREDICTIONS_TOTAL,
        "label" => label,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::PREDICTION_DURATION_SECONDS,
        "engine" => engine.to_owned(),
    )
    .record(start.elapsed().as_secs_f64());
}

/// Builder for [`ElementClassifier`].
pub struct ElementClassifierBuilder<E> {
    engine: E,
    unit: LengthUnit,
    accepted_categories: Vec<String>,
}

impl<E: InferenceEngine> ElementClassifierBuilder<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            unit: LengthUnit::default(),
            accepted_categories: vec![DEFAULT_CATEGORY.to_string()],
        }
    }

    /// Unit of the host coordinates and edge lengths.
    pub fn unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Replace the accepted host categories.
    pub fn accepted_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Apply a `[geometry]` config section.
    pub fn geometry(self, config: &GeometryConfig) -> Self {
        self.unit(config.internal_unit)
            .accepted_categories(config.accepted_categories.iter().cloned())
    }

    pub fn build(self) -> ElementClassifier<E> {
        ElementClassifier {
            engine: self.engine,
            unit: self.unit,
            accepted_categories: self.accepted_categories,
        }
    }
}
