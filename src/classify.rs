//! Category classification from extracted dimensions.
//!
//! The model itself is opaque: anything implementing [`InferenceEngine`] can
//! score a feature vector. This keeps the decision logic testable with fixed
//! probability vectors and no runtime present.

use tracing::{debug, instrument};

use crate::error::{MassclassError, Result};
use crate::types::{
    ElementCategory, FeatureVector, PredictionResult, ProbabilityVector, QuantizedFeatures,
};

/// Scores truncated feature vectors with a loaded model.
///
/// Implementations may block (a forward pass, lazy loading). Any error they
/// return is passed through [`classify`] untouched.
pub trait InferenceEngine {
    /// Engine name for logging/metrics.
    fn name(&self) -> &str {
        "custom"
    }

    /// Produce one probability per [`ElementCategory`], in index order.
    fn infer(&mut self, features: &QuantizedFeatures) -> Result<ProbabilityVector>;
}

impl<F> InferenceEngine for F
where
    F: FnMut(&QuantizedFeatures) -> Result<ProbabilityVector>,
{
    fn infer(&mut self, features: &QuantizedFeatures) -> Result<ProbabilityVector> {
        self(features)
    }
}

/// Classify an element from its extracted dimensions.
///
/// Features are truncated toward zero before scoring. The most probable
/// category wins, the lowest index on ties. The result echoes the
/// untruncated features.
#[instrument(skip(engine), fields(engine = engine.name()))]
pub fn classify<E>(features: &FeatureVector, engine: &mut E) -> Result<PredictionResult>
where
    E: InferenceEngine + ?Sized,
{
    let quantized = features.quantize();
    let probabilities = engine.infer(&quantized)?;

    if probabilities.len() != ElementCategory::COUNT {
        return Err(MassclassError::ShapeMismatch {
            expected: ElementCategory::COUNT,
            actual: probabilities.len(),
        });
    }

    let (index, confidence) = probabilities.argmax().ok_or(MassclassError::ShapeMismatch {
        expected: ElementCategory::COUNT,
        actual: 0,
    })?;
    let label = ElementCategory::from_index(index).ok_or(MassclassError::ShapeMismatch {
        expected: ElementCategory::COUNT,
        actual: probabilities.len(),
    })?;

    debug!(?quantized, %label, confidence, "element classified");

    Ok(PredictionResult {
        label,
        confidence,
        features: *features,
        quantized,
        probabilities,
    })
}
