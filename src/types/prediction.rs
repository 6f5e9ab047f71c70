//! Model output and prediction results.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ElementCategory, FeatureVector, QuantizedFeatures};

/// Probability per category, in [`ElementCategory`] index order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityVector(Vec<f32>);

impl ProbabilityVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    pub fn sum(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Index and value of the maximum entry.
    ///
    /// On ties the lowest index wins. Returns `None` for an empty vector.
    pub fn argmax(&self) -> Option<(usize, f32)> {
        let (first, rest) = self.0.split_first()?;
        let mut best = (0, *first);
        for (i, &p) in rest.iter().enumerate() {
            if p > best.1 {
                best = (i + 1, p);
            }
        }
        Some(best)
    }
}

impl From<Vec<f32>> for ProbabilityVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

/// Outcome of classifying one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Most likely category.
    pub label: ElementCategory,
    /// Probability of `label` (0.0 to 1.0).
    pub confidence: f32,
    /// Extracted lengths, before truncation.
    pub features: FeatureVector,
    /// Truncated lengths the model actually scored.
    pub quantized: QuantizedFeatures,
    /// Full distribution returned by the model.
    pub probabilities: ProbabilityVector,
}

impl PredictionResult {
    /// All categories ordered by descending probability.
    ///
    /// Ties keep index order, so the first entry always equals `label`.
    pub fn ranked(&self) -> Vec<(ElementCategory, f32)> {
        let mut ranked: Vec<(ElementCategory, f32)> = ElementCategory::ALL
            .iter()
            .filter_map(|&c| self.probabilities.get(c.index()).map(|p| (c, p)))
            .collect();
        // Stable sort; the label is pinned first so NaN entries cannot displace it.
        ranked.sort_by(|a, b| {
            (b.0 == self.label)
                .cmp(&(a.0 == self.label))
                .then(b.1.total_cmp(&a.1))
        });
        ranked
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d1, d2, d3] = self.quantized.as_array();
        writeln!(
            f,
            "A {} with the chance of {}%",
            self.label,
            self.confidence * 100.0
        )?;
        writeln!(f)?;
        writeln!(f, "Dim1: {d1}")?;
        writeln!(f, "Dim2: {d2}")?;
        write!(f, "Dim3: {d3}")
    }
}
