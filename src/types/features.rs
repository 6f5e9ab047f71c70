//! Feature vectors fed to the category model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Axis;

/// Extracted lengths along X, Y and Z, in millimeters.
///
/// Immutable once built; this is the sole input to classification.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; 3]);

impl FeatureVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// Length along the given axis.
    pub fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }

    /// Truncate every slot toward zero.
    ///
    /// The model was trained on integer millimeters, so this is the exact
    /// quantization applied before scoring. Out-of-range values saturate and
    /// NaN becomes 0.
    pub fn quantize(&self) -> QuantizedFeatures {
        QuantizedFeatures(self.0.map(|v| v as i32))
    }
}

impl From<[f64; 3]> for FeatureVector {
    fn from(values: [f64; 3]) -> Self {
        Self(values)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// Feature vector after truncation, as actually passed to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantizedFeatures([i32; 3]);

impl QuantizedFeatures {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    pub fn as_array(&self) -> [i32; 3] {
        self.0
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_truncates_not_rounds() {
        let features = FeatureVector::new(10.7, 5.2, 3.9);
        assert_eq!(features.quantize(), QuantizedFeatures::new(10, 5, 3));
    }

    #[test]
    fn quantize_truncates_toward_zero_for_negatives() {
        let features = FeatureVector::new(-0.9, -2.5, 0.0);
        assert_eq!(features.quantize(), QuantizedFeatures::new(0, -2, 0));
    }

    #[test]
    fn quantize_saturates_and_zeroes_nan() {
        let features = FeatureVector::new(f64::MAX, f64::NAN, -1e12);
        assert_eq!(
            features.quantize(),
            QuantizedFeatures::new(i32::MAX, 0, i32::MIN)
        );
    }

    #[test]
    fn get_by_axis() {
        let features = FeatureVector::new(1.0, 2.0, 3.0);
        assert_eq!(features.get(Axis::X), 1.0);
        assert_eq!(features.get(Axis::Y), 2.0);
        assert_eq!(features.get(Axis::Z), 3.0);
    }

    #[test]
    fn display() {
        assert_eq!(
            FeatureVector::new(4000.0, 3000.5, 0.0).to_string(),
            "(4000, 3000.5, 0)"
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&FeatureVector::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0]");
    }
}
