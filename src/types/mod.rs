//! Public types for the Massclass API.

mod category;
mod features;
mod geometry;
mod prediction;

pub use category::ElementCategory;
pub use features::{FeatureVector, QuantizedFeatures};
pub use geometry::{Axis, Edge, EdgeGeometry, Point3};
pub use prediction::{PredictionResult, ProbabilityVector};
