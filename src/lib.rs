//! Massclass - structural element classification from solid geometry
//!
//! This crate derives the three axis-aligned dimensions of a box-like solid
//! from its boundary edges and asks a pre-trained classifier whether the
//! element is a wall, floor, column or beam.
//!
//! The classifier is any [`InferenceEngine`]; with the `local-inference`
//! feature an ONNX Runtime backend ([`OnnxCategoryModel`]) is available.
//!
//! # Example
//!
//! ```rust
//! use massclass::{
//!     ElementCategory, ElementClassifier, ElementGeometry, LengthUnit, Point3,
//!     ProbabilityVector, QuantizedFeatures,
//! };
//!
//! fn main() -> massclass::Result<()> {
//!     // Stand-in for a loaded model
//!     let engine = |_: &QuantizedFeatures| -> massclass::Result<ProbabilityVector> {
//!         Ok(ProbabilityVector::new(vec![0.05, 0.10, 0.80, 0.05]))
//!     };
//!
//!     let mut classifier = ElementClassifier::builder(engine)
//!         .unit(LengthUnit::Millimeters)
//!         .build();
//!
//!     let element =
//!         ElementGeometry::box_from_dimensions("Mass", Point3::ZERO, 400.0, 400.0, 3000.0);
//!     let result = classifier.predict_element(&element)?;
//!
//!     assert_eq!(result.label, ElementCategory::Column);
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod device;
pub mod element;
pub mod error;
pub mod extract;
#[cfg(feature = "local-inference")]
pub mod onnx;
pub mod pipeline;
pub mod telemetry;
pub mod types;
pub mod units;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types at crate root
pub use classify::{InferenceEngine, classify};
pub use config::{Config, GeometryConfig, InputElementType, ModelConfig};
pub use device::Device;
pub use element::{ElementGeometry, Solid};
pub use error::{MassclassError, Result};
pub use extract::{BOX_EDGE_COUNT, edge_axis, extract};
pub use pipeline::{ElementClassifier, ElementClassifierBuilder};
pub use units::{LengthUnit, UnitConverter};

#[cfg(feature = "local-inference")]
pub use onnx::{CategoryModelInfo, OnnxCategoryModel};

// Re-export all types
pub use types::{
    Axis, Edge, EdgeGeometry, ElementCategory, FeatureVector, Point3, PredictionResult,
    ProbabilityVector, QuantizedFeatures,
};
