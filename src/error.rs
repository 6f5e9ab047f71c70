//! Massclass error types

/// Massclass error types
#[derive(Debug, thiserror::Error)]
pub enum MassclassError {
    // Geometry errors
    /// Fewer boundary edges than a box-like solid needs.
    #[error("not enough boundary edges: need {required}, got {actual}")]
    OutOfRange { required: usize, actual: usize },

    #[error("element has no solid with boundary edges")]
    NoGeometry,

    #[error("unsupported element category: {0}")]
    UnsupportedCategory(String),

    // Inference errors
    /// The engine returned a probability vector of the wrong length.
    #[error("shape mismatch: expected {expected} probabilities, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Opaque failure from the inference engine.
    #[error("inference failed: {0}")]
    Inference(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl MassclassError {
    /// Whether the error was caused by the geometry or data the caller supplied,
    /// as opposed to the model, the engine or the configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::NoGeometry
                | Self::UnsupportedCategory(_)
                | Self::Json(_)
                | Self::InvalidInput(_)
        )
    }
}

/// Result type alias for Massclass operations
pub type Result<T> = std::result::Result<T, MassclassError>;
