use crate::axis::AxisError;

/// Errors that can occur when building or reshaping a spectrum
#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    /// The data array has no dimension to hold the signal axis
    #[error("Spectrum data must have at least one dimension")]
    NoSignalDimension,

    /// Last data dimension does not match the signal axis length
    #[error("Signal axis has {axis} samples but the data's last dimension has {data}")]
    SignalLengthMismatch {
        /// Number of samples on the signal axis
        axis: usize,
        /// Length of the data's last dimension
        data: usize,
    },

    /// Navigation axes do not describe the leading data dimensions
    #[error("Navigation axes {axes:?} do not match navigation shape {shape:?}")]
    NavigationMismatch {
        /// Lengths of the supplied navigation axes
        axes: Vec<usize>,
        /// Leading dimensions of the data array
        shape: Vec<usize>,
    },

    /// A per-sample variance array must have the shape of the data
    #[error("Variance shape {variance:?} does not match data shape {data:?}")]
    VarianceShapeMismatch {
        /// Shape of the variance array
        variance: Vec<usize>,
        /// Shape of the data array
        data: Vec<usize>,
    },

    /// Navigation slice request was invalid
    #[error("Invalid navigation slice: {0}")]
    InvalidSlice(String),

    /// Axis construction or lookup failed
    #[error("Axis error: {0}")]
    Axis(#[from] AxisError),

    /// Reshaping the data array failed
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
