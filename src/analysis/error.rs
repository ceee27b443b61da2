use crate::axis::AxisError;

/// Errors raised by the analysis helpers
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Intensities and axis differ in length
    #[error("The length of the spectrum array {data} must match the length of the axis {axis}")]
    LengthMismatch {
        /// Number of intensities
        data: usize,
        /// Number of axis samples
        axis: usize,
    },

    /// No samples
    #[error("Cannot analyse an empty spectrum")]
    Empty,

    /// Total intensity is zero or not finite, so no centre of mass exists
    #[error("Centre of mass undefined: total intensity is {0}")]
    UndefinedCentroid(f64),

    /// Grating parameters give no valid wavelength range
    #[error("Invalid grating parameters: {0}")]
    InvalidGrating(String),

    /// Building the calibrated axis failed
    #[error("Axis error: {0}")]
    Axis(#[from] AxisError),
}
