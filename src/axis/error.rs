/// Errors that can occur when constructing or querying a calibrated axis
#[derive(Debug, thiserror::Error)]
pub enum AxisError {
    /// An axis must contain at least one sample
    #[error("Axis must contain at least one sample")]
    Empty,

    /// Samples must be finite numbers
    #[error("Axis sample at index {index} is not finite")]
    NonFinite {
        /// Index of the offending sample
        index: usize,
    },

    /// Samples must be strictly increasing
    #[error("Axis samples must be strictly increasing (violated at index {index})")]
    NotIncreasing {
        /// First index where the ordering is violated
        index: usize,
    },

    /// Uniform axes need a positive, finite scale
    #[error("Invalid uniform axis scale: {0}")]
    InvalidScale(f64),

    /// Requested value lies outside the axis range
    #[error("Value {value} is outside the axis range [{min}, {max}]")]
    ValueOutOfRange {
        /// The requested value
        value: f64,
        /// Lowest sample of the axis
        min: f64,
        /// Highest sample of the axis
        max: f64,
    },

    /// Requested index range does not fit the axis
    #[error("Index range {start}..{end} is invalid for an axis of size {size}")]
    InvalidRange {
        /// Start of the requested range
        start: usize,
        /// End of the requested range (exclusive)
        end: usize,
        /// Size of the axis
        size: usize,
    },

    /// Unit string could not be recognised
    #[error("Unknown axis unit: {0}")]
    UnknownUnit(String),
}
