use crate::axis::AxisError;
use crate::interpolate::InterpolationError;
use crate::spectrum::SpectrumError;

/// Errors that abort stitching
#[derive(Debug, thiserror::Error)]
pub enum JoinError {
    /// Nothing to join
    #[error("At least one spectrum is required")]
    TooFewSpectra,

    /// Two consecutive signal axes do not overlap
    #[error("Signal axes not overlapping: spectrum {index} starts at {min} beyond the previous maximum {max}")]
    NoOverlap {
        /// Position of the later spectrum in the input list
        index: usize,
        /// Highest sample of the preceding spectrum
        max: f64,
        /// Lowest sample of this spectrum
        min: f64,
    },

    /// A spectrum adds nothing past the join point
    #[error("Spectrum {index} does not extend beyond the join point")]
    NoExtension {
        /// Position of the later spectrum in the input list
        index: usize,
    },

    /// Half-window of zero samples
    #[error("`r` must be at least 1")]
    EmptyWindow,

    /// Half-window does not fit into the overlap
    #[error("`r` is too large: r={r} but only {available} samples are available")]
    WindowTooLarge {
        /// Requested half-window
        r: usize,
        /// Samples available on the limiting side
        available: usize,
    },

    /// Averaging needs a ramp of at least two points per side
    #[error("Averaging can not be performed for r=1. Set average=false or r>1.")]
    AveragingRequiresWindow,

    /// Scale factor came out negative for some navigation position
    #[error(
        "One of the signals has a negative mean value in the overlapping range \
         (position {position}, factor {factor}). Try to set scale=false and average=true."
    )]
    NegativeScale {
        /// Flat navigation index
        position: usize,
        /// The offending factor
        factor: f64,
    },

    /// No finite, non-zero ratio inside the window
    #[error("Scale factor undefined at navigation position {position}: no usable samples in the window")]
    UndefinedScale {
        /// Flat navigation index
        position: usize,
    },

    /// Navigation dimensions differ between spectra
    #[error("Navigation shape {found:?} of spectrum {index} does not match {expected:?}")]
    NavigationShapeMismatch {
        /// Position of the spectrum in the input list
        index: usize,
        /// Navigation shape of the first spectrum
        expected: Vec<usize>,
        /// Navigation shape found
        found: Vec<usize>,
    },

    /// Evaluating an interpolant failed
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Building the joined axis failed
    #[error("Axis error: {0}")]
    Axis(#[from] AxisError),

    /// Assembling the joined spectrum failed
    #[error("Spectrum error: {0}")]
    Spectrum(#[from] SpectrumError),
}
