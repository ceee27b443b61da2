use crate::spectrum::SpectrumError;

/// Errors raised while cropping navigation edges
#[derive(Debug, thiserror::Error)]
pub enum CropError {
    /// Spectrum has no navigation dimension to crop
    #[error("Cropping edges requires at least one navigation dimension")]
    NoNavigation,

    /// Only line scans and maps are supported
    #[error("Cropping edges is not supported for navigation axes with {0} dimensions (maximum 2)")]
    TooManyNavigationDims(usize),

    /// Spectra in the list have different numbers of navigation dimensions
    #[error("The signal list mixes {first} and {found} navigation dimensions")]
    MixedNavigationDims {
        /// Navigation dimensions of the first spectrum
        first: usize,
        /// Navigation dimensions found
        found: usize,
    },

    /// Range not applicable to the data
    #[error("Invalid crop range: {0}")]
    InvalidRange(String),

    /// Nothing would remain along some navigation axis
    #[error("The pixels to be cropped surpassed the width/height of the signal navigation axes ({requested} of {available})")]
    CroppedTooFar {
        /// Pixels requested on both sides together
        requested: usize,
        /// Length of the navigation axis
        available: usize,
    },

    /// Slicing the spectrum failed
    #[error("Spectrum error: {0}")]
    Spectrum(#[from] SpectrumError),
}
