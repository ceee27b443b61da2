use crate::axis::{AxisError, Unit};
use crate::spectrum::{SpectrumError, VarianceLinearModel};

/// Errors that abort an axis conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Source axis already carries the target unit
    #[error("Signal unit is already {unit}")]
    AlreadyInUnit {
        /// The target (and current) unit
        unit: Unit,
    },

    /// Source axis is not a wavelength axis
    #[error("Cannot convert an axis in {unit} to {target}; expected a wavelength axis (nm or µm)")]
    UnsupportedUnit {
        /// Unit of the source axis
        unit: Unit,
        /// Requested target unit
        target: Unit,
    },

    /// Wavelengths must be strictly positive
    #[error("Wavelength {0} is not positive")]
    NonPositiveWavelength(f64),

    /// Array length does not match the axis length
    #[error("Expected {expected} samples along the signal axis, found {found}")]
    LengthMismatch {
        /// Expected number of samples
        expected: usize,
        /// Number of samples found
        found: usize,
    },

    /// No laser wavelength given and none stored in the metadata
    #[error("Laser wavelength is neither given nor stored in the metadata")]
    MissingLaserWavelength,

    /// Laser wavelength does not look like it is in the unit of the axis
    #[error("Laser wavelength units do not match the signal axis: {laser} with an axis in {unit}")]
    LaserUnitMismatch {
        /// The laser wavelength given
        laser: f64,
        /// Unit of the signal axis
        unit: Unit,
    },

    /// Building the converted axis failed
    #[error("Axis error: {0}")]
    Axis(#[from] AxisError),

    /// Rebuilding the spectrum failed
    #[error("Spectrum error: {0}")]
    Spectrum(#[from] SpectrumError),
}

/// Recoverable conditions reported alongside a successful conversion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionWarning {
    /// Refractive index of air was clamped at the edge of its validity range
    #[error(
        "The wavelength range {min_nm}-{max_nm} nm exceeds the interval of 185 to 1700 nm for \
         which the exact refractive index of air is used. Beyond this range, the refractive \
         index is kept constant."
    )]
    WavelengthOutOfRange {
        /// Lowest wavelength of the axis, in nm
        min_nm: f64,
        /// Highest wavelength of the axis, in nm
        max_nm: f64,
    },

    /// Linear noise model was reset after a Jacobian transformation
    #[error(
        "Following the Jacobian transformation, the variance linear model \
         {previous:?} is no longer valid and was reset to gain_factor=1, gain_offset=0, \
         correlation_factor=1"
    )]
    NoiseModelReset {
        /// The model that was discarded
        previous: VarianceLinearModel,
    },
}
