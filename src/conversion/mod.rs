//! # Signal Axis Conversion
//!
//! Converts wavelength spectra (nm or µm) to energy (eV), wavenumber (cm⁻¹)
//! or Raman shift (cm⁻¹ relative to a laser line).
//!
//! The conversion has three parts:
//!
//! 1. **Axis**: every sample is mapped through the non-linear relation
//!    (`E = h·c / (e · n_air(λ) · λ)` for energy, `ν = 10⁷/λ` for
//!    wavenumber). The result is an explicit (non-uniform) axis, reversed so
//!    that it remains ascending.
//! 2. **Data**: intensities are multiplied by the Jacobian `|dλ/dE|` so the
//!    integrated signal is conserved.
//! 3. **Variance**: multiplied by the squared Jacobian. A linear noise model
//!    calibrated in wavelength space is reset to identity, with a warning.
//!
//! The free functions ([`axis_to_energy`], [`data_to_energy`], ...) expose
//! each step; the methods on [`Spectrum`](crate::spectrum::Spectrum) combine
//! them and come in a functional form returning a new spectrum and an
//! in-place form replacing the receiver.

mod error;
mod jacobian;
mod refractive;
mod spectrum_ops;


use serde::{Deserialize, Serialize};

use crate::spectrum::Spectrum;

pub use error::{ConversionError, ConversionWarning};
pub use jacobian::{
    axis_to_energy, axis_to_relative_wavenumber, axis_to_wavenumber, data_to_energy,
    data_to_wavenumber, energy_jacobian, variance_to_energy, variance_to_wavenumber,
    wavenumber_jacobian, AxisConversion,
};
pub use refractive::{
    ev_to_nm, invcm_to_nm, n_air, n_air_in_range, nm_to_ev, nm_to_invcm, ELEMENTARY_CHARGE,
    N_AIR_MAX_NM, N_AIR_MIN_NM, PLANCK, SPEED_OF_LIGHT,
};

/// Options for spectrum-level conversions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Rescale intensities and variance by the Jacobian (default: true).
    /// When false only the axis changes and the data are reordered.
    pub jacobian: bool,

    /// Laser wavelength for relative wavenumbers, in the unit of the axis
    pub laser_wavelength: Option<f64>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            jacobian: true,
            laser_wavelength: None,
        }
    }
}

impl ConversionOptions {
    /// Axis-only conversion without intensity rescaling
    pub fn without_jacobian() -> Self {
        Self {
            jacobian: false,
            ..Self::default()
        }
    }
}

/// A converted spectrum together with the warnings raised on the way
#[derive(Debug, Clone)]
pub struct Converted {
    /// The new spectrum
    pub spectrum: Spectrum,
    /// Non-fatal conditions (clamped refractive index, reset noise model)
    pub warnings: Vec<ConversionWarning>,
}
