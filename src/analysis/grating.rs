//! Pixel to wavelength calibration of a CCD behind a grating spectrometer.
//!
//! Geometry after the Horiba optics tutorial "Wavelength - pixel position".

use log::warn;
use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::axis::{CalibratedAxis, Unit};
use crate::conversion::{n_air, n_air_in_range};

/// Spectrometer geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GratingParameters {
    /// Inclination between the focal plane and the grating centre, found
    /// from calibration (degrees)
    pub gamma_deg: f64,
    /// Included angle between diffraction and incidence (degrees)
    pub deviation_angle_deg: f64,
    /// Focal length (mm)
    pub focal_length_mm: f64,
    /// Width of the CCD (mm)
    pub ccd_width_mm: f64,
    /// Wavelength at the grating centre, where the exit slit sits (nm)
    pub central_wavelength_nm: f64,
    /// Groove density (grooves per mm)
    pub grating_density_gr_mm: f64,
}

/// Calibrate a pixel axis to a uniform wavelength axis in nm (in air).
///
/// The wavelengths at both ends of the detector follow from the grating
/// equation; the channels in between are spaced evenly. An axis that already
/// carries a physical unit is converted anyway, with a warning.
pub fn solve_grating_equation(
    axis: &CalibratedAxis,
    params: &GratingParameters,
) -> Result<CalibratedAxis, AnalysisError> {
    if !matches!(axis.unit, Unit::Pixel | Unit::Undefined) {
        warn!(
            "The signal axis is already in {} units (not in pixel units). The conversion will run anyways.",
            axis.unit
        );
    }
    let channels = axis.len() as f64;
    let gamma = params.gamma_deg.to_radians();
    let deviation = params.deviation_angle_deg;
    let density = params.grating_density_gr_mm;

    // perpendicular distance from the spectral plane to the grating
    let l_h = params.focal_length_mm * gamma.cos();
    // from the foot of that normal to the central wavelength
    let h_blc = params.focal_length_mm * gamma.sin();

    // angle of incidence and of diffraction; the mixed degree/radian terms
    // reproduce the established calibration of existing instruments
    let numerator = 1e-6 * density * params.central_wavelength_nm;
    let denominator = 2.0 * (deviation / 2.0).to_radians().cos();
    let alpha = (numerator / denominator).to_radians().asin() - deviation / 2.0;
    let beta = alpha + deviation;

    let pixel = params.ccd_width_mm / channels;
    let beta_min = beta + gamma - ((pixel * 0.5 * channels - h_blc) / l_h).atan();
    let beta_max = beta + gamma - ((pixel * (1.0 - channels / 2.0) - h_blc) / l_h).atan();

    let l_min = (1e6 * (alpha.sin() + beta_min.sin()) / density).abs();
    let l_max = (1e6 * (alpha.sin() + beta_max.sin()) / density).abs();
    if !n_air_in_range(l_min) || !n_air_in_range(l_max) {
        warn!(
            "The wavelength range {l_min}-{l_max} nm exceeds the interval of 185 to 1700 nm; \
             the refractive index of air is kept constant beyond it"
        );
    }
    let l_min = l_min / n_air(l_min);
    let l_max = l_max / n_air(l_max);

    if !(l_min.is_finite() && l_max.is_finite()) {
        return Err(AnalysisError::InvalidGrating(format!(
            "wavelength range {l_min}-{l_max} nm is not finite"
        )));
    }
    if l_max <= l_min {
        return Err(AnalysisError::InvalidGrating(format!(
            "wavelength decreases across the detector ({l_min} to {l_max} nm)"
        )));
    }

    let scale = (l_max - l_min) / channels;
    Ok(CalibratedAxis::uniform(l_min, scale, axis.len())?
        .with_name("Wavelength")
        .with_unit(Unit::Nanometer))
}
