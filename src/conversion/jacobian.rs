//! Axis remapping and Jacobian rescaling of intensities and variances.
//!
//! Intensities are densities (counts per nm). Changing the independent
//! variable to energy or wavenumber rescales them by `|dλ/dE|` so that the
//! integrated signal is unchanged; variances scale by the square of the same
//! factor. See Mooney and Kambhampati, J. Phys. Chem. Lett. 4, 3316 (2013).

use log::warn;
use ndarray::{ArrayD, ArrayView1, ArrayViewD, Axis};

use super::refractive::{n_air, n_air_in_range, nm_to_ev, nm_to_invcm, HC_OVER_E};
use super::{ConversionError, ConversionWarning};
use crate::axis::{CalibratedAxis, Unit};
use crate::spectrum::NoiseVariance;

/// Result of converting a wavelength axis
#[derive(Debug, Clone)]
pub struct AxisConversion {
    /// The converted, ascending axis
    pub axis: CalibratedAxis,
    /// Unit-scale constant for the Jacobian step
    /// (`1e6`/`1e3` for energy, `1e7`/`1e4` for wavenumber, from nm/µm)
    pub factor: f64,
    /// Non-fatal conditions met during the conversion
    pub warnings: Vec<ConversionWarning>,
}

/// Convert a wavelength axis (nm or µm) to an energy axis in eV.
///
/// The samples are reversed so the result stays ascending. Axes without a
/// unit are taken to be in nm.
pub fn axis_to_energy(axis: &CalibratedAxis) -> Result<AxisConversion, ConversionError> {
    let (wavelengths, factor) = source_wavelengths(axis, Unit::ElectronVolt, 1e6, 1e3)?;
    let mut warnings = Vec::new();
    if let Some(warning) = range_warning(&wavelengths) {
        warn!("{warning}");
        warnings.push(warning);
    }

    let energies: Vec<f64> = wavelengths.iter().rev().map(|&wl| nm_to_ev(wl)).collect();
    let axis = CalibratedAxis::from_samples(energies)?
        .with_name("Energy")
        .with_unit(Unit::ElectronVolt);
    Ok(AxisConversion {
        axis,
        factor,
        warnings,
    })
}

/// Convert a wavelength axis (nm or µm) to a wavenumber axis in cm⁻¹.
pub fn axis_to_wavenumber(axis: &CalibratedAxis) -> Result<AxisConversion, ConversionError> {
    let (wavelengths, factor) = source_wavelengths(axis, Unit::Wavenumber, 1e7, 1e4)?;
    let wavenumbers: Vec<f64> = wavelengths.iter().rev().map(|&wl| nm_to_invcm(wl)).collect();
    let axis = CalibratedAxis::from_samples(wavenumbers)?
        .with_name("Wavenumber")
        .with_unit(Unit::Wavenumber);
    Ok(AxisConversion {
        axis,
        factor,
        warnings: Vec::new(),
    })
}

/// Convert a wavelength axis to wavenumbers relative to a laser line
/// (Raman shift). `laser` is in the unit of the axis.
///
/// The shift grows with wavelength, so no reversal takes place.
pub fn axis_to_relative_wavenumber(
    axis: &CalibratedAxis,
    laser: f64,
) -> Result<AxisConversion, ConversionError> {
    let (wavelengths, factor) = source_wavelengths(axis, Unit::Wavenumber, 1e7, 1e4)?;
    let laser_nm = match axis.unit {
        Unit::Micrometer if laser < 100.0 => laser * 1000.0,
        Unit::Micrometer => return Err(laser_mismatch(laser, axis.unit)),
        _ if laser < 10.0 => return Err(laser_mismatch(laser, axis.unit)),
        _ => laser,
    };
    if laser_nm <= 0.0 {
        return Err(ConversionError::NonPositiveWavelength(laser_nm));
    }

    let reference = nm_to_invcm(laser_nm);
    let shifts: Vec<f64> = wavelengths.iter().map(|&wl| reference - nm_to_invcm(wl)).collect();
    let axis = CalibratedAxis::from_samples(shifts)?
        .with_name("Wavenumber")
        .with_unit(Unit::Wavenumber);
    Ok(AxisConversion {
        axis,
        factor,
        warnings: Vec::new(),
    })
}

/// Jacobian factors `factor · h·c / (e · n_air(λ) · E²)` aligned with the
/// (reversed) energy samples.
pub fn energy_jacobian(
    factor: f64,
    source: &CalibratedAxis,
    energy: &[f64],
) -> Result<Vec<f64>, ConversionError> {
    let wavelengths = wavelengths_nm(source);
    check_length(wavelengths.len(), energy.len())?;
    Ok(wavelengths
        .iter()
        .rev()
        .zip(energy)
        .map(|(&wl, &e)| factor * HC_OVER_E / (n_air(wl) * e * e))
        .collect())
}

/// Jacobian factors `factor / ν²` for wavenumber samples `ν` in cm⁻¹
pub fn wavenumber_jacobian(factor: f64, wavenumber: &[f64]) -> Vec<f64> {
    wavenumber.iter().map(|&nu| factor / (nu * nu)).collect()
}

/// Rescale intensities from counts/nm (counts/µm) to counts/meV.
///
/// `data` is in source (wavelength) order along its last dimension; the
/// result is reversed to line up with the ascending energy axis.
pub fn data_to_energy(
    data: ArrayViewD<'_, f64>,
    factor: f64,
    source: &CalibratedAxis,
    energy: &[f64],
) -> Result<ArrayD<f64>, ConversionError> {
    check_length(signal_len(&data), energy.len())?;
    let jacobian = energy_jacobian(factor, source, energy)?;
    Ok(rescale(data, &jacobian, true))
}

/// Rescale intensities from counts/nm (counts/µm) to counts/cm⁻¹.
///
/// `data` is in source order; `wavenumber` holds the ascending target
/// samples, so the result is reversed.
pub fn data_to_wavenumber(
    data: ArrayViewD<'_, f64>,
    factor: f64,
    wavenumber: &[f64],
) -> Result<ArrayD<f64>, ConversionError> {
    check_length(signal_len(&data), wavenumber.len())?;
    Ok(rescale(data, &wavenumber_jacobian(factor, wavenumber), true))
}

/// Apply the squared energy Jacobian to a variance.
///
/// A constant variance is first broadcast to `shape`: after a non-linear
/// remap it is no longer the same at every sample.
pub fn variance_to_energy(
    variance: &NoiseVariance,
    shape: &[usize],
    factor: f64,
    source: &CalibratedAxis,
    energy: &[f64],
) -> Result<ArrayD<f64>, ConversionError> {
    let full = variance.broadcast_to(shape);
    check_length(signal_len(&full.view()), energy.len())?;
    let squared: Vec<f64> = energy_jacobian(factor, source, energy)?
        .into_iter()
        .map(|j| j * j)
        .collect();
    Ok(rescale(full.view(), &squared, true))
}

/// Apply the squared wavenumber Jacobian to a variance
pub fn variance_to_wavenumber(
    variance: &NoiseVariance,
    shape: &[usize],
    factor: f64,
    wavenumber: &[f64],
) -> Result<ArrayD<f64>, ConversionError> {
    let full = variance.broadcast_to(shape);
    check_length(signal_len(&full.view()), wavenumber.len())?;
    let squared: Vec<f64> = wavenumber_jacobian(factor, wavenumber)
        .into_iter()
        .map(|j| j * j)
        .collect();
    Ok(rescale(full.view(), &squared, true))
}

/// Multiply every signal row by `weights`, optionally reversing the rows first
pub(crate) fn rescale(data: ArrayViewD<'_, f64>, weights: &[f64], reverse: bool) -> ArrayD<f64> {
    let mut out = data.to_owned();
    if out.ndim() == 0 {
        return out;
    }
    let signal = Axis(out.ndim() - 1);
    if reverse {
        out.invert_axis(signal);
    }
    let weights = ArrayView1::from(weights);
    for mut lane in out.lanes_mut(signal) {
        lane.zip_mut_with(&weights, |x, &w| *x *= w);
    }
    out
}

/// Sample positions of a wavelength axis, in nm
pub(crate) fn wavelengths_nm(axis: &CalibratedAxis) -> Vec<f64> {
    let samples = axis.samples();
    match axis.unit {
        Unit::Micrometer => samples.into_iter().map(|wl| wl * 1000.0).collect(),
        _ => samples,
    }
}

fn source_wavelengths(
    axis: &CalibratedAxis,
    target: Unit,
    nm_factor: f64,
    um_factor: f64,
) -> Result<(Vec<f64>, f64), ConversionError> {
    let factor = match axis.unit {
        unit if unit == target => return Err(ConversionError::AlreadyInUnit { unit }),
        Unit::Micrometer => um_factor,
        Unit::Nanometer | Unit::Undefined => nm_factor,
        unit => return Err(ConversionError::UnsupportedUnit { unit, target }),
    };
    let wavelengths = wavelengths_nm(axis);
    if let Some(&first) = wavelengths.first() {
        if first <= 0.0 {
            return Err(ConversionError::NonPositiveWavelength(first));
        }
    }
    Ok((wavelengths, factor))
}

fn range_warning(wavelengths_nm: &[f64]) -> Option<ConversionWarning> {
    let min_nm = wavelengths_nm.iter().copied().fold(f64::INFINITY, f64::min);
    let max_nm = wavelengths_nm.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if n_air_in_range(min_nm) && n_air_in_range(max_nm) {
        None
    } else {
        Some(ConversionWarning::WavelengthOutOfRange { min_nm, max_nm })
    }
}

fn laser_mismatch(laser: f64, unit: Unit) -> ConversionError {
    ConversionError::LaserUnitMismatch { laser, unit }
}

fn signal_len(data: &ArrayViewD<'_, f64>) -> usize {
    data.shape().last().copied().unwrap_or(0)
}

fn check_length(expected: usize, found: usize) -> Result<(), ConversionError> {
    if expected == found {
        Ok(())
    } else {
        Err(ConversionError::LengthMismatch { expected, found })
    }
}
