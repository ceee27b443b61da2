//! Scalar unit conversions between wavelength, energy and wavenumber.

/// Planck constant (J s)
pub const PLANCK: f64 = 6.626_070_15e-34;
/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// `h·c/e` in eV·m
pub(crate) const HC_OVER_E: f64 = PLANCK * SPEED_OF_LIGHT / ELEMENTARY_CHARGE;

/// Lower bound (nm) of the dispersion formula for air
pub const N_AIR_MIN_NM: f64 = 185.0;
/// Upper bound (nm) of the dispersion formula for air
pub const N_AIR_MAX_NM: f64 = 1700.0;

/// Refractive index of air at a wavelength given in nm.
///
/// Uses the dispersion formula of E.R. Peck and K. Reeder, J. Opt. Soc. Am.
/// 62, 958 (1972), valid from 185 to 1700 nm. Outside that interval the index
/// is held at its boundary value.
pub fn n_air(wavelength_nm: f64) -> f64 {
    let wl_um = wavelength_nm.clamp(N_AIR_MIN_NM, N_AIR_MAX_NM) / 1000.0;
    let inv_sq = 1.0 / (wl_um * wl_um);
    1.0 + 806_051e-10 + 2_480_990e-8 / (132_274e-3 - inv_sq) + 174_557e-9 / (3_932_957e-5 - inv_sq)
}

/// Whether the dispersion formula is exact at this wavelength (nm)
pub fn n_air_in_range(wavelength_nm: f64) -> bool {
    (N_AIR_MIN_NM..=N_AIR_MAX_NM).contains(&wavelength_nm)
}

/// Wavelength in air (nm) to photon energy (eV)
pub fn nm_to_ev(wavelength_nm: f64) -> f64 {
    1e9 * HC_OVER_E / (n_air(wavelength_nm) * wavelength_nm)
}

/// Photon energy (eV) to wavelength in air (nm)
pub fn ev_to_nm(energy_ev: f64) -> f64 {
    // approximate wavelength, only used to pick the refractive index
    let approx_nm = 1239.5 / energy_ev;
    1e9 * HC_OVER_E / (n_air(approx_nm) * energy_ev)
}

/// Wavelength (nm) to wavenumber (cm⁻¹)
pub fn nm_to_invcm(wavelength_nm: f64) -> f64 {
    1e7 / wavelength_nm
}

/// Wavenumber (cm⁻¹) to wavelength (nm)
pub fn invcm_to_nm(wavenumber: f64) -> f64 {
    1e7 / wavenumber
}
