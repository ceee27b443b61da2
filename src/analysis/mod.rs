//! # Spectrum Analysis
//!
//! Small numerical helpers used around the conversion and joining steps:
//! centre-of-mass peak positions, trapezoidal integration and the
//! pixel-to-wavelength calibration of a grating spectrometer.

mod centroid;
mod error;
mod grating;

#[cfg(test)]
mod tests;

pub use centroid::{centroid, integrate_trapezoid};
pub use error::AnalysisError;
pub use grating::{solve_grating_equation, GratingParameters};
