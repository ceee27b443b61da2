//! # lumispec - Luminescence Spectroscopy Processing
//!
//! `lumispec` provides the axis transformations and stitching operations
//! needed to analyse luminescence spectra (cathodoluminescence,
//! photoluminescence, electroluminescence, Raman) recorded as single spectra,
//! line scans or maps.
//!
//! ## Key Features
//!
//! - **Jacobian-correct axis conversion**: wavelength (nm or µm) to photon
//!   energy (eV, with the refractive index of air), absolute wavenumber or
//!   Raman shift (cm⁻¹). Intensities and noise variances are rescaled so the
//!   integrated signal is conserved.
//!
//! - **Spectrum joining**: stitches spectra recorded at several grating
//!   positions into one, optionally scaling each segment to its predecessor
//!   and blending linearly across the overlap.
//!
//! - **Navigation cropping, centroids, grating calibration and delimited
//!   text export** for the surrounding workflow.
//!
//! ## Quick Start
//!
//! ```rust
//! use lumispec::prelude::*;
//!
//! let nm = |offset| CalibratedAxis::uniform(offset, 1.0, 100).map(|a| a.with_unit(Unit::Nanometer));
//! let first = Spectrum::from_vec(vec![1.0; 100], nm(400.0)?)?;
//! let second = Spectrum::from_vec(vec![2.0; 100], nm(450.0)?)?;
//!
//! // second segment is scaled down to match the first
//! let joined = join_spectra(&[first, second], &JoinOptions::with_window(10))?;
//! assert_eq!(joined.signal_axis().last(), 549.0);
//!
//! let energy = joined.to_energy(&ConversionOptions::default())?.spectrum;
//! assert_eq!(energy.signal_axis().unit, Unit::ElectronVolt);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`axis`]: calibrated signal and navigation axes (uniform or explicit)
//! - [`spectrum`]: N-dimensional data with axes, noise variance and metadata
//! - [`conversion`]: wavelength → energy / wavenumber with Jacobian
//! - [`join`]: stitching of overlapping spectra
//! - [`interpolate`]: 1-D interpolation used by the joiner
//! - [`crop`]: removal of navigation edges
//! - [`analysis`]: centroids, integration, grating equation
//! - [`export`]: delimited text output
//! - [`config`]: TOML option files and logging setup
//!
//! Enable the `parallel` feature to process navigation rows with rayon.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
// Allow some patterns common in scientific code
#![allow(clippy::too_many_arguments)]

pub mod analysis;
pub mod axis;
pub mod config;
pub mod conversion;
pub mod crop;
pub mod export;
pub mod interpolate;
pub mod join;
pub mod spectrum;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::analysis::{
        centroid, integrate_trapezoid, solve_grating_equation, AnalysisError, GratingParameters,
    };
    pub use crate::axis::{AxisError, AxisKind, CalibratedAxis, Unit};
    pub use crate::config::{init_logging, ProcessingConfig};
    pub use crate::conversion::{
        ConversionError, ConversionOptions, ConversionWarning, Converted,
    };
    pub use crate::crop::{crop_edges, CropError, CropRange, CropUnits};
    pub use crate::export::{
        to_table, write_delimited, write_delimited_file, ExportError, ExportOptions,
    };
    pub use crate::interpolate::{InterpolationError, InterpolationKind};
    pub use crate::join::{join_pair, join_spectra, JoinError, JoinOptions};
    pub use crate::spectrum::{
        NoiseVariance, SignalType, Spectrum, SpectrumError, SpectrumMetadata,
        VarianceLinearModel,
    };
}
