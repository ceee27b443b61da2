//! # Navigation Cropping
//!
//! Removes pixels from the edges of the scanned region of line scans and
//! maps, e.g. to discard drift or charging artefacts at the border of a
//! cathodoluminescence map.
//!
//! Maps store their navigation dimensions as `(y, x)`: `left`/`right` act on
//! `x`, `top`/`bottom` on `y`.

mod error;


use std::ops::Range;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::spectrum::Spectrum;

pub use error::CropError;

/// Amount to crop from each edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropRange {
    /// Same amount on every side
    All(f64),
    /// `x` from left and right, `y` from top and bottom.
    /// For line scans: `(left, right)`.
    Xy(f64, f64),
    /// Each edge individually (maps only)
    Edges {
        /// Start of `x`
        left: f64,
        /// End of `y`
        bottom: f64,
        /// End of `x`
        right: f64,
        /// Start of `y`
        top: f64,
    },
}

impl Default for CropRange {
    fn default() -> Self {
        CropRange::All(0.0)
    }
}

/// How crop amounts are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropUnits {
    /// Whole pixels; fractional values are rounded down
    #[default]
    Pixels,
    /// Share of the axis length. If any value is above 1 all values are
    /// percent, otherwise fractions. Rounded down to whole pixels.
    Percent,
}

/// Crop amounts in pixels after resolving units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropEdges {
    /// Pixels removed from the start of `x`
    pub left: usize,
    /// Pixels removed from the end of `y`
    pub bottom: usize,
    /// Pixels removed from the end of `x`
    pub right: usize,
    /// Pixels removed from the start of `y`
    pub top: usize,
}

impl CropEdges {
    /// Convert `range` to pixels for a navigation shape in array order
    pub fn resolve(
        range: CropRange,
        units: CropUnits,
        nav_shape: &[usize],
    ) -> Result<Self, CropError> {
        let (x_len, y_len) = match nav_shape {
            [] => return Err(CropError::NoNavigation),
            [x] => (*x, 0),
            [y, x] => (*x, *y),
            other => return Err(CropError::TooManyNavigationDims(other.len())),
        };
        let line_scan = nav_shape.len() == 1;

        let (left, bottom, right, top) = match range {
            CropRange::All(v) => (v, v, v, v),
            // line scans take the pair as (left, right)
            CropRange::Xy(l, r) if line_scan => (l, 0.0, r, 0.0),
            CropRange::Xy(x, y) => (x, y, x, y),
            CropRange::Edges { .. } if line_scan => {
                return Err(CropError::InvalidRange(
                    "line scans accept a single value or a (left, right) pair".to_string(),
                ))
            }
            CropRange::Edges {
                left,
                bottom,
                right,
                top,
            } => (left, bottom, right, top),
        };

        let amounts = [left, bottom, right, top];
        if let Some(value) = amounts.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(CropError::InvalidRange(format!(
                "crop amounts must be non-negative, got {value}"
            )));
        }
        // one value above 1 makes every value a percentage
        let divisor = if amounts.iter().any(|v| *v > 1.0) { 100.0 } else { 1.0 };
        let pixels = |value: f64, len: usize| -> usize {
            let px = match units {
                CropUnits::Pixels => value,
                CropUnits::Percent => value / divisor * len as f64,
            };
            px.floor() as usize
        };

        Ok(Self {
            left: pixels(left, x_len),
            right: pixels(right, x_len),
            bottom: if line_scan { 0 } else { pixels(bottom, y_len) },
            top: if line_scan { 0 } else { pixels(top, y_len) },
        })
    }

    /// Index ranges to keep, one per navigation dimension in array order
    fn keep(&self, nav_shape: &[usize]) -> Result<Vec<Range<usize>>, CropError> {
        let along = |len: usize, start: usize, end: usize| -> Result<Range<usize>, CropError> {
            let requested = start.saturating_add(end);
            if requested >= len {
                return Err(CropError::CroppedTooFar {
                    requested,
                    available: len,
                });
            }
            Ok(start..len - end)
        };
        match nav_shape {
            [x] => Ok(vec![along(*x, self.left, self.right)?]),
            [y, x] => Ok(vec![
                along(*y, self.top, self.bottom)?,
                along(*x, self.left, self.right)?,
            ]),
            [] => Err(CropError::NoNavigation),
            other => Err(CropError::TooManyNavigationDims(other.len())),
        }
    }

    /// `[left, right]` for line scans, `[left, bottom, right, top]` for maps
    fn as_vec(&self, line_scan: bool) -> Vec<usize> {
        if line_scan {
            vec![self.left, self.right]
        } else {
            vec![self.left, self.bottom, self.right, self.top]
        }
    }
}

/// Crop the navigation edges of every spectrum in the list.
///
/// Percentages are resolved against the navigation shape of the first
/// spectrum. Spectra whose navigation shape differs from the first one are
/// cropped by the same number of pixels, with a warning.
pub fn crop_edges(
    spectra: &[Spectrum],
    range: CropRange,
    units: CropUnits,
) -> Result<Vec<Spectrum>, CropError> {
    let Some(first) = spectra.first() else {
        return Ok(Vec::new());
    };
    let nav_shape = first.navigation_shape();
    for (index, s) in spectra.iter().enumerate().skip(1) {
        let shape = s.navigation_shape();
        if shape.len() != nav_shape.len() {
            return Err(CropError::MixedNavigationDims {
                first: nav_shape.len(),
                found: shape.len(),
            });
        }
        if shape != nav_shape {
            warn!(
                "The navigation axes of the spectra at index 0 and {index} have different shapes \
                 ({nav_shape:?} and {shape:?}); cropping may remove different regions"
            );
        }
    }

    let edges = CropEdges::resolve(range, units, nav_shape)?;
    debug!("Cropping navigation edges by {edges:?}");
    spectra.iter().map(|s| crop_with(s, &edges)).collect()
}

impl Spectrum {
    /// Crop the navigation edges of this spectrum
    pub fn crop_edges(&self, range: CropRange, units: CropUnits) -> Result<Spectrum, CropError> {
        let edges = CropEdges::resolve(range, units, self.navigation_shape())?;
        crop_with(self, &edges)
    }
}

fn crop_with(s: &Spectrum, edges: &CropEdges) -> Result<Spectrum, CropError> {
    let keep = edges.keep(s.navigation_shape())?;
    let mut cropped = s.slice_navigation(&keep)?;

    let line_scan = keep.len() == 1;
    let current = edges.as_vec(line_scan);
    let total = match cropped.metadata.cropped_edges.take() {
        Some(previous) if previous.len() == current.len() => {
            previous.iter().zip(&current).map(|(a, b)| a + b).collect()
        }
        _ => current,
    };
    cropped.metadata.processing.record(
        "crop_edges",
        [
            ("left", edges.left),
            ("bottom", edges.bottom),
            ("right", edges.right),
            ("top", edges.top),
        ],
    );
    cropped.metadata.cropped_edges = Some(total);
    Ok(cropped)
}
