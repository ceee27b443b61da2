//! # Calibrated Axes
//!
//! A [`CalibratedAxis`] is an ordered list of sample positions with a physical
//! unit. Two representations are supported:
//!
//! - **Uniform**: `samples[i] = offset + i * scale`, stored as three numbers.
//! - **Explicit**: an arbitrary, strictly increasing list of samples (the
//!   result of any non-linear calibration such as wavelength → energy).
//!
//! Both forms behave identically for every algorithm that reads samples;
//! the compact form only exists so that uniform grids can be joined without
//! materialising and re-interpolating their positions.

mod error;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::AxisError;

/// Physical unit of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    /// Wavelength in nanometres
    Nanometer,
    /// Wavelength in micrometres
    Micrometer,
    /// Photon energy in electronvolts
    ElectronVolt,
    /// Wavenumber in inverse centimetres
    Wavenumber,
    /// Detector pixels
    Pixel,
    /// No unit set
    #[default]
    Undefined,
}

impl Unit {
    /// True for wavelength units that can be converted to energy or wavenumber
    pub fn is_wavelength(&self) -> bool {
        matches!(self, Unit::Nanometer | Unit::Micrometer)
    }

    /// Canonical label used for display and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Nanometer => "nm",
            Unit::Micrometer => "µm",
            Unit::ElectronVolt => "eV",
            Unit::Wavenumber => "cm⁻¹",
            Unit::Pixel => "px",
            Unit::Undefined => "<undefined>",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nm" => Ok(Unit::Nanometer),
            "µm" | "μm" | "um" => Ok(Unit::Micrometer),
            "eV" => Ok(Unit::ElectronVolt),
            "cm⁻¹" | "cm-1" | "cm$^{-1}$" | "1/cm" => Ok(Unit::Wavenumber),
            "px" | "pixel" | "pixels" => Ok(Unit::Pixel),
            "" | "<undefined>" => Ok(Unit::Undefined),
            other => Err(AxisError::UnknownUnit(other.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = AxisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

/// Storage form of an axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisKind {
    /// Arithmetic progression `offset + i * scale` for `i < size`
    Uniform {
        /// Position of the first sample
        offset: f64,
        /// Spacing between samples (positive)
        scale: f64,
        /// Number of samples
        size: usize,
    },
    /// Arbitrary strictly increasing samples
    Explicit {
        /// Sample positions
        samples: Vec<f64>,
    },
}

/// An ordered, strictly increasing set of sample positions with a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxis")]
pub struct CalibratedAxis {
    /// Human-readable axis name (e.g. "Wavelength", "Energy")
    pub name: String,
    /// Physical unit
    pub unit: Unit,
    kind: AxisKind,
}

/// Deserialized form, validated before it becomes a [`CalibratedAxis`]
#[derive(Deserialize)]
struct RawAxis {
    #[serde(default)]
    name: String,
    #[serde(default)]
    unit: Unit,
    kind: AxisKind,
}

impl TryFrom<RawAxis> for CalibratedAxis {
    type Error = AxisError;

    fn try_from(raw: RawAxis) -> Result<Self, Self::Error> {
        let axis = match raw.kind {
            AxisKind::Uniform {
                offset,
                scale,
                size,
            } => Self::uniform(offset, scale, size)?,
            AxisKind::Explicit { samples } => Self::from_samples(samples)?,
        };
        Ok(axis.with_name(raw.name).with_unit(raw.unit))
    }
}

impl CalibratedAxis {
    /// Create a uniform axis `offset + i * scale`
    pub fn uniform(offset: f64, scale: f64, size: usize) -> Result<Self, AxisError> {
        if size == 0 {
            return Err(AxisError::Empty);
        }
        if !offset.is_finite() {
            return Err(AxisError::NonFinite { index: 0 });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(AxisError::InvalidScale(scale));
        }
        Ok(Self {
            name: String::new(),
            unit: Unit::Undefined,
            kind: AxisKind::Uniform {
                offset,
                scale,
                size,
            },
        })
    }

    /// Create an explicit axis from sample positions
    pub fn from_samples(samples: Vec<f64>) -> Result<Self, AxisError> {
        validate_samples(&samples)?;
        Ok(Self {
            name: String::new(),
            unit: Unit::Undefined,
            kind: AxisKind::Explicit { samples },
        })
    }

    /// Default navigation axis: pixel indices `0..size`
    pub fn pixels(size: usize) -> Result<Self, AxisError> {
        Self::uniform(0.0, 1.0, size)
    }

    /// Set the axis name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the axis unit
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Storage form of the axis
    pub fn kind(&self) -> &AxisKind {
        &self.kind
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        match &self.kind {
            AxisKind::Uniform { size, .. } => *size,
            AxisKind::Explicit { samples } => samples.len(),
        }
    }

    /// Axes are never empty, kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the axis is stored in the compact uniform form
    pub fn is_uniform(&self) -> bool {
        matches!(self.kind, AxisKind::Uniform { .. })
    }

    /// Offset and scale of a uniform axis
    pub fn offset_scale(&self) -> Option<(f64, f64)> {
        match self.kind {
            AxisKind::Uniform { offset, scale, .. } => Some((offset, scale)),
            AxisKind::Explicit { .. } => None,
        }
    }

    /// Sample position at `index` (no bounds check for uniform axes)
    pub fn value(&self, index: usize) -> f64 {
        match &self.kind {
            AxisKind::Uniform { offset, scale, .. } => offset + index as f64 * scale,
            AxisKind::Explicit { samples } => samples[index],
        }
    }

    /// First (lowest) sample
    pub fn first(&self) -> f64 {
        self.value(0)
    }

    /// Last (highest) sample
    pub fn last(&self) -> f64 {
        self.value(self.len() - 1)
    }

    /// Materialize all sample positions
    pub fn samples(&self) -> Vec<f64> {
        match &self.kind {
            AxisKind::Uniform {
                offset,
                scale,
                size,
            } => (0..*size).map(|i| offset + i as f64 * scale).collect(),
            AxisKind::Explicit { samples } => samples.clone(),
        }
    }

    /// Convert to the explicit representation, keeping name and unit
    pub fn to_explicit(&self) -> Self {
        Self {
            name: self.name.clone(),
            unit: self.unit,
            kind: AxisKind::Explicit {
                samples: self.samples(),
            },
        }
    }

    /// Index of the sample closest to `value`.
    ///
    /// Ties resolve to the lower index. Values outside `[first, last]` are
    /// rejected.
    pub fn value_to_index(&self, value: f64) -> Result<usize, AxisError> {
        let (min, max) = (self.first(), self.last());
        let tolerance = 1e-9 * (max - min).abs().max(1.0);
        if !value.is_finite() || value < min - tolerance || value > max + tolerance {
            return Err(AxisError::ValueOutOfRange { value, min, max });
        }

        let last_index = self.len() - 1;
        match &self.kind {
            AxisKind::Uniform { offset, scale, .. } => {
                let position = (value - offset) / scale;
                let index = (position - 0.5).ceil().max(0.0) as usize;
                Ok(index.min(last_index))
            }
            AxisKind::Explicit { samples } => {
                let upper = samples.partition_point(|&s| s < value);
                if upper == 0 {
                    return Ok(0);
                }
                if upper > last_index {
                    return Ok(last_index);
                }
                let below = value - samples[upper - 1];
                let above = samples[upper] - value;
                Ok(if above < below { upper } else { upper - 1 })
            }
        }
    }

    /// Sub-axis covering `range`, preserving the storage form
    pub fn slice(&self, range: Range<usize>) -> Result<Self, AxisError> {
        let size = self.len();
        if range.start >= range.end || range.end > size {
            return Err(AxisError::InvalidRange {
                start: range.start,
                end: range.end,
                size,
            });
        }
        let kind = match &self.kind {
            AxisKind::Uniform { offset, scale, .. } => AxisKind::Uniform {
                offset: offset + range.start as f64 * scale,
                scale: *scale,
                size: range.len(),
            },
            AxisKind::Explicit { samples } => AxisKind::Explicit {
                samples: samples[range].to_vec(),
            },
        };
        Ok(Self {
            name: self.name.clone(),
            unit: self.unit,
            kind,
        })
    }
}

fn validate_samples(samples: &[f64]) -> Result<(), AxisError> {
    if samples.is_empty() {
        return Err(AxisError::Empty);
    }
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(AxisError::NonFinite { index });
    }
    if let Some(index) = samples.windows(2).position(|w| w[1] <= w[0]) {
        return Err(AxisError::NotIncreasing { index: index + 1 });
    }
    Ok(())
}
