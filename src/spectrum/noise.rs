use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

/// Per-sample noise variance attached to a spectrum
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseVariance {
    /// One variance value shared by every sample
    Constant(f64),
    /// Variance array with the same shape as the data
    PerSample(ArrayD<f64>),
}

impl NoiseVariance {
    /// Expand to a full array of the given shape
    pub fn broadcast_to(&self, shape: &[usize]) -> ArrayD<f64> {
        match self {
            NoiseVariance::Constant(value) => ArrayD::from_elem(shape.to_vec(), *value),
            NoiseVariance::PerSample(values) => values.clone(),
        }
    }

    /// Whether the variance is a single scalar
    pub fn is_constant(&self) -> bool {
        matches!(self, NoiseVariance::Constant(_))
    }
}

/// Linear noise model `variance = (gain_factor * data + gain_offset) * correlation_factor`
///
/// The parameters are calibrated against the unit of the signal axis, so any
/// Jacobian rescaling of the data invalidates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceLinearModel {
    /// Detector gain
    pub gain_factor: f64,
    /// Read-noise offset
    pub gain_offset: f64,
    /// Correction for correlated noise between samples
    pub correlation_factor: f64,
}

impl Default for VarianceLinearModel {
    fn default() -> Self {
        Self {
            gain_factor: 1.0,
            gain_offset: 0.0,
            correlation_factor: 1.0,
        }
    }
}

impl VarianceLinearModel {
    /// True if all parameters have their identity values
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Estimated variance for a single intensity value, never negative
    pub fn variance_of(&self, intensity: f64) -> f64 {
        ((self.gain_factor * intensity + self.gain_offset) * self.correlation_factor).max(0.0)
    }
}
