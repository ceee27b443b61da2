use ndarray::{ArrayD, IxDyn};

use super::AnalysisError;
use crate::spectrum::{map_rows, Spectrum};

/// Centre of mass of `intensities`, expressed on `axis`.
///
/// The centre is first found as a fractional array index and then mapped
/// to an axis value by linear interpolation between the two neighbouring
/// samples. An index outside the axis (possible with negative intensities)
/// is clamped to the nearest end.
pub fn centroid(intensities: &[f64], axis: &[f64]) -> Result<f64, AnalysisError> {
    if intensities.len() != axis.len() {
        return Err(AnalysisError::LengthMismatch {
            data: intensities.len(),
            axis: axis.len(),
        });
    }
    if axis.is_empty() {
        return Err(AnalysisError::Empty);
    }

    let total: f64 = intensities.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return Err(AnalysisError::UndefinedCentroid(total));
    }
    let weighted: f64 = intensities
        .iter()
        .enumerate()
        .map(|(i, value)| i as f64 * value)
        .sum();
    let index = (weighted / total).clamp(0.0, (axis.len() - 1) as f64);

    let lower = index.floor() as usize;
    let fraction = index - lower as f64;
    if fraction == 0.0 {
        return Ok(axis[lower]);
    }
    Ok(axis[lower] + fraction * (axis[lower + 1] - axis[lower]))
}

/// Trapezoidal integral of `values` over `samples`
pub fn integrate_trapezoid(samples: &[f64], values: &[f64]) -> Result<f64, AnalysisError> {
    if samples.len() != values.len() {
        return Err(AnalysisError::LengthMismatch {
            data: values.len(),
            axis: samples.len(),
        });
    }
    Ok(samples
        .windows(2)
        .zip(values.windows(2))
        .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
        .sum())
}

impl Spectrum {
    /// Centroid of every spectrum, shaped like the navigation dimensions
    pub fn centroid(&self) -> Result<ArrayD<f64>, AnalysisError> {
        let axis = self.signal_axis().samples();
        let values = map_rows(&self.rows(), |_, row| centroid(&row.to_vec(), &axis))?;
        // shape always matches: one value per navigation position
        ArrayD::from_shape_vec(IxDyn(self.navigation_shape()), values).map_err(|_| {
            AnalysisError::LengthMismatch {
                data: self.navigation_size(),
                axis: axis.len(),
            }
        })
    }

    /// Integrated intensity of every spectrum over the signal axis
    pub fn integrate(&self) -> Result<ArrayD<f64>, AnalysisError> {
        let axis = self.signal_axis().samples();
        let values = map_rows(&self.rows(), |_, row| integrate_trapezoid(&axis, &row.to_vec()))?;
        ArrayD::from_shape_vec(IxDyn(self.navigation_shape()), values).map_err(|_| {
            AnalysisError::LengthMismatch {
                data: self.navigation_size(),
                axis: axis.len(),
            }
        })
    }
}
