//! One-dimensional interpolation over sampled data.
//!
//! Used by the spectrum joiner to evaluate one spectrum at the sample
//! positions of another. Evaluation outside the sampled interval is an error
//! rather than an extrapolation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Interpolation scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationKind {
    /// Piecewise linear
    Linear,
    /// First-order spline; identical to `Linear` for sorted samples
    #[default]
    Slinear,
    /// Closest sample, ties to the lower one
    Nearest,
    /// Last sample at or below the position
    Previous,
    /// First sample at or above the position
    Next,
}

impl InterpolationKind {
    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationKind::Linear => "linear",
            InterpolationKind::Slinear => "slinear",
            InterpolationKind::Nearest => "nearest",
            InterpolationKind::Previous => "previous",
            InterpolationKind::Next => "next",
        }
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationKind {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(InterpolationKind::Linear),
            "slinear" => Ok(InterpolationKind::Slinear),
            "nearest" => Ok(InterpolationKind::Nearest),
            "previous" => Ok(InterpolationKind::Previous),
            "next" => Ok(InterpolationKind::Next),
            other => Err(InterpolationError::UnknownKind(other.to_string())),
        }
    }
}

/// Interpolation failures
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    /// `x` and `y` differ in length
    #[error("x and y must have the same length ({x} != {y})")]
    LengthMismatch {
        /// Number of positions
        x: usize,
        /// Number of values
        y: usize,
    },

    /// No samples to interpolate
    #[error("At least one sample is required for interpolation")]
    Empty,

    /// Evaluation position outside the sampled interval
    #[error("Value {value} is outside the interpolation range [{min}, {max}]")]
    OutOfBounds {
        /// Requested position
        value: f64,
        /// First sample position
        min: f64,
        /// Last sample position
        max: f64,
    },

    /// Unrecognised interpolation name
    #[error("Unknown interpolation kind: {0}")]
    UnknownKind(String),
}

/// Interpolant over ascending sample positions `x` with values `y`
#[derive(Debug, Clone, Copy)]
pub struct Interpolator<'a> {
    x: &'a [f64],
    y: &'a [f64],
    kind: InterpolationKind,
}

impl<'a> Interpolator<'a> {
    /// Build an interpolant; `x` must be strictly increasing
    pub fn new(
        x: &'a [f64],
        y: &'a [f64],
        kind: InterpolationKind,
    ) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.is_empty() {
            return Err(InterpolationError::Empty);
        }
        Ok(Self { x, y, kind })
    }

    /// Sampled interval
    pub fn bounds(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Value at `at`
    pub fn eval(&self, at: f64) -> Result<f64, InterpolationError> {
        let (min, max) = self.bounds();
        // positions computed as offset + i * scale may overshoot by rounding
        let tolerance = 1e-9 * (max - min).abs().max(1.0);
        if !(at >= min - tolerance && at <= max + tolerance) {
            return Err(InterpolationError::OutOfBounds {
                value: at,
                min,
                max,
            });
        }
        let at = at.clamp(min, max);

        let upper = self.x.partition_point(|&v| v < at);
        if upper == 0 {
            return Ok(self.y[0]);
        }
        if upper == self.x.len() {
            return Ok(self.y[upper - 1]);
        }
        let lower = upper - 1;
        let (x0, x1) = (self.x[lower], self.x[upper]);
        let (y0, y1) = (self.y[lower], self.y[upper]);
        if x1 == at {
            return Ok(y1);
        }

        Ok(match self.kind {
            InterpolationKind::Linear | InterpolationKind::Slinear => {
                y0 + (at - x0) / (x1 - x0) * (y1 - y0)
            }
            InterpolationKind::Nearest => {
                if at - x0 <= x1 - at {
                    y0
                } else {
                    y1
                }
            }
            InterpolationKind::Previous => y0,
            InterpolationKind::Next => y1,
        })
    }

    /// Values at every position in `at`
    pub fn eval_many(&self, at: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        at.iter().map(|&p| self.eval(p)).collect()
    }
}

/// Convenience wrapper: interpolate `(x, y)` at `at`
pub fn interpolate(
    x: &[f64],
    y: &[f64],
    at: &[f64],
    kind: InterpolationKind,
) -> Result<Vec<f64>, InterpolationError> {
    Interpolator::new(x, y, kind)?.eval_many(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const X: [f64; 4] = [0.0, 1.0, 2.0, 4.0];
    const Y: [f64; 4] = [0.0, 10.0, 20.0, 0.0];

    #[test]
    fn test_linear() {
        let f = Interpolator::new(&X, &Y, InterpolationKind::Linear).unwrap();
        assert_relative_eq!(f.eval(0.5).unwrap(), 5.0);
        assert_relative_eq!(f.eval(3.0).unwrap(), 10.0);
        assert_eq!(f.eval(2.0).unwrap(), 20.0);
        assert_eq!(f.eval(0.0).unwrap(), 0.0);
        assert_eq!(f.eval(4.0).unwrap(), 0.0);
    }

    #[test]
    fn test_step_kinds() {
        let nearest = Interpolator::new(&X, &Y, InterpolationKind::Nearest).unwrap();
        assert_eq!(nearest.eval(0.5).unwrap(), 0.0);
        assert_eq!(nearest.eval(0.6).unwrap(), 10.0);

        let previous = Interpolator::new(&X, &Y, InterpolationKind::Previous).unwrap();
        assert_eq!(previous.eval(3.9).unwrap(), 20.0);
        assert_eq!(previous.eval(1.0).unwrap(), 10.0);

        let next = Interpolator::new(&X, &Y, InterpolationKind::Next).unwrap();
        assert_eq!(next.eval(2.1).unwrap(), 0.0);
        assert_eq!(next.eval(1.0).unwrap(), 10.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let f = Interpolator::new(&X, &Y, InterpolationKind::Slinear).unwrap();
        assert!(matches!(
            f.eval(-0.1),
            Err(InterpolationError::OutOfBounds { .. })
        ));
        assert!(f.eval(4.0 + 1e-12).is_ok());
        assert!(f.eval(f64::NAN).is_err());
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            Interpolator::new(&X, &Y[..3], InterpolationKind::Linear),
            Err(InterpolationError::LengthMismatch { x: 4, y: 3 })
        ));
        assert!(matches!(
            Interpolator::new(&[], &[], InterpolationKind::Linear),
            Err(InterpolationError::Empty)
        ));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            "slinear".parse::<InterpolationKind>().unwrap(),
            InterpolationKind::Slinear
        );
        assert_eq!(
            " Nearest ".parse::<InterpolationKind>().unwrap(),
            InterpolationKind::Nearest
        );
        assert!("cubic".parse::<InterpolationKind>().is_err());
        assert_eq!(InterpolationKind::default().to_string(), "slinear");
    }

    #[test]
    fn test_interpolate_many() {
        let values = interpolate(&X, &Y, &[0.25, 1.5], InterpolationKind::Linear).unwrap();
        assert_relative_eq!(values[0], 2.5);
        assert_relative_eq!(values[1], 15.0);
    }
}
