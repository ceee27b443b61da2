//! Joining onto the uniform grid of the first spectrum.
//!
//! The joined axis keeps the offset and scale of S1 and is extended far
//! enough to cover S2. Everything past the seam is S2 interpolated onto that
//! grid.

use super::{JoinError, Weighting};
use crate::axis::CalibratedAxis;
use crate::interpolate::{InterpolationKind, Interpolator};

#[derive(Debug, Clone)]
pub(super) struct UniformSeam {
    offset: f64,
    scale: f64,
    ind1: usize,
    r: usize,
    average: bool,
    positions: Vec<f64>,
}

impl UniformSeam {
    /// Size the joined grid so its last sample does not pass `last2`
    pub(super) fn plan(
        offset: f64,
        scale: f64,
        ind1: usize,
        last2: f64,
        r: usize,
        average: bool,
    ) -> Result<Self, JoinError> {
        let seam = offset + ind1 as f64 * scale;
        let extension = ((last2 - seam) / scale).floor().max(0.0) as usize;
        let size = ind1 + 1 + extension;
        if average && ind1 + r > size {
            return Err(JoinError::WindowTooLarge {
                r,
                available: size - ind1,
            });
        }
        let positions = (0..size).map(|i| offset + i as f64 * scale).collect();
        Ok(Self {
            offset,
            scale,
            ind1,
            r,
            average,
            positions,
        })
    }

    pub(super) fn axis(&self, template: &CalibratedAxis) -> Result<CalibratedAxis, JoinError> {
        Ok(
            CalibratedAxis::uniform(self.offset, self.scale, self.positions.len())?
                .with_name(template.name.clone())
                .with_unit(template.unit),
        )
    }

    pub(super) fn stitch(
        &self,
        row1: &[f64],
        x2: &[f64],
        row2: &[f64],
        kind: InterpolationKind,
        weighting: Weighting,
    ) -> Result<Vec<f64>, JoinError> {
        let f2 = Interpolator::new(x2, row2, kind)?;
        let (ind1, r) = (self.ind1, self.r);
        let mut out = Vec::with_capacity(self.positions.len());

        if self.average {
            // ramp from all S1 at ind1 - r to all S2 at ind1 + r - 1
            let start = ind1 - r;
            let length = 2 * r;
            let grad = 1.0 / (length - 1) as f64;
            out.extend_from_slice(&row1[..start]);
            for v in 0..length {
                let i = start + v;
                let w = grad * v as f64;
                out.push(
                    weighting.apply(1.0 - w) * row1[i]
                        + weighting.apply(w) * f2.eval(self.positions[i])?,
                );
            }
            out.extend(f2.eval_many(&self.positions[ind1 + r..])?);
        } else {
            out.extend_from_slice(&row1[..=ind1]);
            out.extend(f2.eval_many(&self.positions[ind1 + 1..])?);
        }
        Ok(out)
    }
}
