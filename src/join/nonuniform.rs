//! Joining explicit (non-uniform) axes.
//!
//! The axes are concatenated as they are, `x1[..=ind1]` followed by
//! `x2[ind2..]`, so every intensity keeps the position it was measured at
//! and no resampling is needed for a hard join. With averaging, each side
//! of the seam is blended with the other spectrum interpolated onto its own
//! samples: S1 ramps from 0 to 50 % of S2 over `[ind1 - r, ind1]`, S2 ramps
//! from 50 % to 100 % over `[ind2, ind2 + r)`.

use super::{tolerance, JoinError, Weighting};
use crate::axis::CalibratedAxis;
use crate::interpolate::{InterpolationKind, Interpolator};

#[derive(Debug, Clone)]
pub(super) struct ExplicitSeam {
    ind1: usize,
    ind2: usize,
    r: usize,
    average: bool,
    length2: usize,
}

impl ExplicitSeam {
    pub(super) fn plan(
        x1: &[f64],
        x2: &[f64],
        ind1: usize,
        ind2: usize,
        r: usize,
        average: bool,
    ) -> Result<Self, JoinError> {
        let length2 = r.min(x2.len() - ind2);
        if average {
            let max1 = x1[x1.len() - 1];
            let limit = max1 + tolerance(x1);
            if x2[ind2 + length2 - 1] > limit {
                let available = x2[ind2..].iter().take_while(|&&x| x <= limit).count();
                return Err(JoinError::WindowTooLarge { r, available });
            }
        }
        Ok(Self {
            ind1,
            ind2,
            r,
            average,
            length2,
        })
    }

    pub(super) fn axis(
        &self,
        template: &CalibratedAxis,
        x1: &[f64],
        x2: &[f64],
    ) -> Result<CalibratedAxis, JoinError> {
        let samples = x1[..=self.ind1]
            .iter()
            .chain(&x2[self.ind2..])
            .copied()
            .collect();
        Ok(CalibratedAxis::from_samples(samples)?
            .with_name(template.name.clone())
            .with_unit(template.unit))
    }

    pub(super) fn stitch(
        &self,
        x1: &[f64],
        row1: &[f64],
        x2: &[f64],
        row2: &[f64],
        kind: InterpolationKind,
        weighting: Weighting,
    ) -> Result<Vec<f64>, JoinError> {
        let (ind1, ind2, r) = (self.ind1, self.ind2, self.r);
        let mut out = Vec::with_capacity(ind1 + 1 + row2.len() - ind2);

        if !self.average {
            out.extend_from_slice(&row1[..=ind1]);
            out.extend_from_slice(&row2[ind2..]);
            return Ok(out);
        }

        let f1 = Interpolator::new(x1, row1, kind)?;
        let f2 = Interpolator::new(x2, row2, kind)?;
        let start = ind1 - r;
        let grad1 = 0.5 / r as f64;
        out.extend_from_slice(&row1[..start]);
        for v in 0..=r {
            let i = start + v;
            let w = grad1 * v as f64;
            out.push(weighting.apply(1.0 - w) * row1[i] + weighting.apply(w) * f2.eval(x1[i])?);
        }

        let length2 = self.length2;
        for v in 0..length2 {
            let j = ind2 + v;
            let w = if length2 == 1 {
                0.5
            } else {
                0.5 + 0.5 * v as f64 / (length2 - 1) as f64
            };
            out.push(weighting.apply(1.0 - w) * f1.eval(x2[j])? + weighting.apply(w) * row2[j]);
        }
        out.extend_from_slice(&row2[ind2 + length2..]);
        Ok(out)
    }
}
