//! # Spectrum Joining
//!
//! Stitches an ordered list of spectra with overlapping signal axes into one
//! spectrum, e.g. several grating positions of the same measurement.
//!
//! The list is folded from left to right. Each pairwise join:
//!
//! 1. locates the center of the overlap and the closest sample to it in
//!    both spectra (`ind1`, `ind2`),
//! 2. optionally scales the later spectrum by the mean intensity ratio over
//!    `ind1 - r .. ind1 + r`, one factor per navigation position,
//! 3. joins at the center, or blends linearly across the window when
//!    `average` is set.
//!
//! Two uniform axes produce a uniform result on the grid of the first
//! spectrum, with the second one interpolated onto it. Otherwise the axes are
//! concatenated into an explicit axis.
//!
//! Noise variances are carried along when both spectra have one: the later
//! variance is scaled by the squared factor and blends use squared weights.
//!
//! ```rust,ignore
//! use lumispec::join::{join_spectra, JoinOptions};
//!
//! let joined = join_spectra(&[first, second], &JoinOptions::with_window(2))?;
//! ```

mod error;
mod nonuniform;
mod options;
mod scale;
mod uniform;


use log::{debug, info, warn};
use ndarray::{ArrayD, ArrayView1, Axis};

use crate::axis::CalibratedAxis;
use crate::interpolate::InterpolationKind;
use crate::spectrum::{map_rows, stack_rows, NoiseVariance, Spectrum};

pub use error::JoinError;
pub use options::{JoinOptions, DEFAULT_WINDOW};

use nonuniform::ExplicitSeam;
use scale::{scale_factors, Reference};
use uniform::UniformSeam;

/// Join an ordered list of spectra into one.
///
/// The result inherits metadata, signal-axis name and unit, and navigation
/// axes from the first spectrum. A single spectrum is returned unchanged.
pub fn join_spectra(spectra: &[Spectrum], options: &JoinOptions) -> Result<Spectrum, JoinError> {
    let (first, rest) = spectra.split_first().ok_or(JoinError::TooFewSpectra)?;
    for (offset, pair) in spectra.windows(2).enumerate() {
        check_pair(&pair[0], &pair[1], offset + 1)?;
    }

    let mut joined = first.clone();
    for (offset, next) in rest.iter().enumerate() {
        joined = join_at(&joined, next, options, offset + 1)?;
    }

    if !rest.is_empty() {
        record(&mut joined, spectra.len(), options);
        info!(
            "Joined {} spectra into {} samples ({} to {})",
            spectra.len(),
            joined.signal_axis().len(),
            joined.signal_axis().first(),
            joined.signal_axis().last()
        );
    }
    Ok(joined)
}

/// Join two spectra; `s2` must start before `s1` ends
pub fn join_pair(s1: &Spectrum, s2: &Spectrum, options: &JoinOptions) -> Result<Spectrum, JoinError> {
    check_pair(s1, s2, 1)?;
    let mut joined = join_at(s1, s2, options, 1)?;
    record(&mut joined, 2, options);
    Ok(joined)
}

/// How intensities and variances combine across the seam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Weighting {
    Intensity,
    /// Independent errors: weights and factors enter squared
    Variance,
}

impl Weighting {
    fn apply(self, weight: f64) -> f64 {
        match self {
            Weighting::Intensity => weight,
            Weighting::Variance => weight * weight,
        }
    }
}

#[derive(Debug, Clone)]
enum Seam {
    Uniform(UniformSeam),
    Explicit(ExplicitSeam),
}

impl Seam {
    fn axis(
        &self,
        template: &CalibratedAxis,
        x1: &[f64],
        x2: &[f64],
    ) -> Result<CalibratedAxis, JoinError> {
        match self {
            Seam::Uniform(seam) => seam.axis(template),
            Seam::Explicit(seam) => seam.axis(template, x1, x2),
        }
    }

    fn stitch(
        &self,
        x1: &[f64],
        row1: &[f64],
        x2: &[f64],
        row2: &[f64],
        kind: InterpolationKind,
        weighting: Weighting,
    ) -> Result<Vec<f64>, JoinError> {
        match self {
            Seam::Uniform(seam) => seam.stitch(row1, x2, row2, kind, weighting),
            Seam::Explicit(seam) => seam.stitch(x1, row1, x2, row2, kind, weighting),
        }
    }
}

/// Absolute slack for comparing computed positions against axis bounds
pub(crate) fn tolerance(samples: &[f64]) -> f64 {
    let span = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (last - first).abs(),
        _ => 0.0,
    };
    1e-9 * span.max(1.0)
}

fn check_pair(s1: &Spectrum, s2: &Spectrum, index: usize) -> Result<(), JoinError> {
    if s1.navigation_shape() != s2.navigation_shape() {
        return Err(JoinError::NavigationShapeMismatch {
            index,
            expected: s1.navigation_shape().to_vec(),
            found: s2.navigation_shape().to_vec(),
        });
    }
    let (max, min) = (s1.signal_axis().last(), s2.signal_axis().first());
    if max < min {
        return Err(JoinError::NoOverlap { index, max, min });
    }
    if s2.signal_axis().last() <= max {
        return Err(JoinError::NoExtension { index });
    }
    Ok(())
}

fn join_at(
    s1: &Spectrum,
    s2: &Spectrum,
    options: &JoinOptions,
    index: usize,
) -> Result<Spectrum, JoinError> {
    let r = options.r;
    if r == 0 {
        return Err(JoinError::EmptyWindow);
    }
    if options.average && r == 1 {
        return Err(JoinError::AveragingRequiresWindow);
    }
    check_pair(s1, s2, index)?;

    let (a1, a2) = (s1.signal_axis(), s2.signal_axis());
    let (x1, x2) = (a1.samples(), a2.samples());
    let (n1, n2) = (x1.len(), x2.len());
    let (max1, min2) = (a1.last(), a2.first());

    let center = (max1 + min2) / 2.0;
    let ind1 = a1.value_to_index(center)?;
    let mut ind2 = a2.value_to_index(center)?;
    let trailing = n1 - ind1 - 1;
    if trailing <= r {
        return Err(JoinError::WindowTooLarge {
            r,
            available: trailing,
        });
    }
    if ind1 < r {
        return Err(JoinError::WindowTooLarge {
            r,
            available: ind1,
        });
    }
    debug!("Spectrum {index}: overlap center {center}, ind1={ind1}, ind2={ind2}");

    let window = ind1 - r..ind1 + r;
    let positions = &x1[window.clone()];
    let aligned = ind2 >= r && ind2 + r <= n2 && x2[ind2 - r..ind2 + r] == *positions;
    if (options.average || (options.scale && !aligned)) && positions[0] < min2 - tolerance(&x2) {
        let available = x1[..ind1].iter().filter(|&&x| x >= min2).count();
        return Err(JoinError::WindowTooLarge { r, available });
    }

    let rows1 = s1.rows();
    let rows2 = s2.rows();
    let factors = if options.scale {
        let reference = if aligned {
            Reference::Aligned(ind2 - r..ind2 + r)
        } else {
            Reference::Interpolated {
                x2: &x2,
                positions,
                kind: options.kind,
            }
        };
        let factors = scale_factors(&rows1, &rows2, window, &reference)?;
        let mean = factors.iter().sum::<f64>() / factors.len().max(1) as f64;
        debug!(
            "Spectrum {index}: {} scale factor(s), mean {mean}",
            factors.len()
        );
        Some(factors)
    } else {
        None
    };

    // keep the concatenated axis strictly increasing
    while ind2 < n2 && x2[ind2] <= x1[ind1] {
        ind2 += 1;
    }
    if ind2 == n2 {
        return Err(JoinError::NoExtension { index });
    }

    let seam = match (a1.offset_scale(), a2.is_uniform()) {
        (Some((offset, scale)), true) => Seam::Uniform(UniformSeam::plan(
            offset,
            scale,
            ind1,
            x2[n2 - 1],
            r,
            options.average,
        )?),
        _ => Seam::Explicit(ExplicitSeam::plan(
            &x1,
            &x2,
            ind1,
            ind2,
            r,
            options.average,
        )?),
    };
    let axis = seam.axis(a1, &x1, &x2)?;

    let stitch = Stitch {
        seam: &seam,
        x1: &x1,
        x2: &x2,
        factors: factors.as_deref(),
        kind: options.kind,
    };
    let nav_shape = s1.navigation_shape();
    let data = stack_rows(nav_shape, stitch.rows(&rows1, &rows2, Weighting::Intensity)?)?;

    let variance = match (s1.variance(), s2.variance()) {
        (Some(v1), Some(v2)) => {
            let v1 = v1.broadcast_to(s1.shape());
            let v2 = v2.broadcast_to(s2.shape());
            let rows = stitch.rows(&signal_rows(&v1), &signal_rows(&v2), Weighting::Variance)?;
            Some(NoiseVariance::PerSample(stack_rows(nav_shape, rows)?))
        }
        (None, None) => None,
        _ => {
            warn!("Only one of the joined spectra carries a noise variance; it is dropped");
            None
        }
    };

    debug!(
        "Spectrum {index}: joined axis has {} samples ({})",
        axis.len(),
        if axis.is_uniform() { "uniform" } else { "explicit" }
    );
    Ok(Spectrum::from_parts_unchecked(
        data,
        axis,
        s1.navigation_axes().to_vec(),
        variance,
        s1.metadata.clone(),
    ))
}

/// Per-join state shared by the data and variance passes
struct Stitch<'a> {
    seam: &'a Seam,
    x1: &'a [f64],
    x2: &'a [f64],
    factors: Option<&'a [f64]>,
    kind: InterpolationKind,
}

impl Stitch<'_> {
    fn rows(
        &self,
        rows1: &[ArrayView1<'_, f64>],
        rows2: &[ArrayView1<'_, f64>],
        weighting: Weighting,
    ) -> Result<Vec<Vec<f64>>, JoinError> {
        map_rows(rows1, |position, row1| {
            let mut row2 = rows2[position].to_vec();
            if let Some(factors) = self.factors {
                let factor = weighting.apply(factors[position]);
                row2.iter_mut().for_each(|v| *v *= factor);
            }
            self.seam
                .stitch(self.x1, &row1.to_vec(), self.x2, &row2, self.kind, weighting)
        })
    }
}

fn signal_rows(values: &ArrayD<f64>) -> Vec<ArrayView1<'_, f64>> {
    let signal = Axis(values.ndim().saturating_sub(1));
    values.lanes(signal).into_iter().collect()
}

fn record(joined: &mut Spectrum, count: usize, options: &JoinOptions) {
    joined.metadata.processing.record(
        "join_spectra",
        [
            ("spectra", count.to_string()),
            ("r", options.r.to_string()),
            ("scale", options.scale.to_string()),
            ("average", options.average.to_string()),
            ("kind", options.kind.to_string()),
        ],
    );
}
