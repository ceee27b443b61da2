//! Relative intensity factor between two spectra over the overlap window.

use std::ops::Range;

use ndarray::ArrayView1;

use super::JoinError;
use crate::interpolate::{InterpolationKind, Interpolator};
use crate::spectrum::map_rows;

/// Where the second spectrum's reference values come from
#[derive(Debug, Clone)]
pub(super) enum Reference<'a> {
    /// Both axes share the window positions; read S2 directly
    Aligned(Range<usize>),
    /// Interpolate S2 at the given S1 positions
    Interpolated {
        x2: &'a [f64],
        positions: &'a [f64],
        kind: InterpolationKind,
    },
}

/// Per-row factor `mean(S1 / S2)` over `window` of S1.
///
/// Samples where S2 is exactly zero, and ratios that are not finite, are
/// left out of the mean. A row without any usable sample fails with
/// [`JoinError::UndefinedScale`]; a negative factor with
/// [`JoinError::NegativeScale`].
pub(super) fn scale_factors(
    rows1: &[ArrayView1<'_, f64>],
    rows2: &[ArrayView1<'_, f64>],
    window: Range<usize>,
    reference: &Reference<'_>,
) -> Result<Vec<f64>, JoinError> {
    let factors = map_rows(rows1, |position, row1| {
        let row2 = rows2[position].to_vec();
        let denominator = match reference {
            Reference::Aligned(range) => row2[range.clone()].to_vec(),
            Reference::Interpolated { x2, positions, kind } => {
                Interpolator::new(x2, &row2, *kind)?.eval_many(positions)?
            }
        };
        let numerator = row1.slice(ndarray::s![window.clone()]).to_vec();
        mean_ratio(&numerator, &denominator).ok_or(JoinError::UndefinedScale { position })
    })?;

    if let Some((position, &factor)) = factors.iter().enumerate().find(|(_, f)| **f < 0.0) {
        return Err(JoinError::NegativeScale { position, factor });
    }
    Ok(factors)
}

/// Mean of `numerator / denominator`, skipping zero denominators and
/// non-finite ratios
pub(super) fn mean_ratio(numerator: &[f64], denominator: &[f64]) -> Option<f64> {
    let (sum, count) = numerator
        .iter()
        .zip(denominator)
        .filter(|(_, d)| **d != 0.0)
        .map(|(n, d)| n / d)
        .filter(|q| q.is_finite())
        .fold((0.0, 0usize), |(sum, count), q| (sum + q, count + 1));
    (count > 0).then(|| sum / count as f64)
}
