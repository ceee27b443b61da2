//! Row-wise access to spectral data.
//!
//! Algorithms that work on one spectrum at a time (stitching, centroids) see
//! the data as a flat list of signal rows, one per navigation position, in
//! row-major navigation order.

use ndarray::{ArrayD, ArrayView1, Axis, IxDyn};

use super::{Spectrum, SpectrumError};

impl Spectrum {
    /// Signal rows in row-major navigation order
    pub fn rows(&self) -> Vec<ArrayView1<'_, f64>> {
        self.data.lanes(Axis(self.signal_dim())).into_iter().collect()
    }
}

/// Reassemble rows of equal length into an array of shape `nav_shape + [len]`
pub(crate) fn stack_rows(
    nav_shape: &[usize],
    rows: Vec<Vec<f64>>,
) -> Result<ArrayD<f64>, SpectrumError> {
    let len = rows.first().map_or(0, Vec::len);
    let mut shape = nav_shape.to_vec();
    shape.push(len);
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Ok(ArrayD::from_shape_vec(IxDyn(&shape), flat)?)
}

/// Apply `f` to every row, in parallel when the `parallel` feature is enabled
pub(crate) fn map_rows<F, T, E>(rows: &[ArrayView1<'_, f64>], f: F) -> Result<Vec<T>, E>
where
    F: Fn(usize, ArrayView1<'_, f64>) -> Result<T, E> + Send + Sync,
    T: Send,
    E: Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        rows.par_iter()
            .enumerate()
            .map(|(i, row)| f(i, row.view()))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        rows.iter()
            .enumerate()
            .map(|(i, row)| f(i, row.view()))
            .collect()
    }
}
