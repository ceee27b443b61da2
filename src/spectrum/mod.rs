//! # Luminescence Spectra
//!
//! A [`Spectrum`] pairs an N-dimensional intensity array with one calibrated
//! signal axis (the last array dimension) and zero or more navigation axes
//! (the leading dimensions: line scans, maps, time series).
//!
//! ```text
//!   data.shape = [nav_0, nav_1, ..., signal]
//!                 └── navigation ──┘  └ signal_axis.len()
//! ```
//!
//! An optional [`NoiseVariance`] travels with the data and is transformed
//! consistently by every axis conversion.

mod error;
mod metadata;
mod noise;
mod rows;

#[cfg(test)]
mod tests;

use std::ops::Range;

use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD, Axis, Slice};

use crate::axis::CalibratedAxis;

pub use error::SpectrumError;
pub use metadata::{ProcessingHistory, ProcessingStep, SignalType, SpectrumMetadata};
pub use noise::{NoiseVariance, VarianceLinearModel};
pub(crate) use rows::{map_rows, stack_rows};

/// Intensity data with a calibrated signal axis
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    data: ArrayD<f64>,
    signal_axis: CalibratedAxis,
    navigation_axes: Vec<CalibratedAxis>,
    variance: Option<NoiseVariance>,
    /// Descriptive metadata
    pub metadata: SpectrumMetadata,
}

impl Spectrum {
    /// Create a spectrum; navigation axes default to pixel indices
    pub fn new(data: ArrayD<f64>, signal_axis: CalibratedAxis) -> Result<Self, SpectrumError> {
        let shape = data.shape().to_vec();
        let (&signal_len, nav_shape) = shape.split_last().ok_or(SpectrumError::NoSignalDimension)?;
        if signal_len != signal_axis.len() {
            return Err(SpectrumError::SignalLengthMismatch {
                axis: signal_axis.len(),
                data: signal_len,
            });
        }
        let navigation_axes = nav_shape
            .iter()
            .map(|&n| CalibratedAxis::pixels(n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            data,
            signal_axis,
            navigation_axes,
            variance: None,
            metadata: SpectrumMetadata::default(),
        })
    }

    /// Create a single spectrum (no navigation dimensions)
    pub fn from_vec(values: Vec<f64>, signal_axis: CalibratedAxis) -> Result<Self, SpectrumError> {
        let len = values.len();
        Self::new(ArrayD::from_shape_vec(vec![len], values)?, signal_axis)
    }

    /// Replace the navigation axes; one per leading data dimension
    pub fn with_navigation_axes(
        mut self,
        axes: Vec<CalibratedAxis>,
    ) -> Result<Self, SpectrumError> {
        let lengths: Vec<usize> = axes.iter().map(CalibratedAxis::len).collect();
        if lengths != self.navigation_shape() {
            return Err(SpectrumError::NavigationMismatch {
                axes: lengths,
                shape: self.navigation_shape().to_vec(),
            });
        }
        self.navigation_axes = axes;
        Ok(self)
    }

    /// Attach a noise variance
    pub fn with_variance(mut self, variance: NoiseVariance) -> Result<Self, SpectrumError> {
        self.set_noise_variance(variance)?;
        Ok(self)
    }

    /// Replace the metadata
    pub fn with_metadata(mut self, metadata: SpectrumMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Intensity data
    pub fn data(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    /// Mutable view of the intensity data (shape is fixed)
    pub fn data_mut(&mut self) -> ArrayViewMutD<'_, f64> {
        self.data.view_mut()
    }

    /// Signal (spectral) axis
    pub fn signal_axis(&self) -> &CalibratedAxis {
        &self.signal_axis
    }

    /// Navigation axes, in array order
    pub fn navigation_axes(&self) -> &[CalibratedAxis] {
        &self.navigation_axes
    }

    /// Noise variance, if any
    pub fn variance(&self) -> Option<&NoiseVariance> {
        self.variance.as_ref()
    }

    /// Full data shape
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Leading (navigation) dimensions of the data
    pub fn navigation_shape(&self) -> &[usize] {
        let shape = self.data.shape();
        &shape[..shape.len() - 1]
    }

    /// Number of navigation positions (1 for a single spectrum)
    pub fn navigation_size(&self) -> usize {
        self.navigation_shape().iter().product()
    }

    /// Index of the signal dimension in the data array
    pub fn signal_dim(&self) -> usize {
        self.data.ndim() - 1
    }

    /// Attach or replace the noise variance
    pub fn set_noise_variance(&mut self, variance: NoiseVariance) -> Result<(), SpectrumError> {
        if let NoiseVariance::PerSample(values) = &variance {
            if values.shape() != self.data.shape() {
                return Err(SpectrumError::VarianceShapeMismatch {
                    variance: values.shape().to_vec(),
                    data: self.data.shape().to_vec(),
                });
            }
        }
        self.variance = Some(variance);
        Ok(())
    }

    /// Remove the noise variance
    pub fn clear_noise_variance(&mut self) {
        self.variance = None;
    }

    /// Estimate per-sample variance from the data using the linear noise
    /// model in the metadata (identity model if none is set)
    pub fn estimate_poissonian_noise_variance(&mut self) {
        let model = self.metadata.variance_linear_model.unwrap_or_default();
        let variance = self.data.mapv(|x| model.variance_of(x));
        self.variance = Some(NoiseVariance::PerSample(variance));
    }

    /// Decompose into data, signal axis, navigation axes, variance and metadata
    pub fn into_parts(
        self,
    ) -> (
        ArrayD<f64>,
        CalibratedAxis,
        Vec<CalibratedAxis>,
        Option<NoiseVariance>,
        SpectrumMetadata,
    ) {
        (
            self.data,
            self.signal_axis,
            self.navigation_axes,
            self.variance,
            self.metadata,
        )
    }

    /// Sub-spectrum over the given navigation index ranges (one per dimension)
    pub fn slice_navigation(&self, ranges: &[Range<usize>]) -> Result<Self, SpectrumError> {
        let nav_shape = self.navigation_shape();
        if ranges.len() != nav_shape.len() {
            return Err(SpectrumError::InvalidSlice(format!(
                "expected {} ranges, got {}",
                nav_shape.len(),
                ranges.len()
            )));
        }

        let mut navigation_axes = Vec::with_capacity(ranges.len());
        for (axis, range) in self.navigation_axes.iter().zip(ranges) {
            navigation_axes.push(axis.slice(range.clone())?);
        }

        let data = slice_leading(self.data.view(), ranges);
        let variance = match &self.variance {
            Some(NoiseVariance::PerSample(values)) => Some(NoiseVariance::PerSample(
                slice_leading(values.view(), ranges),
            )),
            other => other.clone(),
        };

        Ok(Self {
            data,
            signal_axis: self.signal_axis.clone(),
            navigation_axes,
            variance,
            metadata: self.metadata.clone(),
        })
    }

    pub(crate) fn from_parts_unchecked(
        data: ArrayD<f64>,
        signal_axis: CalibratedAxis,
        navigation_axes: Vec<CalibratedAxis>,
        variance: Option<NoiseVariance>,
        metadata: SpectrumMetadata,
    ) -> Self {
        debug_assert_eq!(data.shape().last().copied(), Some(signal_axis.len()));
        Self {
            data,
            signal_axis,
            navigation_axes,
            variance,
            metadata,
        }
    }
}

fn slice_leading(view: ArrayViewD<'_, f64>, ranges: &[Range<usize>]) -> ArrayD<f64> {
    let mut view = view;
    for (dim, range) in ranges.iter().enumerate() {
        view.slice_axis_inplace(Axis(dim), Slice::from(range.clone()));
    }
    view.to_owned()
}
