use log::{info, warn};
use ndarray::{ArrayD, Axis};

use super::jacobian::{
    axis_to_energy, axis_to_relative_wavenumber, axis_to_wavenumber, data_to_energy,
    data_to_wavenumber, rescale, variance_to_energy, variance_to_wavenumber, wavelengths_nm,
    wavenumber_jacobian, AxisConversion,
};
use super::refractive::nm_to_invcm;
use super::{ConversionError, ConversionOptions, ConversionWarning, Converted};
use crate::spectrum::{NoiseVariance, Spectrum, VarianceLinearModel};

#[derive(Debug, Clone, Copy)]
enum Target {
    Energy,
    Wavenumber,
    RelativeWavenumber { laser: f64 },
}

impl Target {
    fn operation(&self) -> &'static str {
        match self {
            Target::Energy => "to_energy",
            Target::Wavenumber => "to_wavenumber",
            Target::RelativeWavenumber { .. } => "to_relative_wavenumber",
        }
    }
}

impl Spectrum {
    /// Convert a wavelength spectrum to an energy scale (eV)
    pub fn to_energy(&self, options: &ConversionOptions) -> Result<Converted, ConversionError> {
        self.convert(Target::Energy, options)
    }

    /// In-place variant of [`Spectrum::to_energy`]
    pub fn to_energy_inplace(
        &mut self,
        options: &ConversionOptions,
    ) -> Result<Vec<ConversionWarning>, ConversionError> {
        let converted = self.to_energy(options)?;
        Ok(self.replace_with(converted))
    }

    /// Convert a wavelength spectrum to a wavenumber scale (cm⁻¹)
    pub fn to_wavenumber(&self, options: &ConversionOptions) -> Result<Converted, ConversionError> {
        self.convert(Target::Wavenumber, options)
    }

    /// In-place variant of [`Spectrum::to_wavenumber`]
    pub fn to_wavenumber_inplace(
        &mut self,
        options: &ConversionOptions,
    ) -> Result<Vec<ConversionWarning>, ConversionError> {
        let converted = self.to_wavenumber(options)?;
        Ok(self.replace_with(converted))
    }

    /// Convert to wavenumbers relative to a laser line.
    ///
    /// `laser` is in the unit of the signal axis; when `None`, the
    /// `laser_wavelength` stored in the metadata is used.
    pub fn to_relative_wavenumber(
        &self,
        laser: Option<f64>,
        options: &ConversionOptions,
    ) -> Result<Converted, ConversionError> {
        let laser = laser
            .or(options.laser_wavelength)
            .or(self.metadata.laser_wavelength)
            .ok_or(ConversionError::MissingLaserWavelength)?;
        self.convert(Target::RelativeWavenumber { laser }, options)
    }

    /// In-place variant of [`Spectrum::to_relative_wavenumber`]
    pub fn to_relative_wavenumber_inplace(
        &mut self,
        laser: Option<f64>,
        options: &ConversionOptions,
    ) -> Result<Vec<ConversionWarning>, ConversionError> {
        let converted = self.to_relative_wavenumber(laser, options)?;
        Ok(self.replace_with(converted))
    }

    /// Raman shift; same as [`Spectrum::to_relative_wavenumber`]
    pub fn to_raman_shift(
        &self,
        laser: Option<f64>,
        options: &ConversionOptions,
    ) -> Result<Converted, ConversionError> {
        self.to_relative_wavenumber(laser, options)
    }

    /// In-place variant of [`Spectrum::to_raman_shift`]
    pub fn to_raman_shift_inplace(
        &mut self,
        laser: Option<f64>,
        options: &ConversionOptions,
    ) -> Result<Vec<ConversionWarning>, ConversionError> {
        self.to_relative_wavenumber_inplace(laser, options)
    }

    fn replace_with(&mut self, converted: Converted) -> Vec<ConversionWarning> {
        *self = converted.spectrum;
        converted.warnings
    }

    fn convert(
        &self,
        target: Target,
        options: &ConversionOptions,
    ) -> Result<Converted, ConversionError> {
        let source = self.signal_axis();
        let AxisConversion {
            axis,
            factor,
            mut warnings,
        } = match target {
            Target::Energy => axis_to_energy(source)?,
            Target::Wavenumber => axis_to_wavenumber(source)?,
            Target::RelativeWavenumber { laser } => axis_to_relative_wavenumber(source, laser)?,
        };
        let targets = axis.samples();
        let reverse = !matches!(target, Target::RelativeWavenumber { .. });

        let (data, variance) = if options.jacobian {
            match target {
                Target::Energy => (
                    data_to_energy(self.data(), factor, source, &targets)?,
                    self.variance()
                        .map(|v| variance_to_energy(v, self.shape(), factor, source, &targets))
                        .transpose()?
                        .map(NoiseVariance::PerSample),
                ),
                Target::Wavenumber => (
                    data_to_wavenumber(self.data(), factor, &targets)?,
                    self.variance()
                        .map(|v| variance_to_wavenumber(v, self.shape(), factor, &targets))
                        .transpose()?
                        .map(NoiseVariance::PerSample),
                ),
                Target::RelativeWavenumber { .. } => {
                    // the Jacobian of a shifted axis is that of the absolute wavenumber
                    let absolute: Vec<f64> =
                        wavelengths_nm(source).into_iter().map(nm_to_invcm).collect();
                    let jacobian = wavenumber_jacobian(factor, &absolute);
                    let squared: Vec<f64> = jacobian.iter().map(|j| j * j).collect();
                    (
                        rescale(self.data(), &jacobian, false),
                        self.variance().map(|v| {
                            NoiseVariance::PerSample(rescale(
                                v.broadcast_to(self.shape()).view(),
                                &squared,
                                false,
                            ))
                        }),
                    )
                }
            }
        } else {
            let mut data = self.data().to_owned();
            let variance = self.variance().cloned().map(|v| match v {
                NoiseVariance::PerSample(mut values) if reverse => {
                    reverse_signal(&mut values);
                    NoiseVariance::PerSample(values)
                }
                other => other,
            });
            if reverse {
                reverse_signal(&mut data);
            }
            (data, variance)
        };

        let mut metadata = self.metadata.clone();
        if options.jacobian {
            if let Some(previous) = metadata.variance_linear_model {
                let warning = ConversionWarning::NoiseModelReset { previous };
                warn!("{warning}");
                warnings.push(warning);
                metadata.variance_linear_model = Some(VarianceLinearModel::default());
            }
        }
        let mut parameters = vec![
            ("jacobian", options.jacobian.to_string()),
            ("source_unit", source.unit.to_string()),
        ];
        if let Target::RelativeWavenumber { laser } = target {
            metadata.laser_wavelength = Some(laser);
            parameters.push(("laser_wavelength", laser.to_string()));
        }
        metadata.processing.record(target.operation(), parameters);
        info!(
            "Converted signal axis from {} to {} ({} samples)",
            source.unit,
            axis.unit,
            axis.len()
        );

        let spectrum = Spectrum::from_parts_unchecked(
            data,
            axis,
            self.navigation_axes().to_vec(),
            variance,
            metadata,
        );
        Ok(Converted { spectrum, warnings })
    }
}

fn reverse_signal(values: &mut ArrayD<f64>) {
    let signal = Axis(values.ndim() - 1);
    values.invert_axis(signal);
}
