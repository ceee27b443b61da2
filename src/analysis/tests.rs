use super::*;
use crate::axis::{CalibratedAxis, Unit};
use crate::spectrum::Spectrum;
use approx::assert_relative_eq;
use ndarray::{ArrayD, IxDyn};

fn hundreds(n: usize) -> Vec<f64> {
    (0..n).map(|i| 200.0 + 100.0 * i as f64).collect()
}

#[test]
fn test_centroid_symmetric_peak() {
    let intensities = [1.0, 2.0, 3.0, 2.0, 1.0, 0.0];
    assert_relative_eq!(centroid(&intensities, &hundreds(6)).unwrap(), 400.0);
}

#[test]
fn test_centroid_interpolates_between_samples() {
    assert_relative_eq!(centroid(&[1.0, 1.0], &[200.0, 300.0]).unwrap(), 250.0);

    let axis = [0.0, 1.0, 10.0];
    // index 1.5 lies halfway between 1 and 10
    assert_relative_eq!(centroid(&[0.0, 1.0, 1.0], &axis).unwrap(), 5.5);
}

#[test]
fn test_centroid_errors() {
    assert!(matches!(
        centroid(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(AnalysisError::LengthMismatch { data: 2, axis: 3 })
    ));
    assert!(matches!(centroid(&[], &[]), Err(AnalysisError::Empty)));
    assert!(matches!(
        centroid(&[1.0, -1.0], &[1.0, 2.0]),
        Err(AnalysisError::UndefinedCentroid(_))
    ));
    assert!(matches!(
        centroid(&[1.0, f64::NAN], &[1.0, 2.0]),
        Err(AnalysisError::UndefinedCentroid(_))
    ));
}

#[test]
fn test_centroid_error_message() {
    let err = centroid(&[1.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The length of the spectrum array 1 must match the length of the axis 2"
    );
}

#[test]
fn test_spectrum_centroid_over_navigation() {
    let axis = CalibratedAxis::uniform(200.0, 100.0, 6).unwrap();
    let mut values = Vec::new();
    for row in 0..3 {
        let mut peak = vec![0.0; 6];
        peak[row + 1] = 1.0;
        values.extend(peak);
    }
    let data = ArrayD::from_shape_vec(IxDyn(&[3, 6]), values).unwrap();
    let s = Spectrum::new(data, axis).unwrap();

    let centers = s.centroid().unwrap();
    assert_eq!(centers.shape(), &[3]);
    assert_relative_eq!(centers[&[0][..]], 300.0);
    assert_relative_eq!(centers[&[2][..]], 500.0);
}

#[test]
fn test_single_spectrum_centroid_is_scalar() {
    let axis = CalibratedAxis::uniform(200.0, 100.0, 6).unwrap();
    let s = Spectrum::from_vec(vec![1.0, 2.0, 3.0, 2.0, 1.0, 0.0], axis).unwrap();
    let centers = s.centroid().unwrap();
    assert_eq!(centers.ndim(), 0);
    assert_relative_eq!(centers.iter().next().copied().unwrap(), 400.0);
}

#[test]
fn test_integrate_trapezoid() {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 2.0, 2.0];
    assert_relative_eq!(integrate_trapezoid(&x, &y).unwrap(), 5.0);
    assert_eq!(integrate_trapezoid(&[1.0], &[4.0]).unwrap(), 0.0);
    assert!(integrate_trapezoid(&x, &y[..2]).is_err());
}

#[test]
fn test_spectrum_integrate() {
    let axis = CalibratedAxis::uniform(0.0, 0.5, 5).unwrap();
    let s = Spectrum::from_vec(vec![1.0; 5], axis).unwrap();
    let area = s.integrate().unwrap();
    assert_relative_eq!(area.iter().next().copied().unwrap(), 2.0);
}

fn grating() -> GratingParameters {
    GratingParameters {
        gamma_deg: 3.0,
        deviation_angle_deg: -20.0,
        focal_length_mm: 300.0,
        ccd_width_mm: 25.0,
        central_wavelength_nm: 600.0,
        grating_density_gr_mm: 150.0,
    }
}

#[test]
fn test_solve_grating_equation() {
    let pixels = CalibratedAxis::pixels(10).unwrap();
    let axis = solve_grating_equation(&pixels, &grating()).unwrap();

    assert_eq!(axis.name, "Wavelength");
    assert_eq!(axis.unit, Unit::Nanometer);
    assert_eq!(axis.len(), 10);
    assert!(axis.is_uniform());
    assert_relative_eq!(axis.first(), 368.614_808_7, epsilon = 1e-3);
    assert_relative_eq!(axis.last(), 768.248_638_3, epsilon = 1e-3);
    let (_, scale) = axis.offset_scale().unwrap();
    assert_relative_eq!(scale, 44.403_758_85, epsilon = 1e-6);
}

#[test]
fn test_solve_grating_equation_rejects_descending_range() {
    let pixels = CalibratedAxis::pixels(1).unwrap();
    let params = GratingParameters {
        gamma_deg: 1.0,
        deviation_angle_deg: 1.0,
        focal_length_mm: 1.0,
        ccd_width_mm: 1.0,
        central_wavelength_nm: 1.0,
        grating_density_gr_mm: 1.0,
    };
    assert!(matches!(
        solve_grating_equation(&pixels, &params),
        Err(AnalysisError::InvalidGrating(_))
    ));
}

#[test]
fn test_solve_grating_equation_on_calibrated_axis() {
    // still converts; only warns about the unit
    let nm = CalibratedAxis::uniform(0.0, 1.0, 10)
        .unwrap()
        .with_unit(Unit::Nanometer);
    let axis = solve_grating_equation(&nm, &grating()).unwrap();
    assert_relative_eq!(axis.first(), 368.614_808_7, epsilon = 1e-3);
}
