use super::*;
use crate::axis::Unit;
use ndarray::{Array, ArrayD, IxDyn};

fn wavelength_axis(size: usize) -> CalibratedAxis {
    CalibratedAxis::uniform(400.0, 1.0, size)
        .unwrap()
        .with_name("Wavelength")
        .with_unit(Unit::Nanometer)
}

fn linescan(nav: usize, sig: usize) -> Spectrum {
    let data = Array::from_shape_fn(IxDyn(&[nav, sig]), |idx| (idx[0] * 100 + idx[1]) as f64);
    Spectrum::new(data, wavelength_axis(sig)).unwrap()
}

#[test]
fn test_new_validates_signal_length() {
    let data = ArrayD::<f64>::zeros(IxDyn(&[3, 10]));
    let err = Spectrum::new(data, wavelength_axis(9)).unwrap_err();
    assert!(matches!(
        err,
        SpectrumError::SignalLengthMismatch { axis: 9, data: 10 }
    ));
}

#[test]
fn test_default_navigation_axes() {
    let s = linescan(4, 8);
    assert_eq!(s.navigation_shape(), &[4]);
    assert_eq!(s.navigation_size(), 4);
    assert_eq!(s.navigation_axes().len(), 1);
    assert_eq!(s.navigation_axes()[0].samples(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(s.signal_dim(), 1);
}

#[test]
fn test_with_navigation_axes_checks_lengths() {
    let s = linescan(4, 8);
    let wrong = vec![CalibratedAxis::pixels(5).unwrap()];
    assert!(matches!(
        s.clone().with_navigation_axes(wrong),
        Err(SpectrumError::NavigationMismatch { .. })
    ));
    let right = vec![CalibratedAxis::uniform(0.0, 0.5, 4).unwrap()];
    assert!(s.with_navigation_axes(right).is_ok());
}

#[test]
fn test_variance_shape_checked() {
    let mut s = linescan(2, 5);
    let bad = NoiseVariance::PerSample(ArrayD::zeros(IxDyn(&[2, 4])));
    assert!(matches!(
        s.set_noise_variance(bad),
        Err(SpectrumError::VarianceShapeMismatch { .. })
    ));
    assert!(s.set_noise_variance(NoiseVariance::Constant(2.0)).is_ok());
    assert!(s.variance().unwrap().is_constant());
}

#[test]
fn test_rows_follow_navigation_order() {
    let s = linescan(3, 4);
    let rows = s.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].to_vec(), vec![200.0, 201.0, 202.0, 203.0]);

    let rebuilt = stack_rows(&[3], rows.iter().map(|r| r.to_vec()).collect()).unwrap();
    assert_eq!(rebuilt, s.data().to_owned());
}

#[test]
fn test_estimate_poissonian_variance_uses_linear_model() {
    let axis = wavelength_axis(3);
    let mut s = Spectrum::from_vec(vec![1.0, 2.0, 4.0], axis).unwrap();
    s.metadata.variance_linear_model = Some(VarianceLinearModel {
        gain_factor: 2.0,
        gain_offset: 1.0,
        correlation_factor: 0.5,
    });
    s.estimate_poissonian_noise_variance();
    match s.variance() {
        Some(NoiseVariance::PerSample(v)) => {
            assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1.5, 2.5, 4.5]);
        }
        other => panic!("unexpected variance: {other:?}"),
    }
}

#[test]
fn test_slice_navigation() {
    let data = Array::from_shape_fn(IxDyn(&[4, 5, 3]), |idx| {
        (idx[0] * 100 + idx[1] * 10 + idx[2]) as f64
    });
    let mut s = Spectrum::new(data, wavelength_axis(3)).unwrap();
    s.estimate_poissonian_noise_variance();

    let cropped = s.slice_navigation(&[1..3, 2..5]).unwrap();
    assert_eq!(cropped.shape(), &[2, 3, 3]);
    assert_eq!(cropped.data()[&[0, 0, 1][..]], 121.0);
    assert_eq!(cropped.navigation_axes()[1].first(), 2.0);
    match cropped.variance() {
        Some(NoiseVariance::PerSample(v)) => assert_eq!(v.shape(), &[2, 3, 3]),
        other => panic!("unexpected variance: {other:?}"),
    }
    assert!(s.slice_navigation(&[0..5, 0..5]).is_err());
    assert!(s.slice_navigation(&[0..2]).is_err());
}

#[test]
fn test_metadata_json_roundtrip() {
    let mut metadata = SpectrumMetadata::new();
    metadata.title = "GaN nanowire".to_string();
    metadata.signal_type = SignalType::CathodoluminescenceSem;
    metadata.laser_wavelength = Some(244.0);
    metadata
        .processing
        .record("to_energy", [("jacobian", "true")]);

    let json = metadata.to_json().unwrap();
    assert!(json.contains("cathodoluminescence_sem"));
    let restored = SpectrumMetadata::from_json(&json).unwrap();
    assert_eq!(restored, metadata);
    assert_eq!(restored.processing.last().unwrap().order, 1);
}
