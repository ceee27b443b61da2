use super::*;
use approx::assert_relative_eq;

#[test]
fn test_uniform_samples() {
    let axis = CalibratedAxis::uniform(200.0, 10.0, 5).unwrap();
    assert_eq!(axis.len(), 5);
    assert!(axis.is_uniform());
    assert_eq!(axis.samples(), vec![200.0, 210.0, 220.0, 230.0, 240.0]);
    assert_eq!(axis.first(), 200.0);
    assert_eq!(axis.last(), 240.0);
}

#[test]
fn test_uniform_and_explicit_agree() {
    let uniform = CalibratedAxis::uniform(1.5, 0.25, 9).unwrap();
    let explicit = uniform.to_explicit();
    assert!(!explicit.is_uniform());
    assert_eq!(uniform.samples(), explicit.samples());
    for value in [1.5, 1.6, 1.63, 1.625, 2.1, 3.5] {
        assert_eq!(
            uniform.value_to_index(value).unwrap(),
            explicit.value_to_index(value).unwrap(),
            "index mismatch for {value}"
        );
    }
}

#[test]
fn test_value_to_index_ties_to_lower() {
    let axis = CalibratedAxis::uniform(0.0, 1.0, 32).unwrap();
    assert_eq!(axis.value_to_index(28.0).unwrap(), 28);
    assert_eq!(axis.value_to_index(28.5).unwrap(), 28);
    assert_eq!(axis.value_to_index(28.51).unwrap(), 29);

    let explicit = CalibratedAxis::from_samples(vec![0.0, 1.0, 3.0, 7.0]).unwrap();
    assert_eq!(explicit.value_to_index(2.0).unwrap(), 1);
    assert_eq!(explicit.value_to_index(5.5).unwrap(), 3);
    assert_eq!(explicit.value_to_index(7.0).unwrap(), 3);
}

#[test]
fn test_value_to_index_out_of_range() {
    let axis = CalibratedAxis::uniform(0.0, 1.0, 10).unwrap();
    assert!(matches!(
        axis.value_to_index(-1.0),
        Err(AxisError::ValueOutOfRange { .. })
    ));
    assert!(matches!(
        axis.value_to_index(9.5),
        Err(AxisError::ValueOutOfRange { .. })
    ));
}

#[test]
fn test_explicit_validation() {
    assert!(matches!(
        CalibratedAxis::from_samples(vec![]),
        Err(AxisError::Empty)
    ));
    assert!(matches!(
        CalibratedAxis::from_samples(vec![1.0, 3.0, 2.0]),
        Err(AxisError::NotIncreasing { index: 2 })
    ));
    assert!(matches!(
        CalibratedAxis::from_samples(vec![1.0, f64::NAN]),
        Err(AxisError::NonFinite { index: 1 })
    ));
    assert!(matches!(
        CalibratedAxis::uniform(0.0, -1.0, 4),
        Err(AxisError::InvalidScale(_))
    ));
}

#[test]
fn test_slice_keeps_form() {
    let axis = CalibratedAxis::uniform(10.0, 2.0, 10)
        .unwrap()
        .with_name("Wavelength")
        .with_unit(Unit::Nanometer);
    let sliced = axis.slice(2..5).unwrap();
    assert!(sliced.is_uniform());
    assert_eq!(sliced.samples(), vec![14.0, 16.0, 18.0]);
    assert_eq!(sliced.name, "Wavelength");
    assert_eq!(sliced.unit, Unit::Nanometer);

    let explicit = axis.to_explicit().slice(8..10).unwrap();
    assert_eq!(explicit.samples(), vec![26.0, 28.0]);
    assert!(axis.slice(5..5).is_err());
    assert!(axis.slice(8..11).is_err());
}

#[test]
fn test_unit_parsing() {
    assert_eq!("nm".parse::<Unit>().unwrap(), Unit::Nanometer);
    assert_eq!("µm".parse::<Unit>().unwrap(), Unit::Micrometer);
    assert_eq!("um".parse::<Unit>().unwrap(), Unit::Micrometer);
    assert_eq!("cm$^{-1}$".parse::<Unit>().unwrap(), Unit::Wavenumber);
    assert_eq!("".parse::<Unit>().unwrap(), Unit::Undefined);
    assert!("furlong".parse::<Unit>().is_err());
    assert_eq!(Unit::Wavenumber.to_string(), "cm⁻¹");
}

#[test]
fn test_axis_json_roundtrip() {
    let axis = CalibratedAxis::from_samples(vec![1.0, 1.5, 2.5])
        .unwrap()
        .with_name("Energy")
        .with_unit(Unit::ElectronVolt);
    let json = serde_json::to_string(&axis).unwrap();
    assert!(json.contains("\"eV\""));
    let restored: CalibratedAxis = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, axis);
    assert_relative_eq!(restored.last(), 2.5);
}

#[test]
fn test_axis_json_rejects_invalid_axes() {
    let descending = r#"{"name":"x","unit":"nm","kind":{"Explicit":{"samples":[5.0,4.0,3.0]}}}"#;
    assert!(serde_json::from_str::<CalibratedAxis>(descending).is_err());

    let empty = r#"{"name":"x","unit":"nm","kind":{"Uniform":{"offset":0.0,"scale":-1.0,"size":0}}}"#;
    assert!(serde_json::from_str::<CalibratedAxis>(empty).is_err());

    let negative_scale = r#"{"name":"x","unit":"nm","kind":{"Uniform":{"offset":0.0,"scale":-1.0,"size":4}}}"#;
    let err = serde_json::from_str::<CalibratedAxis>(negative_scale).unwrap_err();
    assert!(err.to_string().contains("Invalid uniform axis scale"));

    let uniform = r#"{"name":"Wavelength","unit":"nm","kind":{"Uniform":{"offset":400.0,"scale":0.5,"size":4}}}"#;
    let axis: CalibratedAxis = serde_json::from_str(uniform).unwrap();
    assert_eq!(axis.name, "Wavelength");
    assert_eq!(axis.unit, Unit::Nanometer);
    assert_relative_eq!(axis.last(), 401.5);
}
