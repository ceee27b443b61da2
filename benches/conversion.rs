use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lumispec::axis::{CalibratedAxis, Unit};
use lumispec::conversion::ConversionOptions;
use lumispec::spectrum::{NoiseVariance, Spectrum};
use ndarray::{ArrayD, IxDyn};

/// Map of `ny * nx` spectra with 1024 channels between 300 and 900 nm
fn synthetic_map(ny: usize, nx: usize) -> Spectrum {
    let channels = 1024;
    let axis = CalibratedAxis::uniform(300.0, 600.0 / channels as f64, channels)
        .unwrap()
        .with_unit(Unit::Nanometer);
    let data = ArrayD::from_shape_fn(IxDyn(&[ny, nx, channels]), |index| {
        let x = 300.0 + index[2] as f64 * 600.0 / channels as f64;
        (-0.5 * ((x - 500.0 - index[1] as f64) / 30.0).powi(2)).exp()
    });
    Spectrum::new(data, axis).unwrap()
}

/// Benchmark energy conversion of growing maps
fn bench_to_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_energy");
    let options = ConversionOptions::default();

    for side in [1, 16, 64] {
        let map = synthetic_map(side, side);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &map, |b, map| {
            b.iter(|| black_box(map.to_energy(&options).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark conversions that also carry a per-sample variance
fn bench_with_variance(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_variance");
    let mut map = synthetic_map(16, 16);
    map.estimate_poissonian_noise_variance();
    let options = ConversionOptions::default();

    group.bench_function("to_energy", |b| {
        b.iter(|| black_box(map.to_energy(&options).unwrap()));
    });
    group.bench_function("to_wavenumber", |b| {
        b.iter(|| black_box(map.to_wavenumber(&options).unwrap()));
    });
    group.bench_function("to_raman_shift", |b| {
        b.iter(|| black_box(map.to_raman_shift(Some(244.0), &options).unwrap()));
    });
    group.bench_function("constant_variance", |b| {
        let constant = map
            .clone()
            .with_variance(NoiseVariance::Constant(1.0))
            .unwrap();
        b.iter(|| black_box(constant.to_energy(&options).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_to_energy, bench_with_variance);
criterion_main!(benches);
