//! Conversion Benchmarks
//!
//! Scalar conversions against the batch entry points and the 8-bit decode table.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lincolor_core::math::{srgb_gamma_decode, srgb_gamma_encode};
use lincolor_core::{LinearRgb, LinearRgba, SrgbaU8, Xyz, simd};

fn generate_rgba8_data(count: usize) -> Vec<SrgbaU8> {
    (0..count)
        .map(|i| SrgbaU8::from_hex((i as u32).wrapping_mul(2_654_435_761)))
        .collect()
}

fn generate_f64_values(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64 / count as f64).collect()
}

// ============================================================================
// Scalar Benchmarks
// ============================================================================

fn bench_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma");

    for size in [1000, 10000, 100000].iter() {
        let input = generate_f64_values(*size);
        let mut output = vec![0.0f64; *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("decode", size), size, |b, _| {
            b.iter(|| {
                for (inp, out) in input.iter().zip(output.iter_mut()) {
                    *out = srgb_gamma_decode(black_box(*inp));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("encode", size), size, |b, _| {
            b.iter(|| {
                for (inp, out) in input.iter().zip(output.iter_mut()) {
                    *out = srgb_gamma_encode(black_box(*inp));
                }
            })
        });
    }

    group.finish();
}

fn bench_xyz(c: &mut Criterion) {
    let mut group = c.benchmark_group("xyz");

    let rgb = LinearRgb::new(0.5, 0.3, 0.7);
    let xyz = Xyz::new(0.4, 0.35, 0.6);

    group.bench_function("linear_rgb_to_xyz", |b| b.iter(|| black_box(rgb).to_xyz()));
    group.bench_function("xyz_to_linear_rgb", |b| {
        b.iter(|| black_box(xyz).to_linear_rgb())
    });
    group.bench_function("xyz_to_srgb", |b| b.iter(|| black_box(xyz).to_srgb()));

    group.finish();
}

fn bench_u8_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("u8_decode");

    let pixel = SrgbaU8::from_hex(0x80402010);

    group.bench_function("table", |b| b.iter(|| black_box(pixel).to_linear()));
    group.bench_function("formula", |b| {
        b.iter(|| black_box(pixel).to_float().to_linear())
    });

    group.finish();
}

// ============================================================================
// Batch Benchmarks
// ============================================================================

fn bench_rgba8_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("rgba8_batch/{}", simd::dispatch_target()));

    for pixel_count in [1000, 10000, 100000].iter() {
        let src = generate_rgba8_data(*pixel_count);
        let mut linear = vec![LinearRgba::default(); *pixel_count];
        let mut dst = vec![SrgbaU8::default(); *pixel_count];

        group.throughput(Throughput::Elements(*pixel_count as u64));

        group.bench_with_input(
            BenchmarkId::new("decode", pixel_count),
            pixel_count,
            |b, _| {
                b.iter(|| simd::srgba8_to_linear_batch(black_box(&src), black_box(&mut linear)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("encode", pixel_count),
            pixel_count,
            |b, _| {
                b.iter(|| simd::linear_to_srgba8_batch(black_box(&linear), black_box(&mut dst)))
            },
        );
    }

    group.finish();
}

fn bench_over_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("over_batch/{}", simd::dispatch_target()));

    for pixel_count in [1000, 10000, 100000].iter() {
        let mut above = vec![LinearRgba::default(); *pixel_count];
        simd::srgba8_to_linear_batch(&generate_rgba8_data(*pixel_count), &mut above)
            .expect("equal lengths");
        let background = vec![LinearRgba::WHITE; *pixel_count];
        let mut below = background.clone();

        group.throughput(Throughput::Elements(*pixel_count as u64));

        group.bench_with_input(
            BenchmarkId::new("over", pixel_count),
            pixel_count,
            |b, _| {
                b.iter(|| {
                    below.copy_from_slice(&background);
                    simd::over_batch(black_box(&above), black_box(&mut below))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gamma,
    bench_xyz,
    bench_u8_decode,
    bench_rgba8_batch,
    bench_over_batch,
);

criterion_main!(benches);
