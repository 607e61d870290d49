use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tianwen_frames::{
    EclipticCoord, ObliquityMode, ecliptic_to_equatorial, get_nutation, mean_obliquity_deg,
};

fn nutation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames_nutation");
    group.bench_function("get_nutation", |b| {
        b.iter(|| get_nutation(black_box(2_460_390.125)).expect("finite"))
    });
    group.bench_function("mean_obliquity_deg", |b| {
        b.iter(|| mean_obliquity_deg(black_box(2_460_390.125)))
    });
    group.finish();
}

fn rotation_bench(c: &mut Criterion) {
    let ecl = EclipticCoord::new(123.456, -1.234);
    let mut group = c.benchmark_group("frames_rotation");
    group.bench_function("ecliptic_to_equatorial_fixed", |b| {
        b.iter(|| ecliptic_to_equatorial(black_box(&ecl), ObliquityMode::FixedJ2000).expect("finite"))
    });
    group.bench_function("ecliptic_to_equatorial_true", |b| {
        b.iter(|| {
            ecliptic_to_equatorial(black_box(&ecl), ObliquityMode::TrueAt(2_460_390.125))
                .expect("finite")
        })
    });
    group.finish();
}

criterion_group!(benches, nutation_bench, rotation_bench);
criterion_main!(benches);
