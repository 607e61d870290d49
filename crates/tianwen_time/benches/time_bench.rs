use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tianwen_time::{Zone, calendar_to_jd, gmst_deg, normalize_angle, to_calendar_day};

fn calendar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_calendar");
    group.bench_function("calendar_to_jd", |b| {
        b.iter(|| calendar_to_jd(black_box(2024), black_box(3), black_box(20.125)))
    });
    group.bench_function("to_calendar_day", |b| {
        b.iter(|| to_calendar_day(black_box(2_460_390.125)).expect("valid jd"))
    });
    group.finish();
}

fn sidereal_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_sidereal");
    group.bench_function("gmst_deg", |b| {
        b.iter(|| gmst_deg(black_box(2_460_390.125)).expect("finite"))
    });
    group.bench_function("normalize_angle_large", |b| {
        b.iter(|| normalize_angle(black_box(24_063_612.378)).expect("finite"))
    });
    group.finish();
}

fn zone_bench(c: &mut Criterion) {
    let zone: Zone = "Europe/Berlin".parse().expect("known zone");
    let mut group = c.benchmark_group("time_zone");
    group.bench_function("parse_iana", |b| {
        b.iter(|| black_box("America/New_York").parse::<Zone>().expect("known zone"))
    });
    group.bench_function("local", |b| {
        b.iter(|| zone.local(black_box(2_460_390.125)).expect("valid jd"))
    });
    group.finish();
}

criterion_group!(benches, calendar_bench, sidereal_bench, zone_bench);
criterion_main!(benches);
