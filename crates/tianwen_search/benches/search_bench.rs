use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tianwen_search::{Season, SolarTerm, equinox_solstice_jde, get_solar_term, solar_terms_for_year};
use tianwen_time::Zone;

fn equinox_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_equinox");
    group.bench_function("equinox_solstice_jde", |b| {
        b.iter(|| equinox_solstice_jde(black_box(2024), Season::JuneSolstice).expect("in range"))
    });
    group.finish();
}

fn solar_term_bench(c: &mut Criterion) {
    let zone = Zone::utc();
    let mut group = c.benchmark_group("search_solar_term");
    group.sample_size(20);
    group.bench_function("get_solar_term", |b| {
        b.iter(|| get_solar_term(black_box(2024), SolarTerm::StartOfSpring, &zone).expect("found"))
    });
    group.bench_function("solar_terms_for_year", |b| {
        b.iter(|| solar_terms_for_year(black_box(2024), &zone).expect("found"))
    });
    group.finish();
}

criterion_group!(benches, equinox_bench, solar_term_bench);
criterion_main!(benches);
