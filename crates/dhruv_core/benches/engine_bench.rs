use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dhruv_core::{Body, Engine, Ephemeris, GeoLocation};
use dhruv_time::Moment;

fn position_bench(c: &mut Criterion) {
    let engine = Engine::default();
    let loc = GeoLocation::new(28.6139, 77.2090, 216.0);
    let moment = match Moment::parse("2026-02-05T10:00:00+05:30", 0) {
        Ok(m) => m,
        Err(_) => return,
    };

    let mut group = c.benchmark_group("engine_position");
    group.bench_function("moon_single", |b| {
        b.iter(|| engine.equatorial_position(black_box(Body::Moon), black_box(&moment), &loc))
    });
    group.bench_function("saturn_single", |b| {
        b.iter(|| engine.equatorial_position(black_box(Body::Saturn), black_box(&moment), &loc))
    });
    group.bench_function("all_bodies_batch", |b| {
        b.iter(|| engine.equatorial_positions(black_box(&Body::ALL), black_box(&moment), &loc))
    });
    group.finish();
}

criterion_group!(benches, position_bench);
criterion_main!(benches);
