use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use office_walkthrough::config::LayoutConfig;
use office_walkthrough::input::NavKey;
use office_walkthrough::math::AABB;
use office_walkthrough::nav::is_colliding_with_any;
use office_walkthrough::Session;

/// Columns laid out on a grid across the floor
fn column_grid(count: usize) -> Vec<AABB> {
    let per_row = (count as f32).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let x = (i % per_row) as f32 * 2.0 - 9.0;
            let z = (i / per_row) as f32 * 2.0 - 5.0;
            AABB::from_center_half_extents(Vec3::new(x, 3.0, z), Vec3::new(0.6, 3.0, 0.6))
        })
        .collect()
}

/// Benchmark: point-vs-inflated-box test against a growing obstacle set
fn bench_collision_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision_query");

    for count in [3, 16, 64, 256].iter() {
        let boxes = column_grid(*count);
        // Between columns, so every box is tested
        let probe = Vec3::new(0.0, 1.0, 0.0);

        group.bench_with_input(BenchmarkId::new("columns", count), count, |b, _| {
            b.iter(|| black_box(is_colliding_with_any(black_box(probe), &boxes, 0.3, 0.2)))
        });
    }

    group.finish();
}

/// Benchmark: one full frame of the default room with keys held
fn bench_session_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_tick");
    let config = LayoutConfig::default();

    group.bench_function("idle", |b| {
        let mut session = Session::new(&config);
        b.iter(|| black_box(session.tick()))
    });

    group.bench_function("walk_and_orbit", |b| {
        let mut session = Session::new(&config);
        session.key(NavKey::Forward, true);
        session.key(NavKey::Left, true);
        b.iter(|| {
            session.drag(3.0, 0.0, 720.0);
            black_box(session.tick())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_collision_query, bench_session_tick);
criterion_main!(benches);
