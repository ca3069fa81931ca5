use criterion::{Criterion, black_box, criterion_group, criterion_main};

use math_convex_hull_2d::{all_strategies, testdata};

/// Time every strategy on a shared random cloud. The brute-force baselines
/// get a smaller cloud so the run stays bounded.
fn bench_strategies(c: &mut Criterion) {
    let cloud = testdata::random_square_points(500, 1000.0);
    let small = testdata::random_square_points(30, 1000.0);

    for strategy in all_strategies() {
        let name = strategy.display_name();
        let brute = matches!(name, "Extreme Points" | "Extreme Segments");
        let points = if brute { &small } else { &cloud };
        c.bench_function(&format!("{} ({} points)", name, points.len()), |b| {
            b.iter(|| strategy.hull(black_box(points)))
        });
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
