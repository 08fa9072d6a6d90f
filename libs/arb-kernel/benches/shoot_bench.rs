//! Ray shooting throughput: one ray at a time, face-major batches, and
//! batches split across the rayon pool.
//!
//! Rays form a fixed grid aimed at a frustum so runs are comparable.

use arb_kernel::{par_shoot_batch, shoot_batch, Arb, PreparedArb, Ray, Tolerance};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use glam::DVec3;
use std::hint::black_box;

const COUNTS: &[usize] = &[1_000, 10_000, 100_000];

fn frustum() -> Arb {
    let mut arb = Arb::from_box(DVec3::ZERO, DVec3::new(4.0, 4.0, 2.0));
    arb.pt[4] = DVec3::new(1.0, 1.0, 2.0);
    arb.pt[5] = DVec3::new(3.0, 1.0, 2.0);
    arb.pt[6] = DVec3::new(3.0, 3.0, 2.0);
    arb.pt[7] = DVec3::new(1.0, 3.0, 2.0);
    arb
}

/// `count` parallel rays on a square grid, half of them missing.
fn grid_rays(count: usize) -> Vec<Ray> {
    let side = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let (x, y) = ((i % side) as f64, (i / side) as f64);
            let origin = DVec3::new(
                -2.0 + 8.0 * x / side as f64,
                -2.0 + 8.0 * y / side as f64,
                -10.0,
            );
            Ray::new(origin, DVec3::new(0.05, 0.02, 1.0).normalize())
        })
        .collect()
}

fn bench_shoot(c: &mut Criterion) {
    let solid = match PreparedArb::prepare(&frustum(), &Tolerance::default()) {
        Ok(solid) => solid,
        Err(err) => panic!("benchmark solid failed to prepare: {err}"),
    };

    let mut group = c.benchmark_group("shoot");
    for &count in COUNTS {
        let rays = grid_rays(count);
        let solids = vec![&solid; count];
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("single", count), &rays, |b, rays| {
            b.iter(|| {
                rays.iter()
                    .map(|r| solid.shoot(black_box(r)))
                    .filter(Option::is_some)
                    .count()
            });
        });
        group.bench_with_input(BenchmarkId::new("batch", count), &rays, |b, rays| {
            b.iter(|| shoot_batch(black_box(&solids), black_box(rays)));
        });
        group.bench_with_input(BenchmarkId::new("par_batch", count), &rays, |b, rays| {
            b.iter(|| par_shoot_batch(black_box(&solids), black_box(rays)));
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(30);
    targets = bench_shoot
);
criterion_main!(benches);
