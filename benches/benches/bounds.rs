// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use panzoom_transform::{
    BoundaryConfig, TransformState, bound_coordinates, content_pivot, matrix_string,
    transform_matrix,
};

fn bench_bound_coordinates(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds/bound_coordinates");
    let viewport = Size::new(1280.0, 800.0);
    let content = Rect::new(0.0, 0.0, 4096.0, 3072.0);
    let config = BoundaryConfig::enabled(0.2, 0.2);

    // Rotation changes the footprint computation from a scale to a full bbox.
    for angle in [0.0, 30.0, 90.0] {
        let poses: Vec<TransformState> = (0..256)
            .map(|i| {
                let t = f64::from(i);
                TransformState::new(
                    t * 97.0 - 12_000.0,
                    6_000.0 - t * 41.0,
                    0.25 + t / 64.0,
                    angle,
                )
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(angle), &poses, |b, poses| {
            b.iter(|| {
                for pose in poses {
                    let desired = transform_matrix(pose, content_pivot(content)).translation();
                    black_box(bound_coordinates(desired, pose, viewport, content, &config));
                }
            });
        });
    }
    group.finish();
}

fn bench_matrix_string(c: &mut Criterion) {
    let pose = TransformState::new(-312.5, 87.25, 1.618, 17.0);
    let matrix = transform_matrix(&pose, content_pivot(Rect::new(0.0, 0.0, 640.0, 480.0)));
    c.bench_function("bounds/matrix_string", |b| {
        b.iter(|| black_box(matrix_string(black_box(matrix))));
    });
}

criterion_group!(benches, bench_bound_coordinates, bench_matrix_string);
criterion_main!(benches);
