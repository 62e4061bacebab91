// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use panzoom_gesture::{
    FrameChannel, FrameHandle, FrameScheduler, Host, PanZoom, PanZoomConfig, PointerEvent,
    RenderSink, StaticGeometry,
};
use panzoom_transform::BoundaryConfig;

#[derive(Default)]
struct Frames(u64);

impl FrameScheduler for Frames {
    fn request_frame(&mut self, _channel: FrameChannel) -> FrameHandle {
        self.0 += 1;
        FrameHandle(self.0)
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {}
}

struct Sink;

impl RenderSink for Sink {
    fn apply_transform(&mut self, transform: &str) {
        black_box(transform);
    }
}

fn controller(defer_commit: bool) -> PanZoom {
    let config = PanZoomConfig {
        defer_commit,
        boundary: BoundaryConfig::enabled(0.2, 0.2),
        ..PanZoomConfig::default()
    };
    let mut pz = PanZoom::new(config, Host::new(Frames::default(), Sink)).unwrap();
    pz.init(StaticGeometry::new(
        Rect::new(0.0, 0.0, 1280.0, 800.0),
        Rect::new(0.0, 0.0, 2048.0, 1536.0),
    ))
    .unwrap();
    pz
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/drag");
    let moves: Vec<PointerEvent> = (0..512)
        .map(|i| {
            let t = f64::from(i);
            PointerEvent::new((400.0 + t * 3.0, 300.0 - t * 1.5))
        })
        .collect();

    for defer_commit in [true, false] {
        let label = if defer_commit { "deferred" } else { "committed" };
        group.bench_with_input(BenchmarkId::new(label, moves.len()), &moves, |b, moves| {
            b.iter_batched(
                || controller(defer_commit),
                |mut pz| {
                    pz.pointer_down(&PointerEvent::new((400.0, 300.0))).unwrap();
                    for event in moves {
                        pz.pointer_move(event).unwrap();
                    }
                    pz.pointer_up(&PointerEvent::new((400.0, 300.0)));
                    black_box(pz.state());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
