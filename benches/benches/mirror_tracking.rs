// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_mirror::emitter::MirrorEvent;
use understory_mirror::headless::{HeadlessElement, HeadlessEmitter};
use understory_mirror::options::MirrorOverrides;
use understory_mirror::plugin::MirrorPlugin;
use understory_mirror::schedule::{FrameQueue, Immediate};
use understory_mirror::tracker::tracked_translation;
use understory_mirror::types::{Axes, MirrorOffset, SensorEvent, TrackedPosition};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_f64(&mut self) -> f64 {
        // xorshift64*
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        let v = x.wrapping_mul(0x2545_F491_4F6C_DD1D);
        (v >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gen_pointer_path(n: usize, seed: u64) -> Vec<SensorEvent> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| SensorEvent::new(rng.next_f64() * 1920.0, rng.next_f64() * 1080.0))
        .collect()
}

fn bench_translation(c: &mut Criterion) {
    let path = gen_pointer_path(10_000, 0xC0FFEE);
    let offset = MirrorOffset {
        top: 12.0,
        left: 30.0,
    };
    let last = TrackedPosition {
        last_x: 120.0,
        last_y: 64.0,
    };
    let mut group = c.benchmark_group("tracked_translation");
    group.throughput(Throughput::Elements(path.len() as u64));
    for (name, axes) in [
        ("both", Axes::X | Axes::Y),
        ("x_only", Axes::X),
        ("none", Axes::empty()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for s in &path {
                    black_box(tracked_translation(s, offset, last, axes));
                }
            });
        });
    }
    group.finish();
}

fn setup_session<S: understory_mirror::schedule::Scheduler + 'static>(
    scheduler: S,
    overrides: MirrorOverrides,
) -> (
    HeadlessEmitter<HeadlessElement>,
    MirrorPlugin<HeadlessElement, S>,
    HeadlessElement,
) {
    let mut session = HeadlessEmitter::new().with_overrides(overrides);
    let mut plugin = MirrorPlugin::new(&session, scheduler);
    plugin.attach(&mut session);
    let source = HeadlessElement::new();
    source.set_bounds(Some(Rect::from_origin_size((120.0, 64.0), Size::new(240.0, 48.0))));
    let mirror = HeadlessElement::new();
    session.emit(&MirrorEvent::Created {
        mirror: mirror.clone(),
        source,
        sensor: SensorEvent::new(150.0, 76.0),
    });
    (session, plugin, mirror)
}

fn bench_session_moves(c: &mut Criterion) {
    let path = gen_pointer_path(1_000, 42);
    let mut group = c.benchmark_group("session_moves");
    group.throughput(Throughput::Elements(path.len() as u64));

    group.bench_function("immediate", |b| {
        b.iter_batched(
            || setup_session(Immediate, MirrorOverrides::default()),
            |(session, _plugin, mirror)| {
                for s in &path {
                    session.emit(&MirrorEvent::Moved {
                        mirror: mirror.clone(),
                        sensor: *s,
                    });
                }
                black_box(mirror.transform())
            },
            BatchSize::SmallInput,
        );
    });

    // Eight moves per refresh, the common case for high-rate pointers.
    group.bench_function("frame_queue_8_per_frame", |b| {
        b.iter_batched(
            || setup_session(FrameQueue::new(), MirrorOverrides::default()),
            |(session, plugin, mirror)| {
                for chunk in path.chunks(8) {
                    for s in chunk {
                        session.emit(&MirrorEvent::Moved {
                            mirror: mirror.clone(),
                            sensor: *s,
                        });
                    }
                    plugin.scheduler().flush();
                }
                black_box(mirror.transform())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_translation, bench_session_moves);
criterion_main!(benches);
