//! Benchmark: AnimatedCell hot paths.
//!
//! Run with: `cargo bench -p veil-core --bench cell_bench`
//!
//! Measures the per-frame cost of ticking an in-flight tween, the
//! synchronous-write path a tracked gesture hits on every move sample, and
//! the retarget (supersede) path the offset chase hits when the finger moves.
//! These all sit inside a host's frame loop, so per-call cost matters more
//! than throughput.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use veil_core::{AnimatedCell, Easing};

const FRAME: Duration = Duration::from_micros(16_667);
const MS_300: Duration = Duration::from_millis(300);

fn tween_cell() -> AnimatedCell {
    let mut cell = AnimatedCell::new(0.0).with_bounds(0.0, 1600.0);
    cell.animate_to(1600.0, MS_300, Easing::EaseInOut);
    cell
}

// ===========================================================================
// Tick: advance an in-flight tween by one frame
// ===========================================================================

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_tick");

    group.bench_function("mid_flight_frame", |b| {
        let mut cell = tween_cell();
        b.iter(|| {
            let t = cell.tick(black_box(FRAME));
            // Rearm when the tween runs out so every iteration ticks a live one.
            if t.completed.is_some() {
                cell.set(0.0);
                cell.animate_to(1600.0, MS_300, Easing::EaseInOut);
            }
            black_box(t.changed)
        });
    });

    group.bench_function("idle_frame", |b| {
        let mut cell = AnimatedCell::new(0.5).with_bounds(0.0, 1.0);
        b.iter(|| black_box(cell.tick(black_box(FRAME))));
    });

    group.finish();
}

// ===========================================================================
// Writes: synchronous set and retargeting an in-flight tween
// ===========================================================================

fn bench_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_writes");

    group.bench_function("set_tracked_value", |b| {
        let mut cell = AnimatedCell::new(0.8).with_bounds(0.0, 0.8);
        let mut value = 0.0f32;
        b.iter(|| {
            value = (value + 0.013) % 0.8;
            black_box(cell.set(black_box(value)))
        });
    });

    group.bench_function("retarget_in_flight", |b| {
        let mut cell = tween_cell();
        let mut target = 0.0f32;
        b.iter(|| {
            target = (target + 37.0) % 1600.0;
            black_box(cell.animate_to(black_box(target), MS_300, Easing::EaseInOut))
        });
    });

    group.finish();
}

// ===========================================================================
// Easing curves
// ===========================================================================

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing_apply");

    for (name, easing) in [
        ("linear", Easing::Linear),
        ("ease_in_out", Easing::EaseInOut),
    ] {
        group.bench_function(name, |b| {
            let mut t = 0.0f32;
            b.iter(|| {
                t = (t + 0.0173) % 1.0;
                black_box(easing.apply(black_box(t)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_writes, bench_easing);
criterion_main!(benches);
