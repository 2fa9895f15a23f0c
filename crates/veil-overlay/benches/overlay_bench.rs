//! Benchmark: overlay event routing and tick hot paths.
//!
//! Run with: `cargo bench -p veil-overlay --bench overlay_bench`
//!
//! Measures the two calls a host makes every frame while the user is
//! dragging: `handle_event` on a captured move sample (interpret + apply)
//! and `tick` while the offset chase is in flight. Also covers the pure
//! interpreter so regressions in routing and in decision math show up
//! separately.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use veil_overlay::{
    HitRegion, InputEvent, Overlay, OverlayConfig, PointerSample, SwipeInterpreter, Viewport,
};

const VIEWPORT: Viewport = Viewport::new(400.0, 800.0);
const FRAME: Duration = Duration::from_micros(16_667);
const MS_700: Duration = Duration::from_millis(700);

fn shown_overlay() -> Overlay<u32> {
    let mut overlay = Overlay::new(VIEWPORT, OverlayConfig::default());
    overlay.show(1);
    overlay.tick(MS_700);
    overlay
}

/// An overlay mid-drag: pressed on the content and captured at delta 100.
fn dragging_overlay() -> Overlay<u32> {
    let mut overlay = shown_overlay();
    overlay.handle_event(
        &InputEvent::Pointer(PointerSample::down(200.0, 100.0)),
        Some(HitRegion::Content),
    );
    overlay.handle_event(&InputEvent::Pointer(PointerSample::moved(200.0, 200.0)), None);
    overlay
}

// ===========================================================================
// Event routing
// ===========================================================================

fn bench_handle_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_handle_event");

    group.bench_function("captured_move_sample", |b| {
        let mut overlay = dragging_overlay();
        let mut y = 200.0f32;
        b.iter(|| {
            // Wander between 180 and 520 px so the chase keeps retargeting.
            y = 180.0 + (y + 7.0 - 180.0) % 340.0;
            let sample = PointerSample::moved(200.0, y);
            black_box(overlay.handle_event(&InputEvent::Pointer(sample), None))
        });
    });

    group.bench_function("ignored_sub_threshold_move", |b| {
        let mut overlay = shown_overlay();
        overlay.handle_event(
            &InputEvent::Pointer(PointerSample::down(200.0, 100.0)),
            Some(HitRegion::Content),
        );
        b.iter(|| {
            let sample = PointerSample::moved(200.0, 108.0);
            black_box(overlay.handle_event(&InputEvent::Pointer(sample), None))
        });
    });

    group.finish();
}

// ===========================================================================
// Tick
// ===========================================================================

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_tick");

    group.bench_function("chase_in_flight", |b| {
        let mut overlay = dragging_overlay();
        let mut y = 200.0f32;
        b.iter(|| {
            let flags = overlay.tick(black_box(FRAME));
            // Keep a tween alive: nudge the finger whenever the chase settles.
            if flags.is_empty() {
                y = 180.0 + (y + 29.0 - 180.0) % 340.0;
                let sample = PointerSample::moved(200.0, y);
                overlay.handle_event(&InputEvent::Pointer(sample), None);
            }
            black_box(flags)
        });
    });

    group.bench_function("settled_frame", |b| {
        let mut overlay = shown_overlay();
        b.iter(|| black_box(overlay.tick(black_box(FRAME))));
    });

    group.finish();
}

// ===========================================================================
// Pure interpreter (no shell, no cells)
// ===========================================================================

fn bench_interpreter(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_interpreter");
    let interpreter = SwipeInterpreter::new(OverlayConfig::default());

    group.bench_function("on_move", |b| {
        let mut delta = 16.0f32;
        b.iter(|| {
            delta = 16.0 + (delta + 11.0 - 16.0) % 500.0;
            black_box(interpreter.on_move(black_box(delta), 120.0, VIEWPORT))
        });
    });

    group.bench_function("on_release", |b| {
        let mut delta = 0.0f32;
        b.iter(|| {
            delta = (delta + 23.0) % 700.0;
            black_box(interpreter.on_release(black_box(delta), VIEWPORT))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_handle_event, bench_tick, bench_interpreter);
criterion_main!(benches);
