#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;
use veil_core::{InputEvent, PointerSample, Viewport};
use veil_overlay::{HitRegion, Overlay, OverlayConfig, OverlayPhase};

fuzz_target!(|data: &[u8]| {
    // Use the first two bytes to derive the surface height (100..1380 px).
    if data.len() < 2 {
        return;
    }
    let height = 100.0 + f32::from(u16::from_le_bytes([data[0], data[1]]) % 1280);
    let mut overlay: Overlay<u8> =
        Overlay::new(Viewport::new(400.0, height), OverlayConfig::default());

    // The remaining bytes decode as an op stream, three bytes per op.
    for chunk in data[2..].chunks_exact(3) {
        apply_op(&mut overlay, chunk[0], chunk[1], chunk[2]);
        check(&overlay, chunk[0]);
    }

    // A detached overlay must freeze exactly where the stream left it.
    overlay.detach();
    let frozen = overlay.paint();
    overlay.show(0);
    overlay.hide();
    overlay.handle_event(&InputEvent::DismissRequest, None);
    overlay.tick(Duration::from_millis(1_000));
    assert_eq!(overlay.paint(), frozen, "detached overlay moved");
});

fn apply_op(overlay: &mut Overlay<u8>, op: u8, a: u8, b: u8) {
    let x = f32::from(a);
    // Usually -512..1528, landing above, inside, and below the surface; a
    // set top bit on the op byte swaps in a far-field magnitude that pushes
    // the duration formulas into saturation.
    let y = if op & 0x80 == 0 {
        f32::from(b) * 8.0 - 512.0
    } else {
        f32::from(b) * 1.0e28
    };
    match op % 10 {
        0 => overlay.show(a),
        1 => overlay.hide(),
        2 => {
            let hit = match a % 4 {
                0 => None,
                1 => Some(HitRegion::Backdrop),
                2 => Some(HitRegion::Content),
                _ => Some(HitRegion::CloseAffordance),
            };
            overlay.handle_event(&InputEvent::Pointer(PointerSample::down(x, y)), hit);
        }
        3 => {
            overlay.handle_event(&InputEvent::Pointer(PointerSample::moved(x, y)), None);
        }
        4 => {
            overlay.handle_event(&InputEvent::Pointer(PointerSample::up(x, y)), None);
        }
        5 => {
            overlay.handle_event(&InputEvent::Pointer(PointerSample::cancel(x, y)), None);
        }
        6 => {
            overlay.handle_event(&InputEvent::DismissRequest, None);
        }
        7 => {
            overlay.handle_event(&InputEvent::Focus(a % 2 == 0), None);
        }
        8 => {
            let height = 50.0 + f32::from(u16::from_le_bytes([a, b]) % 1950);
            overlay.handle_event(
                &InputEvent::Resize {
                    width: 400.0,
                    height,
                },
                None,
            );
        }
        _ => {
            let millis = u64::from(u16::from_le_bytes([a, b]) % 2_000);
            overlay.tick(Duration::from_millis(millis));
        }
    }
}

// Post-conditions that must hold after every op:
fn check(overlay: &Overlay<u8>, op: u8) {
    let paint = overlay.paint();
    let ceiling = overlay.config().max_opacity;
    let parked = overlay.viewport().parked_offset();

    assert!(
        paint.backdrop_opacity >= 0.0 && paint.backdrop_opacity <= ceiling,
        "opacity {} escaped [0, {ceiling}] after op {op}",
        paint.backdrop_opacity,
    );
    assert!(
        paint.offset_y >= 0.0 && paint.offset_y <= parked,
        "offset {} escaped [0, {parked}] after op {op}",
        paint.offset_y,
    );
    assert_eq!(
        paint.visible,
        overlay.phase() != OverlayPhase::Hidden,
        "visibility out of step with phase",
    );
    assert_eq!(
        paint.close_affordance,
        matches!(overlay.phase(), OverlayPhase::Showing | OverlayPhase::Shown),
        "affordance out of step with phase",
    );
    assert_eq!(
        paint.visible,
        overlay.payload().is_some(),
        "payload out of step with visibility",
    );
}
