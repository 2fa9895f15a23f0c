#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use veil_core::{AnimatedCell, Easing, Generation};

#[derive(Debug, Arbitrary)]
enum Op {
    Set(f32),
    Animate { target: f32, millis: u16, easing: u8 },
    Tick { millis: u16 },
    SetBounds { lo: i16, span: u16 },
}

fn easing_from(byte: u8) -> Easing {
    match byte % 4 {
        0 => Easing::Linear,
        1 => Easing::EaseOut,
        2 => Easing::EaseIn,
        _ => Easing::EaseInOut,
    }
}

fuzz_target!(|input: (i16, u16, Vec<Op>)| {
    let (lo, span, ops) = input;
    // Cap op count to keep the completed-generation scan cheap.
    if ops.len() > 256 {
        return;
    }

    let mut min = f32::from(lo);
    let mut max = min + f32::from(span);
    let mut cell = AnimatedCell::new(min).with_bounds(min, max);
    let mut issued: Vec<Generation> = Vec::new();
    let mut superseded: Vec<Generation> = Vec::new();

    for op in ops {
        match op {
            Op::Set(value) => {
                if cell.is_animating() {
                    superseded.push(cell.generation());
                }
                issued.push(cell.set(value));
            }
            Op::Animate {
                target,
                millis,
                easing,
            } => {
                if cell.is_animating() {
                    superseded.push(cell.generation());
                }
                issued.push(cell.animate_to(
                    target,
                    Duration::from_millis(u64::from(millis)),
                    easing_from(easing),
                ));
            }
            Op::Tick { millis } => {
                cell.tick(Duration::from_millis(u64::from(millis)));
            }
            Op::SetBounds { lo, span } => {
                min = f32::from(lo);
                max = min + f32::from(span);
                cell.set_bounds(min, max);
            }
        }

        // Post-conditions that must always hold:
        assert!(
            cell.value() >= min && cell.value() <= max,
            "value {} escaped [{min}, {max}]",
            cell.value(),
        );
        assert!(
            cell.target() >= min && cell.target() <= max,
            "target {} escaped [{min}, {max}]",
            cell.target(),
        );
        assert!(
            issued.iter().filter(|g| cell.completed(**g)).count() <= 1,
            "more than one generation reports completion"
        );
        assert!(
            !superseded.iter().any(|g| cell.completed(*g)),
            "a superseded generation reported completion"
        );
    }
});
