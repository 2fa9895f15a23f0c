#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use veil_core::Viewport;
use veil_overlay::{OffsetChase, OverlayConfig, OverlayPhase, Presenter, SwipeCommand};

/// One presenter mutation. Floats are raw `Arbitrary` values, so NaN and
/// infinities flow straight into the cells: they must clamp or hold, never
/// escape the bounds.
#[derive(Debug, Arbitrary)]
enum Op {
    Show(u8),
    Hide,
    Track {
        opacity: f32,
        chase: Option<(f32, u16)>,
    },
    SnapBack {
        millis: u16,
    },
    Dismiss,
    Tick {
        millis: u16,
    },
    Resize {
        height: u16,
    },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut presenter: Presenter<u8> =
        Presenter::new(Viewport::new(400.0, 800.0), OverlayConfig::default());

    for op in ops {
        match op {
            Op::Show(payload) => presenter.show(payload),
            Op::Hide => presenter.hide(),
            Op::Track { opacity, chase } => {
                let chase = chase.map(|(target, millis)| OffsetChase {
                    target,
                    duration: Duration::from_millis(u64::from(millis)),
                });
                presenter.apply(SwipeCommand::Track { opacity, chase });
            }
            Op::SnapBack { millis } => presenter.apply(SwipeCommand::SnapBack {
                duration: Duration::from_millis(u64::from(millis)),
            }),
            Op::Dismiss => presenter.apply(SwipeCommand::Dismiss),
            Op::Tick { millis } => {
                presenter.tick(Duration::from_millis(u64::from(millis)));
            }
            Op::Resize { height } => {
                presenter.set_viewport(Viewport::new(400.0, 1.0 + f32::from(height % 4_000)));
            }
        }

        let ceiling = presenter.config().max_opacity;
        let parked = presenter.viewport().parked_offset();
        let opacity = presenter.backdrop_opacity();
        let offset = presenter.offset_y();
        assert!(
            opacity >= 0.0 && opacity <= ceiling,
            "opacity {opacity} escaped [0, {ceiling}]"
        );
        assert!(
            offset >= 0.0 && offset <= parked,
            "offset {offset} escaped [0, {parked}]"
        );
        assert_eq!(presenter.is_visible(), presenter.payload().is_some());
        assert_eq!(
            presenter.close_affordance(),
            matches!(
                presenter.phase(),
                OverlayPhase::Showing | OverlayPhase::Shown
            ),
        );
    }
});
