#![forbid(unsafe_code)]

//! Event-facing shell: routes host input into gesture interpretation and the
//! presentation machine.
//!
//! [`Overlay`] is the type hosts embed. It owns a [`Presenter`], a
//! [`SwipeTracker`], and a [`SwipeInterpreter`] and exposes three host-loop
//! entry points: [`handle_event`] for input, [`tick`] for time, and [`paint`]
//! for output. Hit testing stays on the host side; pointer events arrive with
//! the [`HitRegion`] the host resolved for the press.
//!
//! Routing:
//! - press + release on the backdrop or the close affordance, without the
//!   drag ever being captured, dismisses;
//! - a captured drag is fed through the interpreter sample by sample and
//!   resolved on release or termination;
//! - a dismiss request (hardware back, escape) dismisses whenever visible;
//! - focus loss terminates any captured drag;
//! - resizes re-park the machine and are never consumed.
//!
//! # Invariants
//! - Capture begins only in the `Shown` phase and only on a press the host
//!   hit-tested onto the overlay.
//! - A tracked press is abandoned the moment the phase leaves `Shown`; stale
//!   samples can never steer an exit sequence.
//! - A detached shell ignores every event.
//!
//! [`handle_event`]: Overlay::handle_event
//! [`tick`]: Overlay::tick
//! [`paint`]: Overlay::paint

use std::fmt;
use std::time::Duration;

#[cfg(feature = "tracing")]
use web_time::Instant;

use veil_core::{InputEvent, PointerPhase, PointerSample, Viewport};

use crate::config::OverlayConfig;
use crate::gesture::{SwipeInterpreter, SwipeTracker};
use crate::paint::{PaintFlags, PaintSnapshot};
use crate::presenter::{OverlayPhase, Presenter};

// ============================================================================
// Hit regions and outcomes
// ============================================================================

/// Where a press landed, as resolved by the host's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The dimmed scrim behind the content. A tap here dismisses.
    Backdrop,
    /// The presented content itself. Taps here are the host's business.
    Content,
    /// The dismiss control. A tap here dismisses.
    CloseAffordance,
}

/// What the shell did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not for us; the host should keep routing it.
    Ignored,
    /// Handled to completion (a tap or request resolved).
    Consumed,
    /// Mid-drag: the overlay has claimed the pointer stream and the host
    /// should stop delivering it elsewhere.
    Captured,
}

// ============================================================================
// Shell
// ============================================================================

/// A swipe-dismissable overlay: presenter, tracker, and interpreter wired to
/// a host event loop.
pub struct Overlay<T> {
    presenter: Presenter<T>,
    tracker: SwipeTracker,
    interpreter: SwipeInterpreter,
}

impl<T> Overlay<T> {
    /// Create a hidden overlay parked against `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport, config: OverlayConfig) -> Self {
        Self {
            presenter: Presenter::new(viewport, config),
            tracker: SwipeTracker::new(),
            interpreter: SwipeInterpreter::new(config),
        }
    }

    /// Route one host event.
    ///
    /// `hit` is the region the host's hit testing resolved for a pointer
    /// press; it is ignored for every other event kind.
    pub fn handle_event(&mut self, event: &InputEvent, hit: Option<HitRegion>) -> EventOutcome {
        if !self.presenter.is_attached() {
            return EventOutcome::Ignored;
        }
        match *event {
            InputEvent::Pointer(sample) => self.handle_pointer(sample, hit),
            InputEvent::DismissRequest => {
                if !self.presenter.is_visible() {
                    return EventOutcome::Ignored;
                }
                self.presenter.hide();
                EventOutcome::Consumed
            }
            InputEvent::Focus(gained) => {
                if gained {
                    return EventOutcome::Ignored;
                }
                self.abandon_stale_press();
                if self.terminate_capture() {
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            InputEvent::Resize { width, height } => {
                self.presenter.set_viewport(Viewport::new(width, height));
                EventOutcome::Ignored
            }
        }
    }

    /// Advance animations by `dt` and report which paint properties changed.
    pub fn tick(&mut self, dt: Duration) -> PaintFlags {
        #[cfg(feature = "tracing")]
        let tick_start = Instant::now();
        #[cfg(feature = "tracing")]
        let tick_span = tracing::debug_span!(
            "overlay.tick",
            phase = ?self.presenter.phase(),
            animating = self.presenter.is_animating(),
            tick_duration_us = tracing::field::Empty,
        );
        #[cfg(feature = "tracing")]
        let _tick_guard = tick_span.enter();

        let flags = self.presenter.tick(dt);

        #[cfg(feature = "tracing")]
        tick_span.record("tick_duration_us", tick_start.elapsed().as_micros() as u64);

        flags
    }

    /// Current paint properties.
    #[must_use]
    pub fn paint(&self) -> PaintSnapshot {
        self.presenter.snapshot()
    }

    // ------------------------------------------------------------------
    // Presentation passthroughs
    // ------------------------------------------------------------------

    /// Present the overlay with `payload`. See [`Presenter::show`].
    pub fn show(&mut self, payload: T) {
        self.presenter.show(payload);
    }

    /// Dismiss the overlay. See [`Presenter::hide`].
    pub fn hide(&mut self) {
        self.presenter.hide();
    }

    /// Sever the overlay from its owner; every later event and tick is
    /// ignored.
    pub fn detach(&mut self) {
        self.tracker.reset();
        self.presenter.detach();
    }

    /// Register the hook fired synchronously by [`show`](Self::show).
    pub fn on_show(&mut self, hook: impl FnMut() + 'static) {
        self.presenter.on_show(hook);
    }

    /// Register the hook fired when an exit sequence fully completes.
    pub fn on_close(&mut self, hook: impl FnMut() + 'static) {
        self.presenter.on_close(hook);
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.presenter.phase()
    }

    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.presenter.is_visible()
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.presenter.is_animating()
    }

    #[inline]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.presenter.is_attached()
    }

    #[inline]
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        self.presenter.payload()
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        self.presenter.config()
    }

    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.presenter.viewport()
    }

    // ------------------------------------------------------------------
    // Pointer routing
    // ------------------------------------------------------------------

    fn handle_pointer(&mut self, sample: PointerSample, hit: Option<HitRegion>) -> EventOutcome {
        self.abandon_stale_press();
        match sample.phase {
            PointerPhase::Down => {
                if self.presenter.phase() == OverlayPhase::Shown {
                    if let Some(region) = hit {
                        self.tracker.begin(sample.position, region);
                    }
                }
                // A press alone decides nothing; taps resolve on release.
                EventOutcome::Ignored
            }
            PointerPhase::Move => {
                let Some(delta_y) = self.tracker.delta_y(sample.position) else {
                    return EventOutcome::Ignored;
                };
                if !self.tracker.is_captured() {
                    if !self.interpreter.should_capture(delta_y) {
                        return EventOutcome::Ignored;
                    }
                    self.tracker.capture();
                }
                let command = self.interpreter.on_move(
                    delta_y,
                    self.presenter.offset_y(),
                    self.presenter.viewport(),
                );
                self.presenter.apply(command);
                EventOutcome::Captured
            }
            PointerPhase::Up => {
                let delta_y = self.tracker.delta_y(sample.position);
                let captured = self.tracker.is_captured();
                let region = self.tracker.region();
                self.tracker.reset();
                if captured {
                    if let Some(delta_y) = delta_y {
                        let command =
                            self.interpreter.on_release(delta_y, self.presenter.viewport());
                        self.presenter.apply(command);
                    }
                    return EventOutcome::Consumed;
                }
                match region {
                    Some(HitRegion::Backdrop | HitRegion::CloseAffordance) => {
                        self.presenter.hide();
                        EventOutcome::Consumed
                    }
                    Some(HitRegion::Content) | None => EventOutcome::Ignored,
                }
            }
            PointerPhase::Cancel => {
                if self.terminate_capture() {
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    /// Drop a tracked press the moment the phase leaves `Shown` (a dismiss
    /// request or programmatic hide mid-drag). Later samples from that press
    /// must not steer the exit sequence.
    fn abandon_stale_press(&mut self) {
        if self.tracker.is_tracking() && self.presenter.phase() != OverlayPhase::Shown {
            self.tracker.reset();
        }
    }

    /// Resolve a system-initiated gesture abort: captured drags snap back,
    /// anything else is just forgotten. Returns whether a capture ended.
    fn terminate_capture(&mut self) -> bool {
        let captured = self.tracker.is_captured();
        if captured {
            let command = self
                .interpreter
                .on_terminate(self.presenter.offset_y(), self.presenter.viewport());
            self.presenter.apply(command);
        }
        self.tracker.reset();
        captured
    }
}

impl<T> fmt::Debug for Overlay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("presenter", &self.presenter)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
