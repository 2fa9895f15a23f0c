#![forbid(unsafe_code)]

//! Presentation state machine: show/hide sequences, swipe application, and
//! the lifecycle guard.
//!
//! The presenter owns the overlay's authoritative state: the lifecycle
//! [`OverlayPhase`], the three animated cells (backdrop opacity, vertical
//! content offset, content scale), the close-affordance flag, and the payload
//! handed to [`show`]. Entry and exit are ordered two-step sequences driven
//! by cell completions:
//!
//! - show: the backdrop fades to its ceiling, **then** the content slides in;
//! - hide: the content slides out to the parked sentinel, **then** the
//!   backdrop fades away.
//!
//! Each step is armed with the [`Generation`] returned by `animate_to` and
//! advances only when that exact generation completes, so a superseding
//! `show`/`hide` silently disarms the sequence it interrupts. Completions
//! forward surplus tick time into the step they arm, and zero-length steps
//! drain synchronously inside `show`/`hide` themselves.
//!
//! # Invariants
//! - `Shown` is the only phase in which swipe capture is permitted.
//! - The close affordance is lit whenever the overlay is visible, except
//!   during an exit sequence (cleared before the slide-out starts).
//! - A superseded sequence's continuation never runs: it cannot flip
//!   visibility and cannot fire `on_close`.
//! - After [`detach`], no entry point mutates state and no hook fires.
//!
//! # Failure Modes
//! - Out-of-range targets are clamped by the cells, never rejected.
//! - A completion arriving for a generation nothing is armed on is dropped.
//!
//! [`show`]: Presenter::show
//! [`detach`]: Presenter::detach

use std::fmt;
use std::time::Duration;

use veil_core::{AnimatedCell, Generation, Viewport};

use crate::config::OverlayConfig;
use crate::gesture::SwipeCommand;
use crate::paint::{PaintFlags, PaintSnapshot};

#[cfg(feature = "tracing")]
fn log_phase(from: OverlayPhase, to: OverlayPhase) {
    tracing::debug!(message = "overlay.phase", from = ?from, to = ?to);
}

// ============================================================================
// Phase
// ============================================================================

/// Lifecycle phase of the overlay presentation.
///
/// State machine: Hidden → Showing → Shown → Hiding → Hidden.
///
/// Rapid show/hide can skip phases (e.g. Hiding → Showing directly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Fully dismissed; content parked off-screen.
    #[default]
    Hidden,
    /// Entry sequence in flight: fade in, then slide in.
    Showing,
    /// Fully presented. The only phase that accepts swipe capture.
    Shown,
    /// Exit sequence in flight: slide out, then fade out.
    Hiding,
}

impl OverlayPhase {
    /// Whether the overlay should be rendered.
    #[inline]
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether an entry or exit sequence is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Showing | Self::Hiding)
    }
}

// ============================================================================
// Sequence steps
// ============================================================================

/// The armed continuation of an entry or exit sequence.
///
/// Each variant holds the generation of the tween whose completion advances
/// the sequence. A superseded generation never completes, so a replaced
/// sequence's continuation can never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SequenceStep {
    /// Backdrop fade-in running; completion starts the slide-in.
    FadeIn(Generation),
    /// Slide-in running; completion settles the machine in `Shown`.
    SlideIn(Generation),
    /// Slide-out running; completion starts the fade-out.
    SlideOut(Generation),
    /// Fade-out running; completion hides, clears the payload, and fires
    /// `on_close`.
    FadeOut(Generation),
}

// ============================================================================
// Presenter
// ============================================================================

/// The presentation state machine for one overlay instance.
///
/// `T` is the payload handed to [`show`] and held while presented; the
/// machine never inspects it.
///
/// [`show`]: Presenter::show
pub struct Presenter<T> {
    config: OverlayConfig,
    viewport: Viewport,
    phase: OverlayPhase,
    step: Option<SequenceStep>,
    /// Backdrop opacity, bounded to [0, max_opacity].
    opacity: AnimatedCell,
    /// Content vertical offset, bounded to [0, parked sentinel].
    offset: AnimatedCell,
    /// Content scale. Held at 1.0; carried in the snapshot but no current
    /// transition drives it.
    scale: AnimatedCell,
    show_close_affordance: bool,
    payload: Option<T>,
    dirty: PaintFlags,
    attached: bool,
    on_show: Option<Box<dyn FnMut()>>,
    on_close: Option<Box<dyn FnMut()>>,
}

impl<T> Presenter<T> {
    /// Create a hidden presenter parked against `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport, config: OverlayConfig) -> Self {
        let parked = viewport.parked_offset();
        Self {
            config,
            viewport,
            phase: OverlayPhase::Hidden,
            step: None,
            opacity: AnimatedCell::new(0.0).with_bounds(0.0, config.max_opacity),
            offset: AnimatedCell::new(parked).with_bounds(0.0, parked),
            scale: AnimatedCell::new(1.0),
            show_close_affordance: false,
            payload: None,
            dirty: PaintFlags::empty(),
            attached: true,
            on_show: None,
            on_close: None,
        }
    }

    /// The configuration this machine animates with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// The viewport the machine is parked against.
    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current lifecycle phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Whether the overlay should be rendered.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    /// Whether any cell has a tween in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.offset.is_animating() || self.scale.is_animating()
    }

    /// Whether the machine still accepts mutations.
    #[inline]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The payload passed to the most recent [`show`](Self::show), while one
    /// is held.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Current backdrop opacity.
    #[inline]
    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Current content vertical offset in pixels (0 = fully presented).
    #[inline]
    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset.value()
    }

    /// Whether the close affordance should be rendered.
    #[inline]
    #[must_use]
    pub fn close_affordance(&self) -> bool {
        self.show_close_affordance
    }

    /// Current paint properties as one value.
    #[must_use]
    pub fn snapshot(&self) -> PaintSnapshot {
        PaintSnapshot {
            visible: self.is_visible(),
            backdrop_opacity: self.opacity.value(),
            offset_y: self.offset.value(),
            scale: self.scale.value(),
            close_affordance: self.show_close_affordance,
        }
    }

    /// Register the hook [`show`](Self::show) fires synchronously.
    pub fn on_show(&mut self, hook: impl FnMut() + 'static) {
        self.on_show = Some(Box::new(hook));
    }

    /// Register the hook fired when an exit sequence fully completes.
    pub fn on_close(&mut self, hook: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(hook));
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Present the overlay with `payload`.
    ///
    /// Visibility and the close affordance apply immediately and `on_show`
    /// fires synchronously; the entry sequence (fade in, then slide in) then
    /// runs over the configured base duration per step. Calling `show` again
    /// replaces the payload, re-fires the hook, and restarts the sequence;
    /// whatever sequence was in flight is disarmed.
    pub fn show(&mut self, payload: T) {
        if !self.attached {
            return;
        }
        self.payload = Some(payload);
        if !self.show_close_affordance {
            self.show_close_affordance = true;
            self.dirty.insert(PaintFlags::AFFORDANCE);
        }
        self.set_phase(OverlayPhase::Showing);
        self.fire_on_show();
        let fade = self.drive_opacity(self.config.max_opacity, self.config.base_duration);
        self.step = Some(SequenceStep::FadeIn(fade));
        self.pump(Duration::ZERO);
    }

    /// Dismiss the overlay.
    ///
    /// No-op while fully hidden. The close affordance clears immediately;
    /// the exit sequence (slide out, then fade out) then runs, and its full
    /// completion flips visibility, clears the payload, and fires `on_close`.
    pub fn hide(&mut self) {
        if !self.attached || self.phase == OverlayPhase::Hidden {
            return;
        }
        if self.show_close_affordance {
            self.show_close_affordance = false;
            self.dirty.insert(PaintFlags::AFFORDANCE);
        }
        self.set_phase(OverlayPhase::Hiding);
        let slide = self.drive_offset(self.viewport.parked_offset(), self.config.base_duration);
        self.step = Some(SequenceStep::SlideOut(slide));
        self.pump(Duration::ZERO);
    }

    /// Apply one interpreted swipe command.
    ///
    /// `Track` writes the backdrop synchronously (it must follow the finger
    /// exactly) and, when present, chases the finger with the offset cell.
    /// `SnapBack` returns the content to fully presented. `Dismiss` takes the
    /// ordinary exit path.
    pub fn apply(&mut self, command: SwipeCommand) {
        if !self.attached {
            return;
        }
        match command {
            SwipeCommand::Ignore => {}
            SwipeCommand::Track { opacity, chase } => {
                let before = self.opacity.value();
                self.opacity.set(opacity);
                if self.opacity.value() != before {
                    self.dirty.insert(PaintFlags::BACKDROP);
                }
                if let Some(chase) = chase {
                    self.drive_offset(chase.target, chase.duration);
                }
            }
            SwipeCommand::SnapBack { duration } => {
                self.drive_offset(0.0, duration);
            }
            SwipeCommand::Dismiss => self.hide(),
        }
    }

    /// Replace the viewport after a host resize.
    ///
    /// Cell bounds re-clamp immediately; while hidden the offset re-parks to
    /// the new sentinel so the next entry starts from off-screen.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if !self.attached {
            return;
        }
        self.viewport = viewport;
        let parked = viewport.parked_offset();
        self.offset.set_bounds(0.0, parked);
        if self.phase == OverlayPhase::Hidden {
            self.offset.set(parked);
        }
    }

    /// Sever the machine from its owner.
    ///
    /// One-way: every later entry point is a no-op, in-flight tweens freeze,
    /// and hooks are never invoked again.
    pub fn detach(&mut self) {
        #[cfg(feature = "tracing")]
        if self.attached {
            tracing::debug!(message = "overlay.detach", phase = ?self.phase);
        }
        self.attached = false;
    }

    /// Advance animations by `dt` and report what changed.
    ///
    /// Cells tick first; a completion matching the armed step advances the
    /// sequence, forwarding surplus time into the step it arms, so one large
    /// tick can traverse an entire show or hide. The returned mask includes
    /// bits accumulated by mutations since the previous tick.
    pub fn tick(&mut self, dt: Duration) -> PaintFlags {
        if !self.attached {
            return PaintFlags::empty();
        }

        let scale = self.scale.tick(dt);
        if scale.changed {
            self.dirty.insert(PaintFlags::SCALE);
        }
        let opacity = self.opacity.tick(dt);
        if opacity.changed {
            self.dirty.insert(PaintFlags::BACKDROP);
        }
        let offset = self.offset.tick(dt);
        if offset.changed {
            self.dirty.insert(PaintFlags::OFFSET);
        }

        let carry = match self.step {
            Some(SequenceStep::FadeIn(g) | SequenceStep::FadeOut(g))
                if opacity.completed == Some(g) =>
            {
                opacity.overshoot
            }
            Some(SequenceStep::SlideIn(g) | SequenceStep::SlideOut(g))
                if offset.completed == Some(g) =>
            {
                offset.overshoot
            }
            _ => Duration::ZERO,
        };
        self.pump(carry);

        std::mem::take(&mut self.dirty)
    }

    // ------------------------------------------------------------------
    // Sequence plumbing
    // ------------------------------------------------------------------

    /// Follow the armed sequence through every step that has already run to
    /// its target, arming successors as it goes. `carry` is surplus tick
    /// time spent on each newly armed step; zero-length steps complete
    /// inside `animate_to` and drain here in the same pass.
    fn pump(&mut self, mut carry: Duration) {
        loop {
            match self.step {
                Some(SequenceStep::FadeIn(generation)) if self.opacity.completed(generation) => {
                    let slide = self.drive_offset(0.0, self.config.base_duration);
                    self.step = Some(SequenceStep::SlideIn(slide));
                    carry = self.spend_on_offset(carry);
                }
                Some(SequenceStep::SlideIn(generation)) if self.offset.completed(generation) => {
                    self.step = None;
                    self.set_phase(OverlayPhase::Shown);
                }
                Some(SequenceStep::SlideOut(generation)) if self.offset.completed(generation) => {
                    let fade = self.drive_opacity(0.0, self.config.base_duration);
                    self.step = Some(SequenceStep::FadeOut(fade));
                    carry = self.spend_on_opacity(carry);
                }
                Some(SequenceStep::FadeOut(generation)) if self.opacity.completed(generation) => {
                    self.step = None;
                    self.set_phase(OverlayPhase::Hidden);
                    // Re-park exactly; a resize mid-exit may have moved the
                    // sentinel out from under the slide-out target.
                    self.offset.set(self.viewport.parked_offset());
                    self.payload = None;
                    self.fire_on_close();
                }
                _ => return,
            }
        }
    }

    /// Tween the opacity cell toward `target`, flagging the snap a
    /// zero-length tween performs immediately.
    fn drive_opacity(&mut self, target: f32, duration: Duration) -> Generation {
        let before = self.opacity.value();
        let generation = self.opacity.animate_to(target, duration, self.config.easing);
        if self.opacity.value() != before {
            self.dirty.insert(PaintFlags::BACKDROP);
        }
        generation
    }

    /// Tween the offset cell toward `target`, flagging the snap a
    /// zero-length tween performs immediately.
    fn drive_offset(&mut self, target: f32, duration: Duration) -> Generation {
        let before = self.offset.value();
        let generation = self.offset.animate_to(target, duration, self.config.easing);
        if self.offset.value() != before {
            self.dirty.insert(PaintFlags::OFFSET);
        }
        generation
    }

    fn spend_on_opacity(&mut self, carry: Duration) -> Duration {
        if carry.is_zero() {
            return Duration::ZERO;
        }
        let tick = self.opacity.tick(carry);
        if tick.changed {
            self.dirty.insert(PaintFlags::BACKDROP);
        }
        tick.overshoot
    }

    fn spend_on_offset(&mut self, carry: Duration) -> Duration {
        if carry.is_zero() {
            return Duration::ZERO;
        }
        let tick = self.offset.tick(carry);
        if tick.changed {
            self.dirty.insert(PaintFlags::OFFSET);
        }
        tick.overshoot
    }

    fn set_phase(&mut self, to: OverlayPhase) {
        if self.phase == to {
            return;
        }
        #[cfg(feature = "tracing")]
        log_phase(self.phase, to);
        if self.phase.is_visible() != to.is_visible() {
            self.dirty.insert(PaintFlags::VISIBILITY);
        }
        self.phase = to;
    }

    fn fire_on_show(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(hook) = &mut self.on_show {
            hook();
        }
    }

    fn fire_on_close(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(hook) = &mut self.on_close {
            hook();
        }
    }
}

impl<T> fmt::Debug for Presenter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("phase", &self.phase)
            .field("step", &self.step)
            .field("opacity", &self.opacity.value())
            .field("offset", &self.offset.value())
            .field("show_close_affordance", &self.show_close_affordance)
            .field("has_payload", &self.payload.is_some())
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
