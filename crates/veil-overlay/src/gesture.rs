#![forbid(unsafe_code)]

//! Swipe interpretation: raw vertical drag samples in, declarative commands
//! out.
//!
//! Two pieces cooperate here. [`SwipeTracker`] is pointer bookkeeping: it
//! remembers where contact began, which hit region it began on, and whether
//! the overlay has claimed the stream. [`SwipeInterpreter`] is the pure
//! decision core: given a cumulative `delta_y` (and, where the formulas need
//! it, the offset cell's current value), it emits a [`SwipeCommand`] for the
//! presenter to apply. Keeping the interpreter free of cell access makes
//! every contract testable without a presenter.
//!
//! # Invariants
//! - `should_capture` claims strictly downward drags only; the threshold is
//!   exclusive.
//! - A sample within the capture threshold (in either direction) is `Ignore`:
//!   opacity and offset both hold their last values.
//! - Offset chase commands are emitted only for positive drag ratios; upward
//!   drags dim the backdrop but never move content.
//! - Duration formulas are signed and unclamped; non-positive products become
//!   zero-length tweens, which complete immediately.

use std::time::Duration;

use veil_core::{Point, Viewport, scale_duration};

use crate::config::OverlayConfig;
use crate::shell::HitRegion;

/// An offset tween requested by a swipe command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetChase {
    /// Target offset in pixels.
    pub target: f32,
    /// Tween length. Zero means "snap there now."
    pub duration: Duration,
}

/// What the presenter should do with one gesture callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeCommand {
    /// Sample inside the dead zone: change nothing.
    Ignore,
    /// Mid-drag update: write `opacity` synchronously (the backdrop tracks
    /// the finger exactly) and, for downward drags, chase the finger with the
    /// offset cell.
    Track {
        opacity: f32,
        chase: Option<OffsetChase>,
    },
    /// Release or termination resolved to "snap back to fully presented."
    SnapBack { duration: Duration },
    /// Release crossed the dismiss threshold: run the hide sequence.
    Dismiss,
}

/// The pure decision core of the swipe gesture.
#[derive(Debug, Clone, Copy)]
pub struct SwipeInterpreter {
    config: OverlayConfig,
}

impl SwipeInterpreter {
    /// Create an interpreter with the given configuration.
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    /// The configuration this interpreter decides with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Whether a cumulative downward drag of `delta_y` px claims the pointer
    /// stream. Strictly exclusive threshold; upward drags never capture.
    #[inline]
    #[must_use]
    pub fn should_capture(&self, delta_y: f32) -> bool {
        delta_y > self.config.capture_threshold
    }

    /// Interpret one mid-drag sample.
    ///
    /// `current_offset` is the offset cell's present value; the chase
    /// duration is proportional to how far the cell lags behind the finger,
    /// so small corrections finish fast and large jumps take proportionally
    /// longer. A negative lag (finger moving back above the cell) yields a
    /// zero duration: the offset snaps to the finger.
    #[must_use]
    pub fn on_move(&self, delta_y: f32, current_offset: f32, viewport: Viewport) -> SwipeCommand {
        if delta_y.abs() <= self.config.capture_threshold {
            return SwipeCommand::Ignore;
        }
        let ratio = viewport.ratio_of(delta_y);
        let opacity = (1.0 - ratio) * self.config.max_opacity;
        let chase = if ratio > 0.0 {
            let lag = ratio - viewport.ratio_of(current_offset);
            Some(OffsetChase {
                target: delta_y,
                duration: scale_duration(self.config.base_duration, lag),
            })
        } else {
            None
        };
        SwipeCommand::Track { opacity, chase }
    }

    /// Interpret the end of a captured drag: commit past the dismiss ratio,
    /// snap back below it. The snap-back duration is proportional to the
    /// release ratio, so a release near zero drag snaps almost instantly.
    #[must_use]
    pub fn on_release(&self, delta_y: f32, viewport: Viewport) -> SwipeCommand {
        let ratio = viewport.ratio_of(delta_y);
        let commit = ratio >= self.config.dismiss_ratio;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "swipe.release", ratio, commit);
        if commit {
            SwipeCommand::Dismiss
        } else {
            SwipeCommand::SnapBack {
                duration: scale_duration(self.config.base_duration, ratio),
            }
        }
    }

    /// Interpret a system-initiated gesture abort: always the cancel path,
    /// with the duration proportional to how far out the content currently
    /// sits.
    #[must_use]
    pub fn on_terminate(&self, current_offset: f32, viewport: Viewport) -> SwipeCommand {
        let ratio = viewport.ratio_of(current_offset);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "swipe.terminate", ratio);
        SwipeCommand::SnapBack {
            duration: scale_duration(self.config.base_duration, ratio),
        }
    }
}

/// Pointer-stream bookkeeping for one contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    press: Option<Press>,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    region: HitRegion,
    captured: bool,
}

impl SwipeTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new contact. Any stale press is discarded.
    pub fn begin(&mut self, origin: Point, region: HitRegion) {
        self.press = Some(Press {
            origin,
            region,
            captured: false,
        });
    }

    /// Cumulative vertical distance from the contact origin, if tracking.
    #[inline]
    #[must_use]
    pub fn delta_y(&self, position: Point) -> Option<f32> {
        self.press.map(|press| position.dy_from(press.origin))
    }

    /// The hit region the contact began on, if tracking.
    #[inline]
    #[must_use]
    pub fn region(&self) -> Option<HitRegion> {
        self.press.map(|press| press.region)
    }

    /// Whether a contact is being tracked (captured or not).
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.press.is_some()
    }

    /// Whether the overlay has claimed the tracked stream.
    #[inline]
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.press.is_some_and(|press| press.captured)
    }

    /// Claim the tracked stream. No-op when idle.
    pub fn capture(&mut self) {
        if let Some(press) = &mut self.press {
            press.captured = true;
        }
    }

    /// Drop any tracked contact.
    pub fn reset(&mut self) {
        self.press = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
