#![forbid(unsafe_code)]

//! Input events fed by the host.
//!
//! The host owns event capture and hit-testing; the engine consumes a small,
//! already-normalized vocabulary: pointer samples with absolute positions,
//! dismiss requests (whatever the host maps escape/back to), focus changes,
//! and viewport resizes.

use crate::geometry::Point;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Contact began.
    Down,
    /// Contact moved while held.
    Move,
    /// Contact ended normally (finger lifted, button released).
    Up,
    /// Contact was taken away by the system (gesture stolen, stream reset).
    Cancel,
}

/// One pointer sample: an absolute position and the phase it arrived in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub phase: PointerPhase,
}

impl PointerSample {
    /// Create a sample with an explicit phase.
    #[inline]
    #[must_use]
    pub const fn new(position: Point, phase: PointerPhase) -> Self {
        Self { position, phase }
    }

    /// A `Down` sample at (x, y).
    #[inline]
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), PointerPhase::Down)
    }

    /// A `Move` sample at (x, y).
    #[inline]
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), PointerPhase::Move)
    }

    /// An `Up` sample at (x, y).
    #[inline]
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), PointerPhase::Up)
    }

    /// A `Cancel` sample at (x, y).
    #[inline]
    #[must_use]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), PointerPhase::Cancel)
    }
}

/// An input event from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer sample (touch or mouse, host's choice).
    Pointer(PointerSample),
    /// The host's escape/back equivalent. Routes to the dismiss path.
    DismissRequest,
    /// Focus gained (`true`) or lost (`false`). Losing focus aborts any
    /// captured gesture.
    Focus(bool),
    /// The host surface changed size.
    Resize { width: f32, height: f32 },
}

impl From<PointerSample> for InputEvent {
    #[inline]
    fn from(sample: PointerSample) -> Self {
        InputEvent::Pointer(sample)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
