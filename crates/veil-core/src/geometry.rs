#![forbid(unsafe_code)]

//! Pixel-space geometric primitives.
//!
//! The overlay engine works in the host's pixel coordinates: pointer samples
//! arrive as `Point`s and the host surface is described by a `Viewport`. The
//! viewport's height is the reference length for everything the engine
//! computes — drag ratios divide by it and the parked offset is derived from
//! it.

/// A point in host pixel coordinates (origin at top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vertical distance from `origin` to this point (positive = downward).
    #[inline]
    #[must_use]
    pub fn dy_from(&self, origin: Point) -> f32 {
        self.y - origin.y
    }
}

/// The host surface dimensions, in pixels.
///
/// Supplied at construction and updated through resize events. A viewport
/// with non-positive height yields zero ratios rather than NaN/infinity so a
/// degenerate host surface cannot poison downstream math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Surface width in pixels.
    pub width: f32,
    /// Surface height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Normalize a vertical distance against the surface height.
    ///
    /// This is the drag ratio: `dy / height`. Negative distances produce
    /// negative ratios. Returns 0.0 when the height is not a positive finite
    /// number.
    #[inline]
    #[must_use]
    pub fn ratio_of(&self, dy: f32) -> f32 {
        if self.height > 0.0 && self.height.is_finite() {
            dy / self.height
        } else {
            0.0
        }
    }

    /// The parked vertical offset: twice the surface height.
    ///
    /// A deliberate far-off-screen sentinel for "not presented," distinct
    /// from any real on-screen coordinate. Degenerate heights park at 0, in
    /// step with [`ratio_of`](Self::ratio_of), so they can never invert the
    /// offset cell's bounds.
    #[inline]
    #[must_use]
    pub fn parked_offset(&self) -> f32 {
        if self.height > 0.0 && self.height.is_finite() {
            self.height * 2.0
        } else {
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
