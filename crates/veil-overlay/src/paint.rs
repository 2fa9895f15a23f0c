#![forbid(unsafe_code)]

//! Paint-side output: what the host draws, and what changed.
//!
//! The engine never renders. Each frame the host reads a [`PaintSnapshot`]
//! and binds it to whatever it draws the overlay with; [`PaintFlags`] is the
//! dirty mask that lets hosts skip repaints when nothing moved.

use bitflags::bitflags;

bitflags! {
    /// Which paint properties changed since the host last observed them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PaintFlags: u8 {
        /// Backdrop opacity changed.
        const BACKDROP = 1 << 0;
        /// Content vertical offset changed.
        const OFFSET = 1 << 1;
        /// Content scale changed.
        const SCALE = 1 << 2;
        /// Close-affordance visibility changed.
        const AFFORDANCE = 1 << 3;
        /// Overall visibility flipped.
        const VISIBILITY = 1 << 4;
    }
}

/// Current paint properties, ready to bind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintSnapshot {
    /// Whether the overlay should be rendered at all.
    pub visible: bool,
    /// Backdrop opacity in [0, max_opacity].
    pub backdrop_opacity: f32,
    /// Content top offset in pixels (0 = fully presented).
    pub offset_y: f32,
    /// Content scale factor.
    pub scale: f32,
    /// Whether the close affordance should be rendered.
    pub close_affordance: bool,
}

// ============================================================================
// Tests
// ============================================================================
