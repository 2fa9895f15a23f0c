#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: animated value cells, easing, and the input model for Veil.
//!
//! # Role in Veil
//! `veil-core` is the primitive layer. It owns the cancelable tween cell the
//! overlay state machine is built on, the easing curves that shape tweens,
//! and the normalized input vocabulary hosts feed into the engine.
//!
//! # Primary responsibilities
//! - **AnimatedCell**: a numeric cell with synchronous writes and cancelable
//!   tweens, stamped with generations so superseded animations can never trip
//!   stale continuations.
//! - **Easing**: monotonic curves applied to normalized tween progress.
//! - **InputEvent**: pointer samples, dismiss requests, focus, and resize —
//!   already hit-tested and normalized by the host.
//! - **Viewport / Point**: pixel-space geometry; the viewport height anchors
//!   drag ratios and the parked offset sentinel.
//!
//! # How it fits in the system
//! `veil-overlay` composes these primitives into the swipe interpreter and
//! the presentation state machine. Nothing in this crate knows about
//! overlays; it is deliberately host- and toolkit-agnostic.

pub mod cell;
pub mod easing;
pub mod event;
pub mod geometry;
pub mod logging;

pub use cell::{AnimatedCell, CellTick, Generation, scale_duration};
pub use easing::Easing;
pub use event::{InputEvent, PointerPhase, PointerSample};
pub use geometry::{Point, Viewport};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
