#![forbid(unsafe_code)]

//! Swipe-to-dismiss overlay engine built on `veil-core`.
//!
//! # Role in Veil
//! `veil-overlay` is the behavior layer: a full-screen modal surface that
//! fades in, can be dragged downward to dismiss, and decides between "snap
//! back" and "commit to close" when the drag ends. The host owns rendering,
//! hit testing, and the frame loop; this crate owns interpretation, the
//! presentation state machine, and the paint properties the host binds.
//!
//! # Primary responsibilities
//! - **Overlay**: the embeddable shell — `handle_event` for input, `tick`
//!   for time, `paint` for output, `show`/`hide`/`detach` for lifecycle.
//! - **SwipeInterpreter / SwipeTracker**: classify raw pointer deltas into
//!   ignored, dragging, or released, and turn them into declarative
//!   [`SwipeCommand`]s.
//! - **Presenter**: the phase machine that sequences the ordered entry
//!   (fade, then slide) and exit (slide, then fade) animations and guards
//!   every continuation against teardown.
//! - **OverlayConfig**: opacity ceiling, base duration, thresholds, easing.
//!
//! # How it fits in the system
//! A host constructs an [`Overlay`] against its viewport, routes pointer and
//! dismiss events into it with the hit region its own hit testing resolved,
//! pumps [`Overlay::tick`] from its frame loop, and draws whatever
//! [`Overlay::paint`] reports. Nothing here performs I/O; everything is
//! synchronous and single-threaded.

pub mod config;
pub mod gesture;
pub mod paint;
pub mod presenter;
pub mod shell;

pub use config::OverlayConfig;
pub use gesture::{OffsetChase, SwipeCommand, SwipeInterpreter, SwipeTracker};
pub use paint::{PaintFlags, PaintSnapshot};
pub use presenter::{OverlayPhase, Presenter};
pub use shell::{EventOutcome, HitRegion, Overlay};

// Re-export the core vocabulary hosts need to drive an overlay.
pub use veil_core::{Easing, InputEvent, Point, PointerPhase, PointerSample, Viewport};
