#![forbid(unsafe_code)]

//! Animated value cells.
//!
//! An [`AnimatedCell`] is a numeric cell that can be read synchronously, set
//! synchronously, or driven toward a target over a duration. It is the tween
//! primitive the overlay engine is built on: the host pumps [`tick`] from its
//! frame loop and the cell interpolates.
//!
//! Every write — immediate or animated — is stamped with a fresh
//! [`Generation`]. Starting a new write supersedes any in-flight tween on the
//! cell, and a superseded generation never reports completion. Callers that
//! sequence work against a cell hold the generation returned by
//! [`animate_to`] and test [`completed`] instead of trusting "the cell went
//! idle," so a superseding writer can never trip a stale continuation.
//!
//! # Invariants
//! - At most one tween is in flight per cell.
//! - The cell value always lies within the configured bounds, mid-flight
//!   included (targets are clamped at install, curves are monotonic in
//!   [0, 1]).
//! - `completed(g)` is true for exactly one generation at a time: the most
//!   recent write that ran to its target.
//! - A zero-length tween completes inside [`animate_to`] itself; no tick is
//!   required.
//! - A NaN write is inert: the value and target hold where they are.
//!
//! [`tick`]: AnimatedCell::tick
//! [`animate_to`]: AnimatedCell::animate_to
//! [`completed`]: AnimatedCell::completed

use std::time::Duration;

use crate::easing::Easing;

/// Token identifying one write to a cell.
///
/// Monotonically increasing per cell. The unit of animation cancellation:
/// comparing the generation you armed against the one that completed is how
/// sequenced work detects it was superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Result of advancing a cell by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellTick {
    /// The cell value changed during this tick.
    pub changed: bool,
    /// The generation that ran to completion during this tick, if any.
    pub completed: Option<Generation>,
    /// Time not consumed by an active tween: the full delta while idle, zero
    /// while a tween is mid-flight, and the surplus past the end when a tween
    /// finishes. Lets a sequencer forward leftover time into a step it arms
    /// in response to a completion.
    pub overshoot: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    target: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
    generation: Generation,
}

/// A numeric cell with synchronous reads/writes and cancelable tweens.
#[derive(Debug, Clone)]
pub struct AnimatedCell {
    value: f32,
    min: f32,
    max: f32,
    tween: Option<Tween>,
    generation: Generation,
    last_completed: Option<Generation>,
}

impl AnimatedCell {
    /// Create an unbounded cell holding `initial`.
    #[must_use]
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            min: f32::NEG_INFINITY,
            max: f32::INFINITY,
            tween: None,
            generation: Generation(0),
            last_completed: None,
        }
    }

    /// Constrain the cell to `[min, max]`. The current value is clamped
    /// immediately; all later writes and tween targets clamp on entry.
    #[must_use]
    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "cell bounds inverted: {min} > {max}");
        self.min = min;
        self.max = max;
        self.value = self.clamp(self.value);
        self
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value this cell is headed to: the tween target while animating,
    /// the current value otherwise.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f32 {
        match &self.tween {
            Some(tween) => tween.target,
            None => self.value,
        }
    }

    /// Whether a tween is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The generation of the most recent write.
    #[inline]
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// True only if `generation` is the most recent write and it ran to its
    /// target. A superseded generation never completes.
    #[inline]
    #[must_use]
    pub fn completed(&self, generation: Generation) -> bool {
        self.last_completed == Some(generation)
    }

    /// Replace the bounds. The current value and any in-flight target are
    /// re-clamped.
    pub fn set_bounds(&mut self, min: f32, max: f32) {
        debug_assert!(min <= max, "cell bounds inverted: {min} > {max}");
        self.min = min;
        self.max = max;
        self.value = self.clamp(self.value);
        if let Some(tween) = &mut self.tween {
            tween.target = tween.target.clamp(min, max);
            tween.from = tween.from.clamp(min, max);
        }
    }

    /// Write `value` immediately, superseding any in-flight tween.
    ///
    /// An immediate write is complete by definition, so the returned
    /// generation observes `completed`.
    pub fn set(&mut self, value: f32) -> Generation {
        let generation = self.next_generation();
        self.value = self.clamp(value);
        self.tween = None;
        self.last_completed = Some(generation);
        generation
    }

    /// Drive the cell toward `target` over `duration`, superseding any
    /// in-flight tween.
    ///
    /// A zero duration completes immediately: the value snaps to the target
    /// and the returned generation observes `completed` without a tick.
    pub fn animate_to(&mut self, target: f32, duration: Duration, easing: Easing) -> Generation {
        let generation = self.next_generation();
        let target = self.clamp(target);
        if duration.is_zero() {
            self.value = target;
            self.tween = None;
            self.last_completed = Some(generation);
        } else {
            self.tween = Some(Tween {
                from: self.value,
                target,
                elapsed: Duration::ZERO,
                duration,
                easing,
                generation,
            });
        }
        generation
    }

    /// Advance the in-flight tween by `dt`.
    pub fn tick(&mut self, dt: Duration) -> CellTick {
        let Some(tween) = &mut self.tween else {
            return CellTick {
                changed: false,
                completed: None,
                overshoot: dt,
            };
        };

        let before = self.value;
        let remaining = tween.duration.saturating_sub(tween.elapsed);
        if dt >= remaining {
            let generation = tween.generation;
            self.value = tween.target;
            self.tween = None;
            self.last_completed = Some(generation);
            return CellTick {
                changed: self.value != before,
                completed: Some(generation),
                overshoot: dt - remaining,
            };
        }

        tween.elapsed += dt;
        let t = tween.elapsed.as_secs_f32() / tween.duration.as_secs_f32();
        let eased = tween.easing.apply(t);
        let value = tween.from + (tween.target - tween.from) * eased;
        self.value = value.clamp(self.min, self.max);
        CellTick {
            changed: self.value != before,
            completed: None,
            overshoot: Duration::ZERO,
        }
    }

    #[inline]
    fn clamp(&self, value: f32) -> f32 {
        // A NaN write must not move (or poison) the cell.
        if value.is_nan() {
            return self.value;
        }
        value.clamp(self.min, self.max)
    }

    #[inline]
    fn next_generation(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.generation
    }
}

/// Scale `base` by a signed factor, flooring at zero and saturating at
/// [`Duration::MAX`].
///
/// The gesture duration formulas multiply the base duration by signed ratio
/// expressions that are deliberately left unclamped; a non-positive (or
/// non-finite) factor means "complete immediately," which a zero duration
/// expresses exactly. The product is computed in f64 and rounds to the
/// nearest nanosecond; a product too large for a [`Duration`] saturates.
#[must_use]
pub fn scale_duration(base: Duration, factor: f32) -> Duration {
    if factor > 0.0 && factor.is_finite() {
        Duration::try_from_secs_f64(base.as_secs_f64() * f64::from(factor))
            .unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
