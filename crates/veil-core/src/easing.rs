#![forbid(unsafe_code)]

//! Easing curves for cell tweens.
//!
//! Small fixed set; all curves are monotonic and map [0, 1] onto [0, 1], so
//! a bounded cell stays bounded mid-flight. `EaseInOut` is the default — it
//! matches the arrive/depart feel of the platform animations the overlay
//! was modeled on.

/// Easing function applied to normalized tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Smooth ease-out (decelerating).
    EaseOut,
    /// Smooth ease-in (accelerating).
    EaseIn,
    /// Smooth S-curve.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    ///
    /// Out-of-range inputs are clamped before the curve is applied.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::EaseIn,
        Easing::EaseInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0f32;
            for i in 0..=100 {
                let t = i as f32 / 100.0;
                let v = easing.apply(t);
                assert!(v >= prev - 0.001, "{easing:?} not monotonic at t={t}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_of_range_input_clamps() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.5), 1.0);
        }
    }

    #[test]
    fn linear_is_identity_mid_range() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn ease_in_out_crosses_half_at_midpoint() {
        let v = Easing::EaseInOut.apply(0.5);
        assert!((v - 0.5).abs() < 1e-6, "midpoint should be 0.5, got {v}");
    }
}
