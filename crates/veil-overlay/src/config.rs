#![forbid(unsafe_code)]

//! Overlay configuration.
//!
//! One small value struct covers everything tunable about the overlay: the
//! backdrop ceiling opacity, the base animation duration every gesture
//! formula scales, the capture threshold, the dismiss threshold, and the
//! easing curve. Caller hooks (`on_show`/`on_close`) are registered on the
//! overlay itself, not stored here, so the config stays `Copy`.

use std::time::Duration;

use veil_core::Easing;

/// Configuration for a swipe-to-dismiss overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct OverlayConfig {
    /// Backdrop opacity when fully presented. Default 0.8.
    pub max_opacity: f32,
    /// Base animation duration; gesture formulas scale it. Default 300 ms.
    pub base_duration: Duration,
    /// Downward drag distance (px) a gesture must exceed before the overlay
    /// claims it. Default 15.
    pub capture_threshold: f32,
    /// Drag ratio at or beyond which a release commits to dismissal.
    /// Default 0.25.
    pub dismiss_ratio: f32,
    /// Easing curve for tweens. Default [`Easing::EaseInOut`].
    pub easing: Easing,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            max_opacity: 0.8,
            base_duration: Duration::from_millis(300),
            capture_threshold: 15.0,
            dismiss_ratio: 0.25,
            easing: Easing::EaseInOut,
        }
    }
}

impl OverlayConfig {
    /// Create a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with no animations: every transition completes
    /// immediately.
    #[must_use]
    pub fn none() -> Self {
        Self {
            base_duration: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Create a configuration for reduced motion preference: short linear
    /// tweens instead of the full-length eased ones.
    #[must_use]
    pub fn reduced_motion() -> Self {
        Self {
            base_duration: Duration::from_millis(100),
            easing: Easing::Linear,
            ..Default::default()
        }
    }

    /// Set the backdrop ceiling opacity (clamped to [0, 1]).
    pub fn max_opacity(mut self, opacity: f32) -> Self {
        self.max_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the base animation duration.
    pub fn base_duration(mut self, duration: Duration) -> Self {
        self.base_duration = duration;
        self
    }

    /// Set the gesture capture threshold in pixels (floored at 0).
    pub fn capture_threshold(mut self, px: f32) -> Self {
        self.capture_threshold = px.max(0.0);
        self
    }

    /// Set the commit/cancel decision ratio (clamped to [0, 1]).
    pub fn dismiss_ratio(mut self, ratio: f32) -> Self {
        self.dismiss_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the easing curve for tweens.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Check if animations are effectively disabled.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.base_duration.is_zero()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = OverlayConfig::default();
        assert_eq!(config.max_opacity, 0.8);
        assert_eq!(config.base_duration, Duration::from_millis(300));
        assert_eq!(config.capture_threshold, 15.0);
        assert_eq!(config.dismiss_ratio, 0.25);
        assert_eq!(config.easing, Easing::EaseInOut);
    }

    #[test]
    fn builder_clamps_out_of_range_values() {
        let config = OverlayConfig::new()
            .max_opacity(3.0)
            .dismiss_ratio(-1.0)
            .capture_threshold(-20.0);
        assert_eq!(config.max_opacity, 1.0);
        assert_eq!(config.dismiss_ratio, 0.0);
        assert_eq!(config.capture_threshold, 0.0);
    }

    #[test]
    fn none_preset_is_instant() {
        assert!(OverlayConfig::none().is_instant());
        assert!(!OverlayConfig::default().is_instant());
    }

    #[test]
    fn reduced_motion_shortens_and_linearizes() {
        let config = OverlayConfig::reduced_motion();
        assert_eq!(config.base_duration, Duration::from_millis(100));
        assert_eq!(config.easing, Easing::Linear);
        assert!(!config.is_instant());
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn serde_round_trip_preserves_every_field() {
        let config = OverlayConfig::new()
            .max_opacity(0.6)
            .base_duration(Duration::from_millis(450))
            .capture_threshold(24.0)
            .dismiss_ratio(0.4)
            .easing(Easing::EaseOut);
        let json = serde_json::to_string(&config).expect("config should serialize");
        let back: OverlayConfig = serde_json::from_str(&json).expect("config should deserialize");
        assert_eq!(back, config);
    }
}
