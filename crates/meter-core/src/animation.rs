//! Animation intents for the meter.
//!
//! The core never runs timers. It tells the host which value should animate,
//! with which curve and duration, and whether the animation repeats. The
//! host's animation engine does the rest.

use crate::gauge::GaugeGeometry;
use std::time::Duration;

/// Duration of the base animation every profile is derived from.
pub const BASE_DURATION: Duration = Duration::from_millis(350);

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Named animation profiles used by the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationProfile {
    /// Slow, heavy movement of the needle and the filled arc.
    Inertia,
    /// Fast pulse of the spectrum above the shaking point.
    Shaking,
}

impl AnimationProfile {
    /// Playback speed relative to the base animation.
    #[must_use]
    pub const fn speed(self) -> f64 {
        match self {
            Self::Inertia => 0.5,
            Self::Shaking => 4.0,
        }
    }

    /// Effective duration of one run, `BASE_DURATION / speed`.
    #[must_use]
    pub fn duration(self) -> Duration {
        // whole nanoseconds; exact for the speeds above
        let nanos = BASE_DURATION.as_nanos() as f64 / self.speed();
        Duration::from_nanos(nanos.round() as u64)
    }
}

/// How often an animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Play once toward the target.
    #[default]
    Once,
    /// Loop until the condition that started it goes away.
    Forever {
        /// Play backwards on every other run.
        autoreverses: bool,
    },
}

/// A request to the host: animate toward the new target with this curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationIntent {
    /// Profile the intent was derived from
    pub profile: AnimationProfile,
    /// Easing curve
    pub easing: Easing,
    /// Duration of one run
    pub duration: Duration,
    /// Repetition
    pub repeat: Repeat,
}

impl AnimationIntent {
    /// Inertia: a single slowed-down ease.
    #[must_use]
    pub fn inertia() -> Self {
        Self::from_profile(AnimationProfile::Inertia, Repeat::Once)
    }

    /// Shaking: repeats forever, autoreversing, only while `active`.
    #[must_use]
    pub fn shaking(active: bool) -> Self {
        let repeat = if active {
            Repeat::Forever { autoreverses: true }
        } else {
            Repeat::Once
        };
        Self::from_profile(AnimationProfile::Shaking, repeat)
    }

    fn from_profile(profile: AnimationProfile, repeat: Repeat) -> Self {
        Self {
            profile,
            easing: Easing::EaseInOut,
            duration: profile.duration(),
            repeat,
        }
    }

    /// Whether the host should keep looping this animation.
    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        matches!(self.repeat, Repeat::Forever { .. })
    }
}

/// Animation intents for one meter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterAnimations {
    /// Needle rotation. `None` when animations are off.
    pub needle: Option<AnimationIntent>,
    /// Filled arc and marks. `None` when animations are off.
    pub spectrum: Option<AnimationIntent>,
    /// Spectrum scale pulse. Always present; repeats only while shaking.
    pub scale: AnimationIntent,
}

impl MeterAnimations {
    /// Intents for the meter at `progress`.
    #[must_use]
    pub fn for_progress(geometry: &GaugeGeometry<'_>, progress: f64) -> Self {
        let motion = geometry
            .config()
            .animations_enabled()
            .then(AnimationIntent::inertia);
        Self {
            needle: motion,
            spectrum: motion,
            scale: AnimationIntent::shaking(geometry.is_shaking(progress)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GaugeConfig;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-9, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?}");
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    }

    #[test]
    fn test_profile_durations() {
        assert_eq!(AnimationProfile::Inertia.duration(), Duration::from_millis(700));
        assert_eq!(
            AnimationProfile::Shaking.duration(),
            Duration::from_micros(87_500)
        );
    }

    #[test]
    fn test_duration_follows_speed() {
        for profile in [AnimationProfile::Inertia, AnimationProfile::Shaking] {
            let scaled = profile.duration().as_secs_f64() * profile.speed();
            assert!((scaled - BASE_DURATION.as_secs_f64()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_inertia_plays_once() {
        let intent = AnimationIntent::inertia();
        assert_eq!(intent.profile, AnimationProfile::Inertia);
        assert_eq!(intent.repeat, Repeat::Once);
        assert!(!intent.is_repeating());
    }

    #[test]
    fn test_shaking_repeats_only_while_active() {
        assert!(AnimationIntent::shaking(true).is_repeating());
        assert_eq!(
            AnimationIntent::shaking(true).repeat,
            Repeat::Forever { autoreverses: true }
        );
        assert!(!AnimationIntent::shaking(false).is_repeating());
    }

    #[test]
    fn test_meter_animations_enabled() {
        let config = GaugeConfig::default();
        let geometry = GaugeGeometry::new(&config);

        let calm = MeterAnimations::for_progress(&geometry, 50.0);
        assert_eq!(calm.needle, Some(AnimationIntent::inertia()));
        assert_eq!(calm.spectrum, Some(AnimationIntent::inertia()));
        assert!(!calm.scale.is_repeating());

        let hot = MeterAnimations::for_progress(&geometry, 99.0);
        assert!(hot.scale.is_repeating());
    }

    #[test]
    fn test_meter_animations_disabled() {
        let config = GaugeConfig::builder()
            .animations_enabled(false)
            .build()
            .unwrap();
        let geometry = GaugeGeometry::new(&config);
        let anims = MeterAnimations::for_progress(&geometry, 99.0);
        assert!(anims.needle.is_none());
        assert!(anims.spectrum.is_none());
        // the pulse is tied to the threshold, not to the animation switch
        assert!(anims.scale.is_repeating());
    }
}
