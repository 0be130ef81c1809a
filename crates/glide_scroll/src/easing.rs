//! Easing functions for scroll animations

use std::f32::consts::{FRAC_PI_2, PI};

/// Easing function type
///
/// The default is [`Easing::SineOut`], the classic scroll curve: fast start,
/// gentle landing, reaching 1.0 only at the very end of the duration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    SineIn,
    /// `sin(t * pi/2)`
    #[default]
    SineOut,
    SineInOut,
    EaseOutCubic,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::SineIn => 1.0 - (t * FRAC_PI_2).cos(),
            Easing::SineOut => (t * FRAC_PI_2).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::SineIn,
            Easing::SineOut,
            Easing::SineInOut,
            Easing::EaseOutCubic,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_sine_out_is_ease_out() {
        // Front-loaded: more than half the distance in the first half.
        assert!(Easing::SineOut.apply(0.5) > 0.5);
        // Monotonic
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = Easing::SineOut.apply(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_sine_out_midpoint() {
        // sin(pi/4)
        assert!((Easing::SineOut.apply(0.5) - 0.7071).abs() < 1e-3);
    }
}
