//! Easing curves for node transitions.

use std::time::Duration;

use crate::layout::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Decelerating bounce that settles on the target, overshooting nothing.
    #[default]
    BounceOut,
}

impl Easing {
    /// Apply the curve to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => fraction,
            Easing::BounceOut => bounce_out(fraction),
        }
    }
}

fn bounce_out(p: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if p < 1.0 / D {
        N * p * p
    } else if p < 2.0 / D {
        let p = p - 1.5 / D;
        N * p * p + 0.75
    } else if p < 2.5 / D {
        let p = p - 2.25 / D;
        N * p * p + 0.9375
    } else {
        let p = p - 2.625 / D;
        N * p * p + 0.984375
    }
}

/// Duration and curve of a single transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress after `elapsed`. A zero duration completes immediately.
    pub fn fraction_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.transform(linear)
    }

    pub fn sample(&self, from: Point, to: Point, elapsed: Duration) -> Point {
        if elapsed >= self.duration {
            return to;
        }
        from.lerp(&to, self.fraction_at(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(Easing::default(), Easing::BounceOut);
        for easing in [Easing::Linear, Easing::BounceOut] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
            assert_eq!(easing.transform(-3.0), 0.0);
            assert_eq!(easing.transform(7.0), 1.0);
        }
    }

    #[test]
    fn test_bounce_stays_in_range() {
        for i in 0..=1000 {
            let v = Easing::BounceOut.transform(i as f32 / 1000.0);
            assert!((0.0..=1.0001).contains(&v), "{} -> {}", i, v);
        }
        // First bounce lands exactly on the target.
        assert!((Easing::BounceOut.transform(1.0 / 2.75) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_tween_sample() {
        let tween = Tween::new(Duration::from_millis(1000), Easing::Linear);
        let from = Point::new(0.0, 0.0);
        let to = Point::new(100.0, -50.0);
        assert_eq!(tween.sample(from, to, Duration::ZERO), from);
        assert_eq!(tween.sample(from, to, Duration::from_millis(500)), Point::new(50.0, -25.0));
        assert_eq!(tween.sample(from, to, Duration::from_secs(3)), to);

        let instant = Tween::new(Duration::ZERO, Easing::BounceOut);
        assert_eq!(instant.fraction_at(Duration::ZERO), 1.0);
    }
}
