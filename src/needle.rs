//! Needle motion.
//!
//! The displayed angle chases the target angle through a damped spring so
//! value changes sweep smoothly instead of jumping.

use std::f64::consts::TAU;
use std::time::Duration;

use crate::geometry::Angle;

/// Longest step fed to the integrator; slower frames are split up.
const MAX_STEP: f64 = 1.0 / 120.0;

/// Largest delta accepted per frame, so a stalled window does not fling the needle.
const MAX_FRAME_DELTA: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
}

impl Spring {
    /// Spring with the given period (`response`, seconds) and damping ratio.
    ///
    /// `response` must be positive and `damping_fraction` non-negative.
    pub fn from_response(response: f64, damping_fraction: f64) -> Self {
        let omega = TAU / response;
        Self {
            stiffness: omega * omega,
            damping: 2.0 * damping_fraction * omega,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NeedleAnimator {
    spring: Spring,
    angle: f64,
    velocity: f64,
    target: f64,
}

impl NeedleAnimator {
    pub fn new(spring: Spring, initial: Angle) -> Self {
        Self {
            spring,
            angle: initial.degrees(),
            velocity: 0.0,
            target: initial.degrees(),
        }
    }

    pub fn set_target(&mut self, target: Angle) {
        self.target = target.degrees();
    }

    pub fn target(&self) -> Angle {
        Angle::from_degrees(self.target)
    }

    pub fn angle(&self) -> Angle {
        Angle::from_degrees(self.angle)
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.angle).abs() < 1e-3 && self.velocity.abs() < 1e-3
    }

    /// Advance the spring by `dt`.
    ///
    /// Each step is backward Euler: velocity is solved at the end of the step,
    /// which stays bounded for any stiffness and step size.
    pub fn advance(&mut self, dt: Duration) {
        let Spring { stiffness, damping } = self.spring;
        let mut remaining = dt.as_secs_f64().min(MAX_FRAME_DELTA);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.velocity = (self.velocity + h * stiffness * (self.target - self.angle))
                / (1.0 + h * damping + h * h * stiffness);
            self.angle += h * self.velocity;
            remaining -= h;
        }
        if self.is_settled() {
            self.angle = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(initial: f64) -> NeedleAnimator {
        NeedleAnimator::new(
            Spring::from_response(0.55, 0.825),
            Angle::from_degrees(initial),
        )
    }

    #[test]
    fn test_starts_at_rest() {
        let mut needle = animator(-220.0);
        assert!(needle.is_settled());
        needle.advance(Duration::from_millis(16));
        assert_eq!(needle.angle().degrees(), -220.0);
    }

    #[test]
    fn test_settles_on_target() {
        let mut needle = animator(-220.0);
        needle.set_target(Angle::from_degrees(-90.0));
        for _ in 0..300 {
            needle.advance(Duration::from_secs_f64(1.0 / 60.0));
        }
        assert!(needle.is_settled());
        assert_eq!(needle.angle().degrees(), -90.0);
    }

    #[test]
    fn test_moves_toward_target_first() {
        let mut needle = animator(0.0);
        needle.set_target(Angle::from_degrees(100.0));
        needle.advance(Duration::from_millis(50));
        let first = needle.angle().degrees();
        assert!(first > 0.0 && first < 100.0);
        needle.advance(Duration::from_millis(50));
        assert!(needle.angle().degrees() > first);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut needle = animator(0.0);
        needle.set_target(Angle::from_degrees(100.0));
        needle.advance(Duration::from_secs(10));
        assert!(needle.angle().degrees().is_finite());
        assert!(!needle.is_settled());
    }

    #[test]
    fn test_stiff_spring_stays_bounded() {
        let mut needle = NeedleAnimator::new(
            Spring::from_response(0.01, 0.825),
            Angle::from_degrees(-220.0),
        );
        needle.set_target(Angle::from_degrees(-90.0));
        for _ in 0..60 {
            needle.advance(Duration::from_secs_f64(1.0 / 60.0));
            let angle = needle.angle().degrees();
            assert!(
                angle.is_finite() && (angle + 90.0).abs() <= 130.0,
                "angle ran off to {angle}"
            );
        }
        assert!(needle.is_settled());
        assert_eq!(needle.angle().degrees(), -90.0);
    }

    #[test]
    fn test_undamped_spring_does_not_grow() {
        let mut needle = NeedleAnimator::new(Spring::from_response(0.2, 0.0), Angle::default());
        needle.set_target(Angle::from_degrees(50.0));
        for _ in 0..600 {
            needle.advance(Duration::from_secs_f64(1.0 / 60.0));
            assert!((needle.angle().degrees() - 50.0).abs() <= 50.0);
        }
    }

    #[test]
    fn test_spring_coefficients() {
        let spring = Spring::from_response(1.0, 1.0);
        assert!((spring.stiffness - TAU * TAU).abs() < 1e-9);
        assert!((spring.damping - 2.0 * TAU).abs() < 1e-9);
    }
}
