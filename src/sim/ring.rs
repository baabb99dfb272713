//! Ring geometry: a circle with a rotating angular gap
//!
//! The gap is an arc of width `gap_width` starting at `gap_angle`
//! (counter-clockwise, world angles as `atan2` produces them). Balls inside
//! the ring bounce off the solid arc and fall through the gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::wrap_angle;
use std::f32::consts::TAU;

/// A ring boundary with a rotating gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    pub id: u32,
    /// Fixed center position
    pub center: Vec2,
    /// Fixed radius
    pub radius: f32,
    /// Angular width of the passable gap, in (0, 2π)
    pub gap_width: f32,
    /// Current gap start angle, wraps into [0, 2π)
    pub gap_angle: f32,
    /// Rotation step in radians/tick (signed)
    pub angular_vel: f32,
    /// Rotation direction (±1), kept so a speed-multiplier reassignment
    /// preserves each ring's randomized direction
    pub spin: f32,
}

impl Ring {
    pub fn new(id: u32, center: Vec2, radius: f32, gap_width: f32, gap_angle: f32) -> Self {
        Self {
            id,
            center,
            radius,
            gap_width,
            gap_angle: wrap_angle(gap_angle),
            angular_vel: 0.0,
            spin: 1.0,
        }
    }

    /// Set rotation from a direction and an effective step size
    pub fn with_spin(mut self, spin: f32, step: f32) -> Self {
        self.spin = spin;
        self.angular_vel = spin * step;
        self
    }

    /// Advance the gap by one tick of rotation
    pub fn advance(&mut self) {
        self.gap_angle = wrap_angle(self.gap_angle + self.angular_vel);
    }

    /// Whether a world angle falls inside the gap.
    ///
    /// Accepts angles down to one full negative turn, which covers the
    /// `atan2` range [-π, π]: the `+2·2π` term keeps the left operand of
    /// `%` positive so it behaves as a true modulo.
    pub fn gap_contains(&self, world_angle: f32) -> bool {
        let normalized = (world_angle - self.gap_angle + 2.0 * TAU) % TAU;
        (0.0..=self.gap_width).contains(&normalized)
    }

    /// Whether a point lies strictly inside the ring (UI hit-testing)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.distance(self.center) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_3, PI};

    fn ring_at_origin(gap_angle: f32, gap_width: f32) -> Ring {
        Ring::new(0, Vec2::ZERO, 200.0, gap_width, gap_angle)
    }

    #[test]
    fn test_gap_window_at_zero_phase() {
        let ring = ring_at_origin(0.0, FRAC_PI_3);
        assert!(ring.gap_contains(0.0));
        assert!(ring.gap_contains(FRAC_PI_3 - 0.01));
        assert!(!ring.gap_contains(FRAC_PI_3 + 0.01));
        assert!(!ring.gap_contains(PI));
    }

    #[test]
    fn test_gap_handles_negative_atan2_angles() {
        // Gap spanning [1.4π, 1.4π + π/3); atan2 reports that region as
        // negative angles near -π/2
        let ring = ring_at_origin(1.4 * PI, FRAC_PI_3);
        assert!(ring.gap_contains(-PI / 2.0));
        assert!(ring.gap_contains(-PI / 2.0 + 0.5));
        assert!(!ring.gap_contains(-PI / 2.0 - 1.0));
        assert!(!ring.gap_contains(-PI / 2.0 + 1.0));
    }

    #[test]
    fn test_gap_wraps_past_tau() {
        // Gap start near 2π so the window wraps through 0
        let ring = ring_at_origin(TAU - 0.1, 0.5);
        assert!(ring.gap_contains(TAU - 0.05));
        assert!(ring.gap_contains(0.2));
        assert!(!ring.gap_contains(0.5));
    }

    #[test]
    fn test_advance_wraps_into_tau() {
        let mut ring = ring_at_origin(TAU - 0.005, FRAC_PI_3).with_spin(1.0, 0.01);
        ring.advance();
        assert!(
            ring.gap_angle >= 0.0 && ring.gap_angle < TAU,
            "gap_angle out of range: {}",
            ring.gap_angle
        );
        assert!((ring.gap_angle - 0.005).abs() < 1e-4);

        let mut reverse = ring_at_origin(0.005, FRAC_PI_3).with_spin(-1.0, 0.01);
        reverse.advance();
        assert!(reverse.gap_angle >= 0.0 && reverse.gap_angle < TAU);
        assert!((reverse.gap_angle - (TAU - 0.005)).abs() < 1e-4);
    }

    #[test]
    fn test_contains_point() {
        let center = Vec2::new(300.0, 400.0);
        let ring = Ring::new(0, center, 200.0, FRAC_PI_3, 0.0);
        assert!(ring.contains_point(center));
        assert!(ring.contains_point(center + crate::polar_to_cartesian(199.0, 1.0)));
        assert!(!ring.contains_point(center + crate::polar_to_cartesian(201.0, 1.0)));
    }

    proptest! {
        #[test]
        fn prop_gap_test_periodic_in_tau(
            theta in -PI..PI,
            gap_angle in 0.0f32..TAU,
        ) {
            let ring = ring_at_origin(gap_angle, FRAC_PI_3);
            // Shifting by 2π perturbs the float result by an ulp or two;
            // only compare away from the window edges
            let n = (theta - ring.gap_angle + 2.0 * TAU) % TAU;
            prop_assume!(n > 1e-3 && n < TAU - 1e-3 && (n - ring.gap_width).abs() > 1e-3);
            prop_assert_eq!(ring.gap_contains(theta), ring.gap_contains(theta + TAU));
        }

        #[test]
        fn prop_gap_window_matches_offset(
            offset in 0.0f32..TAU,
            gap_angle in 0.0f32..TAU,
            gap_width in 0.1f32..3.0,
        ) {
            // An angle expressed as gap start + offset is in the gap iff
            // the offset fits the width (away from the float boundary)
            let ring = ring_at_origin(gap_angle, gap_width);
            let theta = gap_angle + offset;
            if (offset - gap_width).abs() > 1e-3 && offset < TAU - 1e-3 {
                prop_assert_eq!(ring.gap_contains(theta), offset < gap_width);
            }
        }
    }
}
