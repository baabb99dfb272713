//! Falling balls: gravity integration and collision resolution
//!
//! The collision model is deliberately minimal, matching the toy it
//! implements: only the vertical velocity component exists, the solid-arc
//! bounce corrects position along y only, and a ring stops interacting
//! with a ball forever once the ball has fallen through its gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::events::SimEvent;
use super::ring::Ring;
use crate::consts::RESTITUTION;

/// A falling ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    /// Fixed at creation
    pub radius: f32,
    /// Vertical velocity; gravity accumulates here each tick
    pub vel_y: f32,
    /// Ids of rings this ball has already fallen through. Grows
    /// monotonically; membership is permanent.
    #[serde(default)]
    pub passed: Vec<u32>,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            radius,
            vel_y: 0.0,
            passed: Vec::new(),
        }
    }

    /// Whether this ball has already cleared the given ring
    #[inline]
    pub fn has_passed(&self, ring_id: u32) -> bool {
        self.passed.contains(&ring_id)
    }

    /// Advance one tick: apply gravity, then resolve against each ring in
    /// sequence order.
    ///
    /// Per ring, the ball interacts only while its center is inside the
    /// inner disc (`d < ring.radius - self.radius`); there is no collision
    /// with the ring from the outside. On a gap hit the ring id is recorded
    /// and the trajectory is untouched. On a solid-arc hit the ball is
    /// pushed back to the inner disc boundary along y only, and the
    /// vertical velocity reflects with energy loss.
    ///
    /// Precondition: `self.radius < ring.radius` for every ring. Degenerate
    /// geometry makes the inside test always true and is a configuration
    /// error, not guarded here.
    pub fn integrate(&mut self, rings: &[Ring], gravity: f32, events: &mut Vec<SimEvent>) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        for ring in rings {
            if self.has_passed(ring.id) {
                continue;
            }

            let dist = self.pos.distance(ring.center);
            if dist >= ring.radius - self.radius {
                // Still falling freely relative to this ring
                continue;
            }

            let angle = (self.pos.y - ring.center.y).atan2(self.pos.x - ring.center.x);
            if ring.gap_contains(angle) {
                self.passed.push(ring.id);
                events.push(SimEvent::Passed {
                    ball: self.id,
                    ring: ring.id,
                });
            } else {
                // Vertical-only correction back to the inner disc edge;
                // x stays where it is
                self.pos.y = ring.center.y + (ring.radius - self.radius) * angle.sin();
                self.vel_y *= -RESTITUTION;
                events.push(SimEvent::Bounced {
                    ball: self.id,
                    ring: ring.id,
                });
            }
        }
    }

    /// True once the ball has fully dropped below the visible area
    #[inline]
    pub fn is_out_of_bounds(&self, view_height: f32) -> bool {
        self.pos.y > view_height + self.radius
    }
}
