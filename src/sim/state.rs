//! Simulation state
//!
//! All state needed for determinism lives here, including the RNG: two
//! `SimState`s built from the same seed and fed the same calls stay
//! identical, and a serialized snapshot resumes the exact tick sequence.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::events::SimEvent;
use super::ring::Ring;
use crate::config::SimConfig;
use crate::consts::*;

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Seed this run was built from (kept for reset/reproduction)
    pub seed: u64,
    /// RNG, serialized with the state so snapshots resume exactly
    pub rng: Pcg32,
    /// Tick counter
    pub time_ticks: u64,
    /// Rings, in insertion order == top-to-bottom spatial order
    pub rings: Vec<Ring>,
    /// Live balls
    pub balls: Vec<Ball>,
    /// Shared rotation-speed multiplier
    pub speed_multiplier: f32,
    /// Ticks since the last cascade ring spawn
    pub ticks_since_ring: u32,
    /// Events from the most recent tick (transient, not persisted)
    #[serde(skip)]
    pub events: Vec<SimEvent>,
    /// Next entity id
    next_id: u32,
}

impl SimState {
    /// Starting configuration: one centered ring, one ball above it
    pub fn new(seed: u64, cfg: &SimConfig) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            rings: Vec::new(),
            balls: Vec::new(),
            speed_multiplier: 1.0,
            ticks_since_ring: 0,
            events: Vec::new(),
            next_id: 1,
        };

        let center = Vec2::new(cfg.center_x(), cfg.view_height / 2.0);
        let id = state.next_entity_id();
        state.rings.push(
            Ring::new(id, center, cfg.ring_radius, cfg.gap_width, INITIAL_GAP_ANGLE)
                .with_spin(1.0, cfg.base_spin * state.speed_multiplier),
        );

        state.spawn_ball(Vec2::new(cfg.center_x(), cfg.spawn_y), BALL_START_RADIUS);
        state.events.clear();

        state
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert a ball and record the spawn event
    pub fn spawn_ball(&mut self, pos: Vec2, radius: f32) {
        let id = self.next_entity_id();
        self.balls.push(Ball::new(id, pos, radius));
        self.events.push(SimEvent::BallSpawned { ball: id });
    }

    /// Insert a ball with a randomized radius in [15, 25)
    pub fn spawn_ball_random_radius(&mut self, pos: Vec2) {
        let radius = self.rng.random_range(BALL_RADIUS_MIN..BALL_RADIUS_MAX);
        self.spawn_ball(pos, radius);
    }

    /// Append a cascade ring below the last one: same geometry, random gap
    /// phase, random spin direction
    pub fn spawn_cascade_ring(&mut self, cfg: &SimConfig) {
        let center = match self.rings.last() {
            Some(last) => last.center + Vec2::new(0.0, cfg.ring_spacing),
            None => Vec2::new(cfg.center_x(), cfg.view_height / 2.0),
        };
        let gap_angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        let spin = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };

        let id = self.next_entity_id();
        self.rings.push(
            Ring::new(id, center, cfg.ring_radius, cfg.gap_width, gap_angle)
                .with_spin(spin, cfg.base_spin * self.speed_multiplier),
        );
        self.events.push(SimEvent::RingSpawned { ring: id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_configuration() {
        let cfg = SimConfig::default();
        let state = SimState::new(7, &cfg);

        assert_eq!(state.rings.len(), 1);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.time_ticks, 0);

        let ring = &state.rings[0];
        assert_eq!(ring.center, Vec2::new(300.0, 400.0));
        assert_eq!(ring.radius, 200.0);
        assert!((ring.gap_angle - std::f32::consts::PI).abs() < 1e-6);
        assert!((ring.angular_vel - 0.01).abs() < 1e-6);

        let ball = &state.balls[0];
        assert_eq!(ball.pos, Vec2::new(300.0, 100.0));
        assert_eq!(ball.radius, 20.0);
        assert_eq!(ball.vel_y, 0.0);
    }

    #[test]
    fn test_entity_ids_are_unique_and_stable() {
        let cfg = SimConfig::default();
        let mut state = SimState::new(7, &cfg);

        let ring_id = state.rings[0].id;
        let ball_id = state.balls[0].id;
        assert_ne!(ring_id, ball_id);

        state.spawn_ball(Vec2::new(300.0, 100.0), 15.0);
        state.spawn_cascade_ring(&cfg);
        let ids = [ring_id, ball_id, state.balls[1].id, state.rings[1].id];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_cascade_ring_spacing_and_geometry() {
        let cfg = SimConfig::cascade();
        let mut state = SimState::new(42, &cfg);

        state.spawn_cascade_ring(&cfg);
        state.spawn_cascade_ring(&cfg);

        let [a, b, c] = [&state.rings[0], &state.rings[1], &state.rings[2]];
        assert_eq!(b.center.y - a.center.y, 300.0);
        assert_eq!(c.center.y - b.center.y, 300.0);
        assert_eq!(b.center.x, a.center.x);
        assert_eq!(b.radius, a.radius);
        assert_eq!(b.gap_width, a.gap_width);
        assert!(b.gap_angle >= 0.0 && b.gap_angle < std::f32::consts::TAU);
        assert!(b.spin == 1.0 || b.spin == -1.0);
    }

    #[test]
    fn test_random_radius_in_range() {
        let cfg = SimConfig::default();
        let mut state = SimState::new(1, &cfg);
        for _ in 0..50 {
            state.spawn_ball_random_radius(Vec2::new(300.0, 100.0));
        }
        for ball in state.balls.iter().skip(1) {
            assert!(
                (15.0..25.0).contains(&ball.radius),
                "radius out of range: {}",
                ball.radius
            );
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let cfg = SimConfig::default();
        let state = SimState::new(99, &cfg);

        let json = serde_json::to_string(&state).unwrap();
        let restored: SimState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.seed, state.seed);
        assert_eq!(restored.rings.len(), state.rings.len());
        assert_eq!(restored.balls.len(), state.balls.len());
        assert_eq!(restored.rng, state.rng);
    }
}
