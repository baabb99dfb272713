//! Simulation driver
//!
//! The facade the renderer/UI collaborator talks to. One `step()` per
//! rendered frame; the discrete UI events (add ball, reset, speed slider)
//! map to the remaining methods. Single-threaded by design: everything
//! mutates in place between steps, so a multi-threaded host must serialize
//! all calls behind one lock or command queue.

use glam::Vec2;

use super::ball::Ball;
use super::events::SimEvent;
use super::ring::Ring;
use super::state::SimState;
use super::tick::tick;
use crate::config::{SimConfig, SpeedControl};

/// A running simulation: configuration plus mutable state
#[derive(Debug, Clone)]
pub struct Simulation {
    cfg: SimConfig,
    state: SimState,
}

impl Simulation {
    pub fn new(cfg: SimConfig, seed: u64) -> Self {
        let state = SimState::new(seed, &cfg);
        log::info!(
            "simulation start: seed={} policy={}",
            seed,
            cfg.spawn_policy.as_str()
        );
        Self { cfg, state }
    }

    /// Advance one tick. Read the collections and events afterwards.
    pub fn step(&mut self) {
        tick(&mut self.state, &self.cfg);
    }

    /// Re-initialize to the starting configuration: one ring, one ball,
    /// spawn timer cleared, RNG reseeded from the construction seed so a
    /// reset run replays the first one.
    pub fn reset(&mut self) {
        log::info!("reset (seed={})", self.state.seed);
        self.state = SimState::new(self.state.seed, &self.cfg);
    }

    /// Insert a ball; `radius` defaults to a random value in [15, 25)
    pub fn add_ball(&mut self, x: f32, y: f32, radius: Option<f32>) {
        match radius {
            Some(r) => self.state.spawn_ball(Vec2::new(x, y), r),
            None => self.state.spawn_ball_random_radius(Vec2::new(x, y)),
        }
    }

    /// Update the shared rotation-speed multiplier.
    ///
    /// Non-finite input (the parse-failure case of the original slider) is
    /// a logged no-op; the previous multiplier is kept. Under
    /// [`SpeedControl::Reassign`] every live ring's angular velocity is
    /// recomputed from its own spin direction; under
    /// [`SpeedControl::AtCreation`] only rings created later pick it up.
    pub fn set_rotation_speed(&mut self, multiplier: f32) {
        if !multiplier.is_finite() {
            log::warn!("ignoring non-finite rotation speed {multiplier}");
            return;
        }
        self.state.speed_multiplier = multiplier;
        if self.cfg.speed_control == SpeedControl::Reassign {
            let step = self.cfg.base_spin * multiplier;
            for ring in &mut self.state.rings {
                ring.angular_vel = ring.spin * step;
            }
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn rings(&self) -> &[Ring] {
        &self.state.rings
    }

    pub fn balls(&self) -> &[Ball] {
        &self.state.balls
    }

    /// Events from the most recent `step()`
    pub fn events(&self) -> &[SimEvent] {
        &self.state.events
    }
}
