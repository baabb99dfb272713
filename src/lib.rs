//! Ring Drop - a gravity-and-rings physics toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rings, balls, collision resolution)
//! - `config`: Data-driven tuning and variant policies
//!
//! Rendering and UI wiring are external collaborators: they call
//! [`sim::Simulation::step`] once per frame and read the exposed
//! collections back out.

pub mod config;
pub mod sim;

pub use config::{SimConfig, SpawnPolicy, SpeedControl};
pub use sim::{Ball, Ring, SimEvent, SimState, Simulation};

use glam::Vec2;

/// Simulation constants (per-tick units; the original toy ran at one tick
/// per rendered frame on a 600x800 canvas)
pub mod consts {
    use std::f32::consts::{FRAC_PI_3, PI};

    /// Visible area
    pub const VIEW_WIDTH: f32 = 600.0;
    pub const VIEW_HEIGHT: f32 = 800.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity retained (and flipped) on a bounce
    pub const RESTITUTION: f32 = 0.7;

    /// Ring defaults
    pub const RING_RADIUS: f32 = 200.0;
    pub const GAP_WIDTH: f32 = FRAC_PI_3;
    /// Gap phase of the initial ring (opens at the left, sweeping down)
    pub const INITIAL_GAP_ANGLE: f32 = PI;
    /// Base rotation step in radians/tick, scaled by the speed multiplier
    pub const BASE_SPIN: f32 = 0.01;
    /// Vertical spacing between cascade rings
    pub const RING_SPACING: f32 = 300.0;

    /// Ball defaults
    pub const BALL_START_RADIUS: f32 = 20.0;
    pub const BALL_SPAWN_Y: f32 = 100.0;
    /// Replacement balls: radius and horizontal offset from ring center
    pub const REPLACE_BALL_RADIUS: f32 = 15.0;
    pub const REPLACE_BALL_OFFSET: f32 = 15.0;
    /// Randomized ball radius range for UI-added balls
    pub const BALL_RADIUS_MIN: f32 = 15.0;
    pub const BALL_RADIUS_MAX: f32 = 25.0;
}

/// Wrap angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
