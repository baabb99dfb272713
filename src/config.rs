//! Simulation tuning and variant policies
//!
//! Everything behavioral that differs between the single-ring and
//! multi-ring variants lives here, so neither policy is hard-coded.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens after a ball clears a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnPolicy {
    /// Single-ring variant: once a passed ball drops below the ring,
    /// remove every passed ball and spawn a pair at the ring's center line
    #[default]
    Replace,
    /// Multi-ring variant: periodically append rings below the last one;
    /// balls that have cleared every ring may spawn a bonus ball
    Cascade,
}

impl SpawnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::Replace => "Replace",
            SpawnPolicy::Cascade => "Cascade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "replace" | "single" => Some(SpawnPolicy::Replace),
            "cascade" | "multi" => Some(SpawnPolicy::Cascade),
            _ => None,
        }
    }
}

/// How a rotation-speed change applies to rings that already exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedControl {
    /// Rewrite every live ring's angular velocity immediately
    #[default]
    Reassign,
    /// Only rings created after the change pick up the new multiplier
    AtCreation,
}

/// Simulation configuration
///
/// `Default` mirrors the original toy's constants; serde so a front end can
/// ship tuning as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Visible area; balls despawn once fully below `view_height`
    pub view_width: f32,
    pub view_height: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Ring geometry shared by the initial ring and cascade rings
    pub ring_radius: f32,
    pub gap_width: f32,
    /// Base rotation step (radians/tick) before the speed multiplier
    pub base_spin: f32,
    pub spawn_policy: SpawnPolicy,
    pub speed_control: SpeedControl,
    /// Cascade: ticks between ring spawns (original used a wall-clock
    /// timer; the deterministic core counts ticks)
    pub ring_interval_ticks: u32,
    /// Cascade: vertical offset of each new ring below the last
    pub ring_spacing: f32,
    /// Cascade: per-tick bonus-ball probability for a fully-cleared ball
    pub cascade_spawn_chance: f64,
    /// Spawn line for new balls
    pub spawn_y: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            gravity: GRAVITY,
            ring_radius: RING_RADIUS,
            gap_width: GAP_WIDTH,
            base_spin: BASE_SPIN,
            spawn_policy: SpawnPolicy::Replace,
            speed_control: SpeedControl::Reassign,
            ring_interval_ticks: 300,
            ring_spacing: RING_SPACING,
            cascade_spawn_chance: 0.3,
            spawn_y: BALL_SPAWN_Y,
        }
    }
}

impl SimConfig {
    /// Config for the multi-ring variant
    pub fn cascade() -> Self {
        Self {
            spawn_policy: SpawnPolicy::Cascade,
            speed_control: SpeedControl::AtCreation,
            ..Self::default()
        }
    }

    /// Horizontal center of the view, where rings and balls spawn
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.view_width / 2.0
    }
}
