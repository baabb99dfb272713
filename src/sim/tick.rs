//! Per-frame simulation tick
//!
//! Advances the simulation deterministically: rings rotate, balls
//! integrate against the full ring sequence, spawn policy runs, then
//! out-of-bounds balls are compacted away. One call per rendered frame.

use glam::Vec2;
use rand::Rng;

use super::events::SimEvent;
use super::state::SimState;
use crate::config::{SimConfig, SpawnPolicy};
use crate::consts::*;

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, cfg: &SimConfig) {
    state.events.clear();
    state.time_ticks += 1;

    // Rings first, so balls resolve against this tick's gap phase
    for ring in &mut state.rings {
        ring.advance();
    }

    {
        let rings = &state.rings;
        let events = &mut state.events;
        for ball in state.balls.iter_mut() {
            ball.integrate(rings, cfg.gravity, events);
        }
    }

    match cfg.spawn_policy {
        SpawnPolicy::Replace => replace_pass(state, cfg),
        SpawnPolicy::Cascade => cascade_pass(state, cfg),
    }

    despawn_pass(state, cfg);
}

/// Single-ring policy: once a passed ball has dropped below the ring,
/// remove every passed ball and spawn a replacement pair at the ring's
/// center line.
///
/// Each qualifying ball fires the trigger, so several balls clearing the
/// ring in the same tick spawn several pairs. The original behaved the
/// same way (its rebuild-and-push ran once per qualifying ball); kept
/// as-is rather than silently deduplicated.
fn replace_pass(state: &mut SimState, cfg: &SimConfig) {
    let Some(ring) = state.rings.first() else {
        return;
    };
    let ring_id = ring.id;
    let ring_y = ring.center.y;
    let ring_bottom = ring.center.y + ring.radius;

    let triggers = state
        .balls
        .iter()
        .filter(|b| b.has_passed(ring_id) && b.pos.y > ring_bottom)
        .count();
    if triggers == 0 {
        return;
    }

    state.balls.retain(|b| !b.has_passed(ring_id));
    for _ in 0..triggers {
        state.spawn_ball(
            Vec2::new(cfg.center_x() - REPLACE_BALL_OFFSET, ring_y),
            REPLACE_BALL_RADIUS,
        );
        state.spawn_ball(
            Vec2::new(cfg.center_x() + REPLACE_BALL_OFFSET, ring_y),
            REPLACE_BALL_RADIUS,
        );
    }
}

/// Multi-ring policy: periodically append a ring below the last one, and
/// let fully-cleared balls roll for a bonus ball near the top.
fn cascade_pass(state: &mut SimState, cfg: &SimConfig) {
    state.ticks_since_ring += 1;
    if state.ticks_since_ring >= cfg.ring_interval_ticks && !state.balls.is_empty() {
        state.ticks_since_ring = 0;
        state.spawn_cascade_ring(cfg);
    }

    // A ball is eligible once it has cleared every ring currently present
    let ring_count = state.rings.len();
    let mut bonus = 0usize;
    {
        let rng = &mut state.rng;
        for ball in state.balls.iter() {
            if cleared_all(ball.passed.len(), ring_count)
                && rng.random_bool(cfg.cascade_spawn_chance)
            {
                bonus += 1;
            }
        }
    }
    for _ in 0..bonus {
        let x = cfg.center_x() + state.rng.random_range(-60.0..60.0);
        state.spawn_ball_random_radius(Vec2::new(x, cfg.spawn_y));
    }
}

/// Eligibility for the cascade bonus roll
#[inline]
fn cleared_all(passed: usize, ring_count: usize) -> bool {
    passed == ring_count
}

/// Remove balls that have fallen below the visible area
fn despawn_pass(state: &mut SimState, cfg: &SimConfig) {
    let view_height = cfg.view_height;
    for ball in &state.balls {
        if ball.is_out_of_bounds(view_height) {
            state.events.push(SimEvent::BallDespawned { ball: ball.id });
        }
    }
    state.balls.retain(|b| !b.is_out_of_bounds(view_height));
}
