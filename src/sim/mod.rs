//! Deterministic simulation module
//!
//! All physics logic lives here. This module must be pure and deterministic:
//! - Tick-driven only (one tick per rendered frame, no wall-clock reads)
//! - Seeded RNG only, carried inside the state
//! - Stable iteration order (rings in insertion order, balls by spawn)
//! - No rendering or platform dependencies

pub mod ball;
pub mod driver;
pub mod events;
pub mod ring;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use driver::Simulation;
pub use events::SimEvent;
pub use ring::Ring;
pub use state::SimState;
pub use tick::tick;
