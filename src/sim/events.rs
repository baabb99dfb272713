//! Per-tick simulation events
//!
//! Collected into `SimState::events` during a tick and cleared at the start
//! of the next one. Purely informational: the renderer/audio collaborator
//! reads them after `step()`, the sim never reads them back.

use serde::{Deserialize, Serialize};

/// Something that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Ball bounced off a ring's solid arc
    Bounced { ball: u32, ring: u32 },
    /// Ball fell through a ring's gap (permanent exemption)
    Passed { ball: u32, ring: u32 },
    /// A new ball entered the simulation
    BallSpawned { ball: u32 },
    /// Ball dropped below the visible area and was removed
    BallDespawned { ball: u32 },
    /// Cascade variant appended a new ring
    RingSpawned { ring: u32 },
}
