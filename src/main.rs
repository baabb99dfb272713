//! Ring Drop headless demo
//!
//! Runs the simulation without a renderer, logging events as they happen
//! and dumping a JSON snapshot of the final state. Usage:
//!
//! ```text
//! ring-drop [seed] [ticks] [replace|cascade]
//! ```

use ring_drop::sim::SimEvent;
use ring_drop::{SimConfig, Simulation, SpawnPolicy};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB0A11);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);
    let policy = args
        .next()
        .and_then(|s| SpawnPolicy::from_str(&s))
        .unwrap_or_default();

    let cfg = match policy {
        SpawnPolicy::Replace => SimConfig::default(),
        SpawnPolicy::Cascade => SimConfig::cascade(),
    };

    log::info!("running {ticks} ticks, seed={seed}, policy={}", policy.as_str());

    let mut sim = Simulation::new(cfg, seed);
    for _ in 0..ticks {
        sim.step();
        for event in sim.events() {
            match event {
                SimEvent::Bounced { ball, ring } => {
                    log::debug!("tick {}: ball {ball} bounced off ring {ring}", sim.state().time_ticks)
                }
                SimEvent::Passed { ball, ring } => {
                    log::info!("tick {}: ball {ball} passed ring {ring}", sim.state().time_ticks)
                }
                SimEvent::BallSpawned { ball } => {
                    log::info!("tick {}: ball {ball} spawned", sim.state().time_ticks)
                }
                SimEvent::BallDespawned { ball } => {
                    log::info!("tick {}: ball {ball} despawned", sim.state().time_ticks)
                }
                SimEvent::RingSpawned { ring } => {
                    log::info!("tick {}: ring {ring} spawned", sim.state().time_ticks)
                }
            }
        }
    }

    match serde_json::to_string_pretty(sim.state()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot failed: {err}"),
    }
}
