// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! trustnet-kernel: a deterministic mutual-credit network model and the
//! step-transition engine that replays a scripted settlement walk-through.

pub mod config;
pub mod error;
pub mod types;
pub mod graph;
pub mod state;
pub mod scenario;
pub mod replay;
pub mod engine;
pub mod snapshot;
pub mod verify;

pub use config::EngineConfig;
pub use engine::TransitionEngine;
pub use error::{KernelError, Result};
pub use scenario::{FlowHint, Script, Step};
pub use snapshot::Snapshot;
pub use state::effect::{Delta, Effect};
pub use state::network::{NetworkBuilder, NetworkState};

#[cfg(test)]
pub mod tests;
