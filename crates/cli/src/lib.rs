pub mod commands;
pub mod telemetry;

use anyhow::Context;
use trustnet_kernel::{EngineConfig, TransitionEngine};

/// Resolves the `--strict` / `--lenient` flags against the build default.
pub fn engine_config(strict: bool, lenient: bool) -> EngineConfig {
    match (strict, lenient) {
        (true, _) => EngineConfig::strict(),
        (_, true) => EngineConfig::lenient(),
        _ => EngineConfig::default(),
    }
}

pub fn load_engine(config: EngineConfig) -> anyhow::Result<TransitionEngine> {
    TransitionEngine::demo(config).context("Failed to load the built-in scenario")
}
