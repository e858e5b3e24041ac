// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants and engine settings.

/// Amounts are stored in the smallest currency unit; displays divide by this.
pub const DISPLAY_UNIT: i64 = 1_000_000;

/// Suffix printed after an amount expressed in `DISPLAY_UNIT`s.
pub const DISPLAY_SUFFIX: &str = "M";

/// Settings for replay and the transition engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Validate balance and trust-line invariants after every applied effect.
    pub check_invariants: bool,
}

impl EngineConfig {
    pub fn strict() -> Self {
        Self { check_invariants: true }
    }

    pub fn lenient() -> Self {
        Self { check_invariants: false }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            check_invariants: cfg!(debug_assertions),
        }
    }
}
