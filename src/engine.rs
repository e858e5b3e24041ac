// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Transition engine: a cursor over a script.
//!
//! The engine stores only the current index next to the state derived from
//! it. Every index change rebuilds the state by replaying `1..=index` from the
//! initial network, so no effect can be applied twice or skipped.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::replay::{state_at, timeline};
use crate::scenario::{demo, Script, Step};
use crate::snapshot::Snapshot;
use crate::state::network::NetworkState;

#[derive(Clone, Debug)]
pub struct TransitionEngine {
    initial: NetworkState,
    script: Script,
    config: EngineConfig,
    index: usize,
    state: NetworkState,
}

impl TransitionEngine {
    /// Builds an engine positioned at step 0.
    ///
    /// The whole script is replayed once up front so that a dangling
    /// reference or (with `check_invariants`) a broken post-condition fails
    /// here instead of at some later navigation.
    pub fn new(initial: NetworkState, script: Script, config: EngineConfig) -> Result<Self> {
        timeline(&initial, &script, &config)?;
        let state = initial.clone();
        debug!(steps = script.len(), "transition engine ready");
        Ok(Self {
            initial,
            script,
            config,
            index: 0,
            state,
        })
    }

    /// Engine over the compiled-in demo network and script.
    pub fn demo(config: EngineConfig) -> Result<Self> {
        Self::new(demo::network()?, demo::script()?, config)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.script.last_index()
    }

    pub fn state(&self) -> &NetworkState {
        &self.state
    }

    pub fn initial(&self) -> &NetworkState {
        &self.initial
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_step(&self) -> &Step {
        // The index is always clamped into a non-empty script.
        &self.script.steps()[self.index]
    }

    /// Moves to `index`, clamped into the script. Returns `true` if the
    /// index changed.
    pub fn go_to(&mut self, index: usize) -> Result<bool> {
        let target = self.script.clamp(index);
        if target == self.index {
            return Ok(false);
        }
        let state = state_at(&self.initial, &self.script, target, &self.config)?;
        debug!(from = self.index, to = target, "step changed");
        self.state = state;
        self.index = target;
        Ok(true)
    }

    /// No-op at the last step.
    pub fn next(&mut self) -> Result<bool> {
        self.go_to(self.index.saturating_add(1))
    }

    /// No-op at step 0.
    pub fn previous(&mut self) -> Result<bool> {
        self.go_to(self.index.saturating_sub(1))
    }

    /// Read-only view for a renderer, valid until the next transition.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.index, self.script.len(), self.current_step(), &self.state)
    }
}
