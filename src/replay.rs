//! Deterministic Replay Logic.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

use serde::Serialize;
use tracing::trace;

use crate::config::EngineConfig;
use crate::error::{KernelError, Result};
use crate::scenario::Script;
use crate::state::network::NetworkState;
use crate::types::amount::Amount;
use crate::types::id::ParticipantName;
use crate::verify::check_invariants;

/// Applies the effect of step `index` (if any) to `state`, then checks the
/// post-conditions when the config asks for it. Errors carry `index`.
pub fn apply_step(
    state: &mut NetworkState,
    script: &Script,
    index: usize,
    config: &EngineConfig,
) -> Result<()> {
    let Some(effect) = script.step(index).and_then(|step| step.effect.as_ref()) else {
        return Ok(());
    };

    state.apply_effect(effect).map_err(|e| e.at_step(index))?;
    trace!(step = index, "effect applied");

    if config.check_invariants {
        check_invariants(state).map_err(|v| KernelError::InvariantViolated(v).at_step(index))?;
    }
    Ok(())
}

/// The network after steps `1..=index`, replayed from `initial`.
///
/// `index` is clamped to the last step. Step 0 is the baseline, so
/// `state_at(.., 0, ..)` equals `initial`.
pub fn state_at(
    initial: &NetworkState,
    script: &Script,
    index: usize,
    config: &EngineConfig,
) -> Result<NetworkState> {
    let target = script.clamp(index);
    let mut state = initial.clone();
    for i in 1..=target {
        apply_step(&mut state, script, i, config)?;
    }
    Ok(state)
}

/// States for every index of the script, computed with a single fold.
///
/// `timeline(..)[i] == state_at(.., i, ..)` for every `i`.
pub fn timeline(initial: &NetworkState, script: &Script, config: &EngineConfig) -> Result<Vec<NetworkState>> {
    let mut states = Vec::with_capacity(script.len());
    let mut state = initial.clone();
    states.push(state.clone());
    for i in 1..script.len() {
        apply_step(&mut state, script, i, config)?;
        states.push(state.clone());
    }
    Ok(states)
}

/// Value delivered to a merchant by one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub step: usize,
    pub merchant: ParticipantName,
    pub amount: Amount,
}

/// Every `received` assignment made to a merchant over the whole script.
///
/// `received` is overwritten per purchase rather than accumulated, so the
/// total delivered is the sum of these amounts, not the final field value.
pub fn settlements(initial: &NetworkState, script: &Script, config: &EngineConfig) -> Result<Vec<Settlement>> {
    let mut out = Vec::new();
    let mut state = initial.clone();
    for i in 1..script.len() {
        apply_step(&mut state, script, i, config)?;
        let Some(effect) = script.step(i).and_then(|step| step.effect.as_ref()) else {
            continue;
        };
        for (name, amount) in effect.received_settings() {
            let is_merchant = state.participant(name.as_str()).is_some_and(|p| p.is_merchant());
            if is_merchant {
                out.push(Settlement {
                    step: i,
                    merchant: name.clone(),
                    amount,
                });
            }
        }
    }
    Ok(out)
}

/// Sum of all settlement amounts.
pub fn total_settled(settlements: &[Settlement]) -> Amount {
    settlements.iter().map(|s| s.amount).sum()
}
