//! Deterministic Hashing and Invariant Verification.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use thiserror::Error;

use crate::state::network::NetworkState;
use crate::types::amount::Amount;
use crate::types::id::ParticipantName;

/// A ledger post-condition that a correctly authored script never breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("participant `{name}` has negative balance {balance}")]
    NegativeBalance { name: ParticipantName, balance: Amount },

    #[error("trust line {from} -> {to} has negative usage {used}")]
    NegativeUsage {
        from: ParticipantName,
        to: ParticipantName,
        used: Amount,
    },

    #[error("trust line {from} -> {to} is overdrawn: used {used} exceeds capacity {capacity}")]
    OverCapacity {
        from: ParticipantName,
        to: ParticipantName,
        used: Amount,
        capacity: Amount,
    },
}

/// Returns the first violated invariant, scanning participants then lines
/// in canonical order.
pub fn check_invariants(state: &NetworkState) -> core::result::Result<(), InvariantViolation> {
    for participant in state.participants.raw_participants() {
        if participant.balance < 0 {
            return Err(InvariantViolation::NegativeBalance {
                name: participant.name.clone(),
                balance: participant.balance,
            });
        }
    }

    for line in state.lines.raw_lines() {
        if line.used < 0 {
            return Err(InvariantViolation::NegativeUsage {
                from: line.from.clone(),
                to: line.to.clone(),
                used: line.used,
            });
        }
        if line.used > line.capacity {
            return Err(InvariantViolation::OverCapacity {
                from: line.from.clone(),
                to: line.to.clone(),
                used: line.used,
                capacity: line.capacity,
            });
        }
    }

    Ok(())
}

/// Computes the cryptographic hash of a network state.
///
/// **Scope**: covers the ledger only (participants and trust lines in
/// canonical order). Flow hints and the engine cursor are excluded, so two
/// indices with identical ledgers hash the same.
pub fn network_state_hash(state: &NetworkState) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();

    // 1. Participants (Canonical Order: By Slot)
    hasher.update(&(state.participants.len() as u32).to_le_bytes());
    for (i, participant) in state.participants.raw_participants().iter().enumerate() {
        hasher.update(&(i as u32).to_le_bytes());
        hash_str(&mut hasher, participant.name.as_str());
        hasher.update(&[participant.role as u8]);
        hasher.update(&participant.balance.to_le_bytes());
        if let Some(received) = participant.received {
            hasher.update(&[1]); // Presence Marker
            hasher.update(&received.to_le_bytes());
        } else {
            hasher.update(&[0]); // Absence Marker
        }
    }

    // 2. Trust Lines (Canonical Order: By Slot)
    hasher.update(&(state.lines.len() as u32).to_le_bytes());
    for (i, line) in state.lines.raw_lines().iter().enumerate() {
        hasher.update(&(i as u32).to_le_bytes());
        hash_str(&mut hasher, line.from.as_str());
        hash_str(&mut hasher, line.to.as_str());
        hasher.update(&line.capacity.to_le_bytes());
        hasher.update(&line.used.to_le_bytes());
    }

    *hasher.finalize().as_bytes()
}

// Length prefix keeps ("ab", "c") distinct from ("a", "bc").
fn hash_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&(s.len() as u32).to_le_bytes());
    hasher.update(s.as_bytes());
}

/// Lowercase hex rendering of a state hash.
pub fn hash_hex(hash: &[u8; 32]) -> String {
    blake3::Hash::from(*hash).to_hex().to_string()
}
