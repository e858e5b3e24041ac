// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Network state definition.

use serde::Serialize;
use tracing::trace;

use crate::error::{KernelError, Result};
use crate::graph::adjacency::{inbound_headroom, Direction, LineIterator};
use crate::graph::edge::TrustLine;
use crate::graph::node::Participant;
use crate::graph::pool::{ParticipantPool, TrustLinePool};
use crate::state::effect::{BalanceChange, CapacityUpdate, Delta, Effect, UsageDelta};
use crate::types::amount::Amount;
use crate::types::enums::Role;
use crate::types::id::ParticipantName;

/// All participants and trust lines at one point of a scenario.
///
/// The topology is fixed once built: there is no way to add or remove a
/// participant or line after `NetworkBuilder::build`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NetworkState {
    pub(crate) participants: ParticipantPool,
    #[serde(rename = "trust_lines")]
    pub(crate) lines: TrustLinePool,
}

impl NetworkState {
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::default()
    }

    // --- Read APIs ---

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn trust_lines(&self) -> impl Iterator<Item = &TrustLine> {
        self.lines.iter()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn trust_line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.get(name)
    }

    pub fn trust_line(&self, from: &str, to: &str) -> Option<&TrustLine> {
        let pair = self.pair(from, to)?;
        self.lines.get(pair)
    }

    pub fn outgoing<'a>(&'a self, name: &'a str) -> LineIterator<'a> {
        LineIterator::new(&self.lines, name, Direction::Outgoing)
    }

    pub fn incoming<'a>(&'a self, name: &'a str) -> LineIterator<'a> {
        LineIterator::new(&self.lines, name, Direction::Incoming)
    }

    /// Own balance plus the headroom of every credit line extended to `name`.
    pub fn available_credit(&self, name: &str) -> Option<Amount> {
        let participant = self.participants.get(name)?;
        Some(participant.balance.saturating_add(inbound_headroom(&self.lines, name)))
    }

    pub fn merchants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.role == Role::Merchant)
    }

    fn pair(&self, from: &str, to: &str) -> Option<(usize, usize)> {
        Some((self.participants.slot_of(from)?, self.participants.slot_of(to)?))
    }

    // --- Write Logic ---

    /// Applies one step effect.
    ///
    /// Not idempotent: applying the same effect twice double-counts every
    /// delta. On error the state may be partially updated and must be
    /// discarded; replay always works on a fresh clone.
    pub fn apply_effect(&mut self, effect: &Effect) -> Result<()> {
        for update in &effect.capacity_updates {
            self.apply_capacity_update(update)?;
        }
        for change in &effect.balance_deltas {
            self.apply_balance_change(change)?;
        }
        if let Some(usage) = &effect.usage_delta {
            self.apply_usage_delta(usage)?;
        }
        Ok(())
    }

    fn apply_capacity_update(&mut self, update: &CapacityUpdate) -> Result<()> {
        if update.new_capacity < 0 {
            return Err(KernelError::NegativeCapacity {
                from: update.from.clone(),
                to: update.to.clone(),
                capacity: update.new_capacity,
            });
        }
        let line = self.line_mut(&update.from, &update.to)?;
        trace!(from = %update.from, to = %update.to, capacity = update.new_capacity, "capacity updated");
        line.capacity = update.new_capacity;
        Ok(())
    }

    fn apply_balance_change(&mut self, change: &BalanceChange) -> Result<()> {
        let participant = self
            .participants
            .get_mut(change.participant.as_str())
            .ok_or_else(|| KernelError::UnknownParticipant(change.participant.clone()))?;
        match change.delta {
            Delta::Add(amount) => {
                participant.balance = participant
                    .balance
                    .checked_add(amount)
                    .ok_or(KernelError::Overflow)?;
            }
            Delta::SetField(field, value) => participant.set_field(field, value),
        }
        trace!(participant = %change.participant, delta = ?change.delta, "balance changed");
        Ok(())
    }

    fn apply_usage_delta(&mut self, usage: &UsageDelta) -> Result<()> {
        let line = self.line_mut(&usage.from, &usage.to)?;
        line.used = line.used.checked_add(usage.used_delta).ok_or(KernelError::Overflow)?;
        trace!(from = %usage.from, to = %usage.to, used = line.used, "trust line drawn");
        Ok(())
    }

    fn line_mut(&mut self, from: &ParticipantName, to: &ParticipantName) -> Result<&mut TrustLine> {
        let unknown = || KernelError::UnknownTrustLine {
            from: from.clone(),
            to: to.clone(),
        };
        let pair = self.pair(from.as_str(), to.as_str()).ok_or_else(unknown)?;
        self.lines.get_mut(pair).ok_or_else(unknown)
    }
}

/// Builds the initial network. Participants must be added before the
/// trust lines that name them.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    participants: Vec<Participant>,
    lines: Vec<TrustLine>,
}

impl NetworkBuilder {
    pub fn participant(mut self, name: impl Into<ParticipantName>, balance: Amount) -> Self {
        self.participants.push(Participant::new(name.into(), Role::Member, balance));
        self
    }

    pub fn merchant(mut self, name: impl Into<ParticipantName>) -> Self {
        self.participants.push(Participant::new(name.into(), Role::Merchant, 0));
        self
    }

    pub fn trust_line(
        mut self,
        from: impl Into<ParticipantName>,
        to: impl Into<ParticipantName>,
        capacity: Amount,
    ) -> Self {
        self.lines.push(TrustLine::new(from.into(), to.into(), capacity));
        self
    }

    pub fn build(self) -> Result<NetworkState> {
        let mut state = NetworkState::default();
        for participant in self.participants {
            state.participants.insert(participant)?;
        }
        for line in self.lines {
            if line.capacity < 0 {
                return Err(KernelError::NegativeCapacity {
                    from: line.from,
                    to: line.to,
                    capacity: line.capacity,
                });
            }
            let from = state
                .participants
                .slot_of(line.from.as_str())
                .ok_or_else(|| KernelError::UnknownParticipant(line.from.clone()))?;
            let to = state
                .participants
                .slot_of(line.to.as_str())
                .ok_or_else(|| KernelError::UnknownParticipant(line.to.clone()))?;
            state.lines.insert((from, to), line)?;
        }
        Ok(state)
    }
}
