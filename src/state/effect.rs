// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Step effect definitions.

use serde::{Deserialize, Serialize};

use crate::types::amount::Amount;
use crate::types::enums::BalanceField;
use crate::types::id::ParticipantName;

/// Change to a single participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delta {
    /// Signed amount added to `balance`.
    Add(Amount),
    /// Literal value replacing the named field.
    SetField(BalanceField, Amount),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub participant: ParticipantName,
    pub delta: Delta,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageDelta {
    pub from: ParticipantName,
    pub to: ParticipantName,
    pub used_delta: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityUpdate {
    pub from: ParticipantName,
    pub to: ParticipantName,
    pub new_capacity: Amount,
}

/// Ledger delta attached to a step. Applied by `NetworkState::apply_effect`
/// in this order: capacity updates, balance deltas, usage delta.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capacity_updates: Vec<CapacityUpdate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub balance_deltas: Vec<BalanceChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_delta: Option<UsageDelta>,
}

impl Effect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` (possibly negative) to a participant's balance.
    pub fn add(mut self, participant: impl Into<ParticipantName>, amount: Amount) -> Self {
        self.balance_deltas.push(BalanceChange {
            participant: participant.into(),
            delta: Delta::Add(amount),
        });
        self
    }

    /// Overwrites one field of a participant.
    pub fn set(
        mut self,
        participant: impl Into<ParticipantName>,
        field: BalanceField,
        value: Amount,
    ) -> Self {
        self.balance_deltas.push(BalanceChange {
            participant: participant.into(),
            delta: Delta::SetField(field, value),
        });
        self
    }

    /// Draws `amount` against the `from -> to` trust line.
    pub fn draw(
        mut self,
        from: impl Into<ParticipantName>,
        to: impl Into<ParticipantName>,
        amount: Amount,
    ) -> Self {
        self.usage_delta = Some(UsageDelta {
            from: from.into(),
            to: to.into(),
            used_delta: amount,
        });
        self
    }

    pub fn set_capacity(
        mut self,
        from: impl Into<ParticipantName>,
        to: impl Into<ParticipantName>,
        new_capacity: Amount,
    ) -> Self {
        self.capacity_updates.push(CapacityUpdate {
            from: from.into(),
            to: to.into(),
            new_capacity,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.capacity_updates.is_empty() && self.balance_deltas.is_empty() && self.usage_delta.is_none()
    }

    /// Value this effect settles into `received` fields, by participant.
    pub fn received_settings(&self) -> impl Iterator<Item = (&ParticipantName, Amount)> {
        self.balance_deltas.iter().filter_map(|change| match change.delta {
            Delta::SetField(BalanceField::Received, value) => Some((&change.participant, value)),
            _ => None,
        })
    }
}
