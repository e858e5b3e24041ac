//! Participant definition.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::types::amount::Amount;
use crate::types::enums::{BalanceField, Role};
use crate::types::id::ParticipantName;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: ParticipantName,
    pub role: Role,
    pub balance: Amount,
    /// Value credited to a merchant by the most recent settlement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<Amount>,
}

impl Participant {
    pub fn new(name: ParticipantName, role: Role, balance: Amount) -> Self {
        let received = match role {
            Role::Merchant => Some(0),
            Role::Member => None,
        };
        Self {
            name,
            role,
            balance,
            received,
        }
    }

    pub fn is_merchant(&self) -> bool {
        self.role == Role::Merchant
    }

    pub fn set_field(&mut self, field: BalanceField, value: Amount) {
        match field {
            BalanceField::Balance => self.balance = value,
            BalanceField::Received => self.received = Some(value),
        }
    }
}
