// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Credit network enums.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Role {
    #[default]
    Member = 0,
    /// Final recipient of settled purchases. Renderers give it a fixed position.
    Merchant = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TrustLineKind {
    /// `from` extends credit to `to`.
    Credit = 0,
    /// Zero-capacity edge to the merchant; pure value transfer.
    Settlement = 1,
}

/// Participant field that a `Delta::SetField` overwrites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BalanceField {
    Balance = 0,
    Received = 1,
}

impl BalanceField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceField::Balance => "balance",
            BalanceField::Received => "received",
        }
    }
}
