//! Trust line definition.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::types::amount::Amount;
use crate::types::enums::TrustLineKind;
use crate::types::id::ParticipantName;

/// `from` extends credit to `to` up to `capacity`; `used` has been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLine {
    pub from: ParticipantName,
    pub to: ParticipantName,
    pub capacity: Amount,
    pub used: Amount,
}

impl TrustLine {
    pub fn new(from: ParticipantName, to: ParticipantName, capacity: Amount) -> Self {
        Self {
            from,
            to,
            capacity,
            used: 0,
        }
    }

    pub fn kind(&self) -> TrustLineKind {
        if self.capacity == 0 {
            TrustLineKind::Settlement
        } else {
            TrustLineKind::Credit
        }
    }

    /// Credit still available on this line. Negative only if the line is overdrawn.
    pub fn headroom(&self) -> Amount {
        self.capacity.saturating_sub(self.used)
    }

    pub fn connects(&self, from: &str, to: &str) -> bool {
        self.from.as_str() == from && self.to.as_str() == to
    }
}
