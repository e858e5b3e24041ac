// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod id;
pub mod enums;
pub mod amount;

pub use amount::{format_amount, Amount};
pub use enums::{BalanceField, Role, TrustLineKind};
pub use id::ParticipantName;
