//! Identity types.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Unique participant name. Names are the only identity a participant has.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantName(pub String);

impl ParticipantName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ParticipantName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ParticipantName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
