//! Participant and trust line pools.
//!
//! Both pools keep insertion order, which is the canonical order for
//! hashing, snapshots and rendering. Lookups go through an index map.

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

use crate::error::{KernelError, Result};
use crate::graph::edge::TrustLine;
use crate::graph::node::Participant;
use crate::types::id::ParticipantName;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipantPool {
    pub(crate) participants: Vec<Participant>,
    by_name: FxHashMap<ParticipantName, usize>,
}

impl ParticipantPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn raw_participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn insert(&mut self, participant: Participant) -> Result<usize> {
        if self.by_name.contains_key(&participant.name) {
            return Err(KernelError::DuplicateParticipant(participant.name));
        }
        let slot = self.participants.len();
        self.by_name.insert(participant.name.clone(), slot);
        self.participants.push(participant);
        Ok(slot)
    }

    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.get(self.slot_of(name)?)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Participant> {
        let slot = self.slot_of(name)?;
        self.participants.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl Serialize for ParticipantPool {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.participants)
    }
}

/// Trust lines keyed by the slot pair `(from, to)` of a `ParticipantPool`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrustLinePool {
    pub(crate) lines: Vec<TrustLine>,
    by_pair: FxHashMap<(usize, usize), usize>,
}

impl TrustLinePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn raw_lines(&self) -> &[TrustLine] {
        &self.lines
    }

    pub fn insert(&mut self, pair: (usize, usize), line: TrustLine) -> Result<usize> {
        if self.by_pair.contains_key(&pair) {
            return Err(KernelError::DuplicateTrustLine {
                from: line.from,
                to: line.to,
            });
        }
        let slot = self.lines.len();
        self.by_pair.insert(pair, slot);
        self.lines.push(line);
        Ok(slot)
    }

    pub fn get(&self, pair: (usize, usize)) -> Option<&TrustLine> {
        self.lines.get(*self.by_pair.get(&pair)?)
    }

    pub fn get_mut(&mut self, pair: (usize, usize)) -> Option<&mut TrustLine> {
        let slot = *self.by_pair.get(&pair)?;
        self.lines.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrustLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Serialize for TrustLinePool {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.lines)
    }
}
