// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Read-only view of the engine for renderers.

pub mod encode;

use serde::Serialize;

use crate::graph::edge::TrustLine;
use crate::graph::node::Participant;
use crate::scenario::Step;
use crate::state::network::NetworkState;
use crate::types::id::ParticipantName;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Snapshot<'a> {
    pub index: usize,
    pub step_count: usize,
    pub step: &'a Step,
    pub network: &'a NetworkState,
}

impl<'a> Snapshot<'a> {
    pub fn new(index: usize, step_count: usize, step: &'a Step, network: &'a NetworkState) -> Self {
        Self {
            index,
            step_count,
            step,
            network,
        }
    }

    pub fn participants(&self) -> impl Iterator<Item = &'a Participant> {
        self.network.participants()
    }

    pub fn trust_lines(&self) -> impl Iterator<Item = &'a TrustLine> {
        self.network.trust_lines()
    }

    /// Highlighted path of the active step, empty when the step has no flow.
    pub fn path(&self) -> &'a [ParticipantName] {
        self.step.flow.as_ref().map(|f| f.path.as_slice()).unwrap_or(&[])
    }

    /// Filled fraction of the path, 0 when the step has no flow.
    pub fn progress(&self) -> f64 {
        self.step.flow.as_ref().map(|f| f.progress).unwrap_or(0.0)
    }

    pub fn is_highlighted(&self, name: &str) -> bool {
        self.step.flow.as_ref().is_some_and(|f| f.contains(name))
    }

    /// A line is animated when both of its endpoints are on the path.
    pub fn is_line_active(&self, line: &TrustLine) -> bool {
        self.is_highlighted(line.from.as_str()) && self.is_highlighted(line.to.as_str())
    }
}
