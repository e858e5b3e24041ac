// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Scenario script: an ordered, immutable list of steps.

pub mod demo;

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, Result};
use crate::state::effect::Effect;
use crate::types::id::ParticipantName;

/// Presentation hint: which participants to highlight and how much of the
/// path to draw as filled. Never touches the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowHint {
    pub path: Vec<ParticipantName>,
    pub progress: f64,
}

impl FlowHint {
    pub fn new<I, N>(path: I, progress: f64) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ParticipantName>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            progress,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path.iter().any(|p| p.as_str() == name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<FlowHint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
}

impl Step {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            flow: None,
            effect: None,
        }
    }

    pub fn with_flow(mut self, flow: FlowHint) -> Self {
        self.flow = Some(flow);
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// A validated script. Step 0 is the baseline and has no effect.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        let baseline = steps.first().ok_or(KernelError::EmptyScript)?;
        if baseline.effect.is_some() {
            return Err(KernelError::BaselineEffect.at_step(0));
        }
        for (index, step) in steps.iter().enumerate() {
            if let Some(flow) = &step.flow {
                if !(0.0..=1.0).contains(&flow.progress) {
                    return Err(KernelError::InvalidProgress {
                        progress: flow.progress,
                    }
                    .at_step(index));
                }
            }
        }
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed script.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Clamps an arbitrary index into `[0, last_index]`.
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.last_index())
    }
}
