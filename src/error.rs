// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::types::id::ParticipantName;
use crate::verify::InvariantViolation;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error("unknown participant `{0}`")]
    UnknownParticipant(ParticipantName),

    #[error("unknown trust line {from} -> {to}")]
    UnknownTrustLine {
        from: ParticipantName,
        to: ParticipantName,
    },

    #[error("participant `{0}` already exists")]
    DuplicateParticipant(ParticipantName),

    #[error("trust line {from} -> {to} already exists")]
    DuplicateTrustLine {
        from: ParticipantName,
        to: ParticipantName,
    },

    #[error("trust line {from} -> {to} has negative capacity {capacity}")]
    NegativeCapacity {
        from: ParticipantName,
        to: ParticipantName,
        capacity: i64,
    },

    /// Generic overflow error for amount arithmetic.
    #[error("amount arithmetic overflow")]
    Overflow,

    #[error("invariant violated: {0}")]
    InvariantViolated(InvariantViolation),

    #[error("scenario script has no steps")]
    EmptyScript,

    #[error("baseline step must not carry an effect")]
    BaselineEffect,

    #[error("flow progress {progress} outside [0, 1]")]
    InvalidProgress { progress: f64 },

    #[error("step {step}: {source}")]
    AtStep {
        step: usize,
        #[source]
        source: Box<KernelError>,
    },
}

impl KernelError {
    /// Attaches the index of the step whose effect produced this error.
    pub fn at_step(self, step: usize) -> Self {
        match self {
            // Already attributed; keep the innermost step.
            KernelError::AtStep { .. } => self,
            other => KernelError::AtStep {
                step,
                source: Box::new(other),
            },
        }
    }

    /// The step index carried by this error, if any.
    pub fn step(&self) -> Option<usize> {
        match self {
            KernelError::AtStep { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// The error with any step attribution stripped.
    pub fn root(&self) -> &KernelError {
        match self {
            KernelError::AtStep { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
pub type Result<T> = KernelResult<T>;
