//! Solver, validation and configuration errors.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A structural defect in a machine model.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelViolation {
    #[error("no seed state")]
    MissingSeed,

    #[error("more than one seed state: {}", join_ids(.seeds))]
    MultipleSeeds { seeds: Vec<StateId> },

    #[error("state id '{id}' is used more than once")]
    DuplicateState { id: StateId },

    #[error("transition #{transition} starts at unknown state '{state}'")]
    UnknownSource { transition: usize, state: StateId },

    #[error("transition #{transition} ends at unknown state '{state}'")]
    UnknownTarget { transition: usize, state: StateId },
}

/// Errors that abort a solve.
///
/// Non-convergence is not an error; see `Convergence`.
#[derive(Debug, Error)]
pub enum SolveError<E> {
    #[error("machine '{machine}' is malformed: {}", join_violations(.violations))]
    MalformedModel {
        machine: String,
        violations: Vec<ModelViolation>,
    },

    #[error(
        "semantics map does not cover machine '{machine}' (missing: [{}], unexpected: [{}])",
        join_ids(.missing),
        join_ids(.unexpected)
    )]
    IncompleteMap {
        machine: String,
        missing: Vec<StateId>,
        unexpected: Vec<StateId>,
    },

    #[error("checkpoint of machine '{checkpoint}' cannot resume machine '{machine}'")]
    CheckpointMismatch { machine: String, checkpoint: String },

    #[error("lattice operation failed: {0}")]
    Lattice(#[source] E),
}

/// Errors raised while loading or validating a `SolverConfig`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid solver configuration: {0}")]
    Invalid(String),

    #[error("failed to parse solver configuration: {0}")]
    Parse(String),
}

fn join_ids(ids: &[StateId]) -> String {
    ids.iter()
        .map(StateId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_violations(violations: &[ModelViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
