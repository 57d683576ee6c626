//! Fixed-point computation of per-state semantics.
//!
//! # Key Concepts
//!
//! - **Contribution**: the value one transition feeds into its target
//! - **Pass**: zone refresh for every state, then recomputation of every
//!   non-seed state from the previous pass's map
//! - **Fixed point**: a map that one more pass leaves unchanged
//!
//! The solver is synchronous and performs no I/O besides `tracing` events.

mod config;
mod contribution;
mod error;
mod fixpoint;
mod history;
mod solution;
mod validate;
mod zones;

use crate::core::{ExitZone, MachineModel, PredicateOf, SemanticsError, SemanticsOf, StateId};
use std::collections::BTreeMap;

pub use config::{SolverConfig, DEFAULT_MAX_ITERATIONS};
pub use contribution::contribution;
pub use error::{ConfigError, ModelViolation, SolveError};
pub use fixpoint::Solver;
pub use history::{IterationRecord, SolveHistory};
pub use solution::{Convergence, Solution};
pub use validate::{validate_machine, ModelCheck};
pub use zones::refresh_zones;

/// Working map from state to value.
pub type SemanticsMap<S> = BTreeMap<StateId, S>;

/// Exit zones of every state.
pub type ZoneMap<P> = BTreeMap<StateId, Vec<ExitZone<P>>>;

/// Solution type produced for a machine model.
pub type MachineSolution<M> =
    Solution<SemanticsOf<<M as MachineModel>::Assembly>, PredicateOf<M>>;

/// Error type produced for a machine model.
pub type MachineError<M> = SolveError<SemanticsError<<M as MachineModel>::Assembly>>;
