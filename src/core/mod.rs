//! Core vocabulary of reactive machines and their semantics.
//!
//! This module contains the types the solver operates on and the traits
//! its collaborators implement:
//! - Identifiers, states, transitions, actions and exit zones
//! - Guard propositions as a two-variant sum type
//! - The `Lattice`, `Assembly` and `MachineModel` contracts
//!
//! Nothing in this module performs I/O or holds mutable state.

mod guard;
mod ids;
mod lattice;
mod model;
mod state;
mod transition;

pub use guard::Guard;
pub use ids::{AssemblyId, EventId, StateId, SubmachineId, TransitionId};
pub use lattice::{Assembly, Lattice, SemanticsError, SemanticsOf};
pub use model::{MachineModel, PredicateOf};
pub use state::StateNode;
pub use transition::{Action, ExitZone, Transition};
