//! Reactive Semantics: fixed-point reachability for reactive state machines
//!
//! Given a machine whose transitions are either fired by external triggers
//! or fired autonomously through sub-machine exit zones, the solver computes
//! for every state a lattice value describing the configurations reachable
//! there. The lattice, the assembly context and the machine model are
//! supplied by the caller through traits; the solver only combines values.
//!
//! # Core Concepts
//!
//! - **Lattice**: user-defined join-semilattice of configuration sets
//! - **Machine model**: states, guarded transitions and exit-zone computation
//! - **Solver**: monotone fixed-point iteration with an iteration cap
//! - **Checkpoint**: serializable snapshot a solve can resume from
//!
//! # Example
//!
//! ```rust
//! use reactive_semantics::builder::{MachineBuilder, TransitionBuilder};
//! use reactive_semantics::core::{
//!     Assembly, AssemblyId, EventId, Lattice, StateId, SubmachineId, TransitionId,
//! };
//! use reactive_semantics::solver::{Solver, SolverConfig};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Configs(u16);
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("unknown sub-machine transition")]
//! struct Unknown;
//!
//! struct Plant(AssemblyId);
//!
//! impl Lattice for Configs {
//!     type Context = Plant;
//!     type Error = Unknown;
//!     fn bottom(_: &AssemblyId) -> Self { Configs(0) }
//!     fn and(&self, o: &Self) -> Self { Configs(self.0 & o.0) }
//!     fn or(&self, o: &Self) -> Self { Configs(self.0 | o.0) }
//!     fn transform_by_transition(&self, _: &SubmachineId, t: &TransitionId, _: &Plant)
//!         -> Result<Self, Unknown> {
//!         match t.as_str() {
//!             "heat" if self.0 != 0 => Ok(Configs(0b100)),
//!             "heat" => Ok(Configs(0)),
//!             _ => Err(Unknown),
//!         }
//!     }
//!     fn transform_by_event(&self, _: &SubmachineId, _: &EventId, _: &Plant)
//!         -> Result<Self, Unknown> { Ok(self.clone()) }
//! }
//!
//! impl Assembly for Plant {
//!     type Semantics = Configs;
//!     type Predicate = &'static str;
//!     fn id(&self) -> &AssemblyId { &self.0 }
//!     fn initial_semantics(&self) -> Result<Configs, Unknown> { Ok(Configs(0b001)) }
//!     fn top(&self) -> Configs { Configs(u16::MAX) }
//!     fn predicate_semantics(&self, _: &&'static str) -> Result<Configs, Unknown> {
//!         Ok(Configs(u16::MAX))
//!     }
//! }
//!
//! let machine = MachineBuilder::new()
//!     .name("boiler")
//!     .assembly(Plant(AssemblyId::new("plant")))
//!     .seed("init")
//!     .state("cold")
//!     .state("hot")
//!     .transition(TransitionBuilder::new().from("init").to("cold"))
//!     .unwrap()
//!     .transition(TransitionBuilder::new().from("cold").to("hot").reactive().when("warm"))
//!     .unwrap()
//!     .zones(|_state, _value: &Configs| {
//!         Ok(vec![reactive_semantics::core::ExitZone::new("warm", "heater", "heat")])
//!     })
//!     .build()
//!     .unwrap();
//!
//! let solver = Solver::new(SolverConfig::default()).unwrap();
//! let solution = solver.solve(&machine).unwrap();
//!
//! assert!(solution.is_converged());
//! assert_eq!(solution.get(&StateId::new("cold")), Some(&Configs(0b001)));
//! assert_eq!(solution.get(&StateId::new("hot")), Some(&Configs(0b100)));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod solver;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use checkpoint::Checkpoint;
pub use core::{Assembly, Guard, Lattice, MachineModel, StateNode, Transition};
pub use solver::{Convergence, Solution, SolveError, Solver, SolverConfig};
