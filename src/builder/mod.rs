//! Builder API for ergonomic machine construction.
//!
//! This module provides an in-memory `MachineModel` and fluent builders for
//! it, so that machines can be assembled in code and handed to the solver.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::{Machine, MachineBuilder, ZoneFn};
pub use transition::TransitionBuilder;
