//! States of a reactive machine as seen by the solver.

use super::ids::StateId;
use serde::{Deserialize, Serialize};

/// A state of the machine model.
///
/// The solver never creates or destroys states. It reads their identity and
/// the seed flag, and keys its working map by `id`.
///
/// # Example
///
/// ```rust
/// use reactive_semantics::core::StateNode;
///
/// let seed = StateNode::seed("init");
/// let idle = StateNode::new("idle");
///
/// assert!(seed.is_seed);
/// assert!(!idle.is_seed);
/// assert_eq!(idle.name, "idle");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    /// Identity, unique within the machine.
    pub id: StateId,
    /// Display name for logging.
    pub name: String,
    /// The distinguished entry pseudostate.
    pub is_seed: bool,
}

impl StateNode {
    /// An ordinary state whose name doubles as its id.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: StateId::new(name.clone()),
            name,
            is_seed: false,
        }
    }

    /// The seed pseudostate whose name doubles as its id.
    pub fn seed(name: impl Into<String>) -> Self {
        Self {
            is_seed: true,
            ..Self::new(name)
        }
    }

    /// Override the id while keeping the display name.
    pub fn with_id(mut self, id: impl Into<StateId>) -> Self {
        self.id = id.into();
        self
    }
}
