//! Guard propositions attached to transitions.
//!
//! A guard is either the distinguished always-true proposition or an
//! arbitrary predicate value. The solver never evaluates predicates; it
//! converts them to lattice values through the assembly and compares them
//! against exit-zone targets.

use serde::{Deserialize, Serialize};

/// Proposition guarding a transition.
///
/// # Example
///
/// ```rust
/// use reactive_semantics::core::Guard;
///
/// let always: Guard<&str> = Guard::Always;
/// let door_open = Guard::Predicate("door.open");
///
/// assert!(always.is_always());
/// assert!(door_open.admits(&"door.open"));
/// assert!(!door_open.admits(&"door.closed"));
/// assert!(always.admits(&"anything"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guard<P> {
    /// Holds in every configuration.
    Always,
    /// Holds where the predicate holds.
    Predicate(P),
}

impl<P: PartialEq> Guard<P> {
    /// Whether this is the always-true proposition.
    pub fn is_always(&self) -> bool {
        matches!(self, Guard::Always)
    }

    /// Whether an exit zone targeting `target` may fire this guard.
    ///
    /// `Always` admits every zone; a predicate admits only zones whose
    /// target equals it.
    pub fn admits(&self, target: &P) -> bool {
        match self {
            Guard::Always => true,
            Guard::Predicate(predicate) => predicate == target,
        }
    }

    /// The predicate, if any.
    pub fn predicate(&self) -> Option<&P> {
        match self {
            Guard::Always => None,
            Guard::Predicate(predicate) => Some(predicate),
        }
    }
}

impl<P> Default for Guard<P> {
    fn default() -> Self {
        Guard::Always
    }
}
