//! Transitions, post-transition actions and exit zones.

use super::guard::Guard;
use super::ids::{EventId, StateId, SubmachineId, TransitionId};
use serde::{Deserialize, Serialize};

/// An event delivered to a sub-machine after a transition fires.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub submachine: SubmachineId,
    pub event: EventId,
}

impl Action {
    pub fn new(submachine: impl Into<SubmachineId>, event: impl Into<EventId>) -> Self {
        Self {
            submachine: submachine.into(),
            event: event.into(),
        }
    }
}

/// Links a guard predicate to the sub-machine transition that realises it.
///
/// Exit zones are recomputed by the machine model from a state's current
/// value on every iteration. Reactive transitions leaving that state fire
/// through the zones their guard admits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitZone<P> {
    /// Predicate this zone makes true.
    pub target: P,
    pub submachine: SubmachineId,
    pub transition: TransitionId,
}

impl<P> ExitZone<P> {
    pub fn new(
        target: P,
        submachine: impl Into<SubmachineId>,
        transition: impl Into<TransitionId>,
    ) -> Self {
        Self {
            target,
            submachine: submachine.into(),
            transition: transition.into(),
        }
    }
}

/// A transition of the reactive machine.
///
/// Triggerable transitions are fired by an external trigger and contribute
/// `source AND guard`. Reactive transitions fire autonomously through the
/// exit zones of their source. Either kind then applies `actions` in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition<P> {
    pub source: StateId,
    pub target: StateId,
    pub triggerable: bool,
    pub guard: Guard<P>,
    pub actions: Vec<Action>,
}

impl<P> Transition<P> {
    /// A triggerable transition with an always-true guard and no actions.
    pub fn triggerable(source: impl Into<StateId>, target: impl Into<StateId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            triggerable: true,
            guard: Guard::Always,
            actions: Vec::new(),
        }
    }

    /// A reactive transition with an always-true guard and no actions.
    pub fn reactive(source: impl Into<StateId>, target: impl Into<StateId>) -> Self {
        Self {
            triggerable: false,
            ..Self::triggerable(source, target)
        }
    }

    /// Replace the guard.
    pub fn guarded(mut self, guard: Guard<P>) -> Self {
        self.guard = guard;
        self
    }

    /// Append a post-transition action.
    pub fn then(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Whether this transition ends in `state`.
    pub fn targets(&self, state: &StateId) -> bool {
        self.target == *state
    }
}
