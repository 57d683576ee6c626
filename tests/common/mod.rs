//! Bitmask lattice fixture shared by the integration tests.
//!
//! A value is a set of at most 32 configurations. Sub-machine transitions
//! and events are table-driven: each maps a non-empty value `v` to
//! `(v & !remove) | add` and leaves the empty value empty, which keeps every
//! operation monotone.

#![allow(dead_code)]

use reactive_semantics::builder::{Machine, MachineBuilder};
use reactive_semantics::core::{
    Assembly, AssemblyId, EventId, ExitZone, Lattice, StateNode, SubmachineId, TransitionId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bits(pub u32);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BitsError {
    #[error("no transition '{transition}' in sub-machine '{submachine}'")]
    UnknownTransition {
        submachine: SubmachineId,
        transition: TransitionId,
    },

    #[error("sub-machine '{submachine}' does not handle event '{event}'")]
    UnknownEvent {
        submachine: SubmachineId,
        event: EventId,
    },
}

#[derive(Clone, Copy, Debug)]
struct Remap {
    add: u32,
    remove: u32,
}

impl Remap {
    fn apply(self, value: u32) -> u32 {
        if value == 0 {
            0
        } else {
            (value & !self.remove) | self.add
        }
    }
}

#[derive(Clone, Debug)]
pub struct BitAssembly {
    id: AssemblyId,
    initial: u32,
    transitions: HashMap<(SubmachineId, TransitionId), Remap>,
    events: HashMap<(SubmachineId, EventId), Remap>,
}

impl BitAssembly {
    pub fn new(initial: u32) -> Self {
        Self {
            id: AssemblyId::new("bits"),
            initial,
            transitions: HashMap::new(),
            events: HashMap::new(),
        }
    }

    pub fn on_transition(mut self, submachine: &str, transition: &str, add: u32, remove: u32) -> Self {
        self.transitions.insert(
            (SubmachineId::new(submachine), TransitionId::new(transition)),
            Remap { add, remove },
        );
        self
    }

    pub fn on_event(mut self, submachine: &str, event: &str, add: u32, remove: u32) -> Self {
        self.events.insert(
            (SubmachineId::new(submachine), EventId::new(event)),
            Remap { add, remove },
        );
        self
    }
}

impl Lattice for Bits {
    type Context = BitAssembly;
    type Error = BitsError;

    fn bottom(_assembly: &AssemblyId) -> Self {
        Bits(0)
    }

    fn and(&self, other: &Self) -> Self {
        Bits(self.0 & other.0)
    }

    fn or(&self, other: &Self) -> Self {
        Bits(self.0 | other.0)
    }

    fn transform_by_transition(
        &self,
        submachine: &SubmachineId,
        transition: &TransitionId,
        context: &BitAssembly,
    ) -> Result<Self, BitsError> {
        context
            .transitions
            .get(&(submachine.clone(), transition.clone()))
            .map(|remap| Bits(remap.apply(self.0)))
            .ok_or_else(|| BitsError::UnknownTransition {
                submachine: submachine.clone(),
                transition: transition.clone(),
            })
    }

    fn transform_by_event(
        &self,
        submachine: &SubmachineId,
        event: &EventId,
        context: &BitAssembly,
    ) -> Result<Self, BitsError> {
        context
            .events
            .get(&(submachine.clone(), event.clone()))
            .map(|remap| Bits(remap.apply(self.0)))
            .ok_or_else(|| BitsError::UnknownEvent {
                submachine: submachine.clone(),
                event: event.clone(),
            })
    }
}

impl Assembly for BitAssembly {
    type Semantics = Bits;
    type Predicate = u32;

    fn id(&self) -> &AssemblyId {
        &self.id
    }

    fn initial_semantics(&self) -> Result<Bits, BitsError> {
        Ok(Bits(self.initial))
    }

    fn top(&self) -> Bits {
        Bits(u32::MAX)
    }

    fn predicate_semantics(&self, predicate: &u32) -> Result<Bits, BitsError> {
        Ok(Bits(*predicate))
    }
}

/// Emits `ExitZone { target, submachine, transition }` whenever a state's
/// value intersects `when`.
#[derive(Clone, Debug)]
pub struct ZoneRule {
    pub when: u32,
    pub target: u32,
    pub submachine: &'static str,
    pub transition: &'static str,
}

pub fn zone_fn(
    rules: Vec<ZoneRule>,
) -> impl Fn(&StateNode, &Bits) -> Result<Vec<ExitZone<u32>>, BitsError> + Send + Sync + 'static {
    move |_state, value| {
        Ok(rules
            .iter()
            .filter(|rule| value.0 & rule.when != 0)
            .map(|rule| ExitZone::new(rule.target, rule.submachine, rule.transition))
            .collect())
    }
}

/// Builder preloaded with a bit assembly whose initial value is `initial`.
pub fn bit_machine(initial: u32) -> MachineBuilder<BitAssembly> {
    MachineBuilder::new()
        .name("bits")
        .assembly(BitAssembly::new(initial))
}

pub type BitMachine = Machine<BitAssembly>;
