//! Bitmask lattice for unit tests.

use crate::core::{
    Assembly, AssemblyId, EventId, ExitZone, Lattice, StateNode, SubmachineId, TransitionId,
};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bits(pub u32);

#[derive(Debug, thiserror::Error)]
pub enum BitsError {
    #[error("unknown transition {0}.{1}")]
    UnknownTransition(SubmachineId, TransitionId),

    #[error("unknown event {0}.{1}")]
    UnknownEvent(SubmachineId, EventId),
}

type Remaps = HashMap<(String, String), (u32, u32)>;

/// Assembly whose transitions and events map a non-empty `v` to
/// `(v & !remove) | add` and keep the empty value empty.
#[derive(Clone, Debug)]
pub struct BitAssembly {
    id: AssemblyId,
    initial: u32,
    transitions: Remaps,
    events: Remaps,
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

    pub fn on_transition(mut self, submachine: &str, name: &str, add: u32, remove: u32) -> Self {
        self.transitions
            .insert((submachine.into(), name.into()), (add, remove));
        self
    }

    pub fn on_event(mut self, submachine: &str, name: &str, add: u32, remove: u32) -> Self {
        self.events.insert((submachine.into(), name.into()), (add, remove));
        self
    }
}

fn remap(remaps: &Remaps, submachine: &str, name: &str, value: u32) -> Option<u32> {
    let &(add, remove) = remaps.get(&(submachine.to_string(), name.to_string()))?;
    Some(if value == 0 { 0 } else { (value & !remove) | add })
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
        remap(&context.transitions, submachine.as_str(), transition.as_str(), self.0)
            .map(Bits)
            .ok_or_else(|| BitsError::UnknownTransition(submachine.clone(), transition.clone()))
    }

    fn transform_by_event(
        &self,
        submachine: &SubmachineId,
        event: &EventId,
        context: &BitAssembly,
    ) -> Result<Self, BitsError> {
        remap(&context.events, submachine.as_str(), event.as_str(), self.0)
            .map(Bits)
            .ok_or_else(|| BitsError::UnknownEvent(submachine.clone(), event.clone()))
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

/// One exit zone, present whenever a state's value intersects `when`.
pub fn zone_when(
    when: u32,
    target: u32,
    submachine: &'static str,
    transition: &'static str,
) -> impl Fn(&StateNode, &Bits) -> Result<Vec<ExitZone<u32>>, BitsError> + Send + Sync + 'static
{
    move |_state, value| {
        Ok(if value.0 & when != 0 {
            vec![ExitZone::new(target, submachine, transition)]
        } else {
            Vec::new()
        })
    }
}
