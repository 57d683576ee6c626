//! In-memory machine model and its builder.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{
    Assembly, ExitZone, MachineModel, SemanticsError, SemanticsOf, StateNode, Transition,
};
use std::sync::Arc;

/// Computes the exit zones of a state from its current value.
pub type ZoneFn<A> = Arc<
    dyn Fn(
            &StateNode,
            &SemanticsOf<A>,
        ) -> Result<Vec<ExitZone<<A as Assembly>::Predicate>>, SemanticsError<A>>
        + Send
        + Sync,
>;

/// A reactive machine held in memory.
///
/// Owns its assembly, states and transitions, and delegates exit-zone
/// computation to a user-supplied function.
pub struct Machine<A: Assembly> {
    name: String,
    assembly: A,
    states: Vec<StateNode>,
    transitions: Vec<Transition<A::Predicate>>,
    zones: ZoneFn<A>,
}

impl<A: Assembly> Machine<A> {
    /// Add a state to the machine.
    pub fn add_state(&mut self, state: StateNode) {
        self.states.push(state);
    }

    /// Add a transition to the machine.
    pub fn add_transition(&mut self, transition: Transition<A::Predicate>) {
        self.transitions.push(transition);
    }
}

impl<A: Assembly + Clone> Clone for Machine<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            assembly: self.assembly.clone(),
            states: self.states.clone(),
            transitions: self.transitions.clone(),
            zones: Arc::clone(&self.zones),
        }
    }
}

impl<A: Assembly> MachineModel for Machine<A> {
    type Assembly = A;

    fn name(&self) -> &str {
        &self.name
    }

    fn states(&self) -> &[StateNode] {
        &self.states
    }

    fn transitions(&self) -> &[Transition<A::Predicate>] {
        &self.transitions
    }

    fn assembly(&self) -> &A {
        &self.assembly
    }

    fn reactive_zones(
        &self,
        state: &StateNode,
        value: &SemanticsOf<A>,
    ) -> Result<Vec<ExitZone<A::Predicate>>, SemanticsError<A>> {
        (self.zones)(state, value)
    }
}

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder<A: Assembly> {
    name: String,
    assembly: Option<A>,
    states: Vec<StateNode>,
    transitions: Vec<Transition<A::Predicate>>,
    zones: Option<ZoneFn<A>>,
}

impl<A: Assembly> MachineBuilder<A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: "machine".to_string(),
            assembly: None,
            states: Vec::new(),
            transitions: Vec::new(),
            zones: None,
        }
    }

    /// Set the name used in log output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the assembly (required).
    pub fn assembly(mut self, assembly: A) -> Self {
        self.assembly = Some(assembly);
        self
    }

    /// Add the seed pseudostate.
    pub fn seed(self, name: &str) -> Self {
        self.add_state(StateNode::seed(name))
    }

    /// Add an ordinary state.
    pub fn state(self, name: &str) -> Self {
        self.add_state(StateNode::new(name))
    }

    /// Add a pre-built state.
    pub fn add_state(mut self, state: StateNode) -> Self {
        self.states.push(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<A::Predicate>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<A::Predicate>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<A::Predicate>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the exit-zone function. Without one, every state has no zones.
    pub fn zones<F>(mut self, zones: F) -> Self
    where
        F: Fn(&StateNode, &SemanticsOf<A>) -> Result<Vec<ExitZone<A::Predicate>>, SemanticsError<A>>
            + Send
            + Sync
            + 'static,
    {
        self.zones = Some(Arc::new(zones));
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<A>, BuildError>
    where
        A: 'static,
    {
        let assembly = self.assembly.ok_or(BuildError::MissingAssembly)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let zones: ZoneFn<A> = match self.zones {
            Some(zones) => zones,
            None => Arc::new(no_zones::<A>),
        };

        Ok(Machine {
            name: self.name,
            assembly,
            states: self.states,
            transitions: self.transitions,
            zones,
        })
    }
}

fn no_zones<A: Assembly>(
    _state: &StateNode,
    _value: &SemanticsOf<A>,
) -> Result<Vec<ExitZone<A::Predicate>>, SemanticsError<A>> {
    Ok(Vec::new())
}

impl<A: Assembly> Default for MachineBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;
    use crate::testing::{zone_when, BitAssembly, Bits};

    #[test]
    fn builder_requires_assembly() {
        let result = MachineBuilder::<BitAssembly>::new().seed("init").build();
        assert!(matches!(result, Err(BuildError::MissingAssembly)));
    }

    #[test]
    fn builder_requires_states() {
        let result = MachineBuilder::new().assembly(BitAssembly::new(1)).build();
        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_propagates_transition_errors() {
        let result = MachineBuilder::new()
            .assembly(BitAssembly::new(1))
            .transition(TransitionBuilder::new().from("init"));
        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .name("door")
            .assembly(BitAssembly::new(1))
            .seed("init")
            .state("closed")
            .state("open")
            .transition(TransitionBuilder::new().from("init").to("closed"))
            .unwrap()
            .add_transition(Transition::reactive("closed", "open"))
            .build()
            .unwrap();

        assert_eq!(machine.name(), "door");
        assert_eq!(machine.states().len(), 3);
        assert_eq!(machine.transitions().len(), 2);
        assert!(machine.state(&StateId::new("init")).unwrap().is_seed);
        assert!(machine.state(&StateId::new("ghost")).is_none());
    }

    #[test]
    fn default_zone_function_is_empty() {
        let machine = MachineBuilder::new()
            .assembly(BitAssembly::new(1))
            .seed("init")
            .build()
            .unwrap();

        let zones = machine
            .reactive_zones(&StateNode::new("x"), &Bits(u32::MAX))
            .unwrap();
        assert!(zones.is_empty());
    }

    #[test]
    fn zone_function_is_delegated() {
        let machine = MachineBuilder::new()
            .assembly(BitAssembly::new(1))
            .seed("init")
            .zones(zone_when(0b10, 7, "door", "open"))
            .build()
            .unwrap();

        let state = StateNode::new("x");
        assert!(machine.reactive_zones(&state, &Bits(0b01)).unwrap().is_empty());
        assert_eq!(
            machine.reactive_zones(&state, &Bits(0b10)).unwrap(),
            vec![ExitZone::new(7, "door", "open")]
        );
    }

    #[test]
    fn added_transitions_are_visible() {
        let mut machine = MachineBuilder::new()
            .assembly(BitAssembly::new(1))
            .seed("init")
            .build()
            .unwrap();

        machine.add_state(StateNode::new("a"));
        machine.add_transition(Transition::triggerable("init", "a"));

        assert_eq!(machine.states().len(), 2);
        assert_eq!(machine.transitions().len(), 1);
    }
}
