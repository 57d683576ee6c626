//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, StateId, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// Transitions are triggerable with an always-true guard unless told
/// otherwise.
///
/// # Example
///
/// ```rust
/// use reactive_semantics::builder::TransitionBuilder;
///
/// let transition = TransitionBuilder::new()
///     .from("closed")
///     .to("open")
///     .reactive()
///     .when("handle.down")
///     .action("lamp", "on")
///     .build()
///     .unwrap();
///
/// assert!(!transition.triggerable);
/// assert_eq!(transition.actions.len(), 1);
/// ```
pub struct TransitionBuilder<P> {
    from: Option<StateId>,
    to: Option<StateId>,
    triggerable: bool,
    guard: Guard<P>,
    actions: Vec<Action>,
}

impl<P> TransitionBuilder<P> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            triggerable: true,
            guard: Guard::Always,
            actions: Vec::new(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<StateId>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<StateId>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Fired by an external trigger (the default).
    pub fn triggerable(mut self) -> Self {
        self.triggerable = true;
        self
    }

    /// Fired autonomously through the source's exit zones.
    pub fn reactive(mut self) -> Self {
        self.triggerable = false;
        self
    }

    /// Set the guard proposition.
    pub fn guard(mut self, guard: Guard<P>) -> Self {
        self.guard = guard;
        self
    }

    /// Guard on a predicate.
    pub fn when(mut self, predicate: P) -> Self {
        self.guard = Guard::Predicate(predicate);
        self
    }

    /// Append a post-transition action.
    pub fn action(mut self, submachine: &str, event: &str) -> Self {
        self.actions.push(Action::new(submachine, event));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<P>, BuildError> {
        let source = self.from.ok_or(BuildError::MissingFromState)?;
        let target = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            source,
            target,
            triggerable: self.triggerable,
            guard: self.guard,
            actions: self.actions,
        })
    }
}

impl<P> Default for TransitionBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_missing_source() {
        let result = TransitionBuilder::<u32>::new().to("b").build();
        assert_eq!(result.unwrap_err(), BuildError::MissingFromState);
    }

    #[test]
    fn builder_validates_missing_target() {
        let result = TransitionBuilder::<u32>::new().from("a").build();
        assert_eq!(result.unwrap_err(), BuildError::MissingToState);
    }

    #[test]
    fn defaults_to_triggerable_always() {
        let t = TransitionBuilder::<u32>::new().from("a").to("b").build().unwrap();
        assert!(t.triggerable);
        assert!(t.guard.is_always());
        assert!(t.actions.is_empty());
    }

    #[test]
    fn fluent_api_builds_reactive_transition() {
        let t = TransitionBuilder::new()
            .from("a")
            .to("b")
            .reactive()
            .when(4u32)
            .action("door", "open")
            .action("lamp", "on")
            .build()
            .unwrap();

        assert_eq!(t.source, StateId::new("a"));
        assert_eq!(t.target, StateId::new("b"));
        assert!(!t.triggerable);
        assert_eq!(t.guard, Guard::Predicate(4));
        assert_eq!(
            t.actions,
            vec![Action::new("door", "open"), Action::new("lamp", "on")]
        );
    }

    #[test]
    fn triggerable_overrides_reactive() {
        let t = TransitionBuilder::<u32>::new()
            .from("a")
            .to("b")
            .reactive()
            .triggerable()
            .build()
            .unwrap();
        assert!(t.triggerable);
    }
}
