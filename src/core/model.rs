//! The machine model the solver runs against.

use super::ids::StateId;
use super::lattice::{Assembly, SemanticsError, SemanticsOf};
use super::state::StateNode;
use super::transition::{ExitZone, Transition};

/// Guard predicate type of a machine model.
pub type PredicateOf<M> = <<M as MachineModel>::Assembly as Assembly>::Predicate;

/// Read-only view of a reactive state machine.
///
/// Implementors expose their states and transitions and compute exit zones
/// on demand. The solver calls `reactive_zones` once per non-seed state per
/// iteration and treats the result as replacing the previous zone set.
pub trait MachineModel {
    type Assembly: Assembly;

    /// Name used in log output.
    fn name(&self) -> &str;

    fn states(&self) -> &[StateNode];

    fn transitions(&self) -> &[Transition<PredicateOf<Self>>];

    fn assembly(&self) -> &Self::Assembly;

    /// Exit zones of `state` given its current value.
    fn reactive_zones(
        &self,
        state: &StateNode,
        value: &SemanticsOf<Self::Assembly>,
    ) -> Result<Vec<ExitZone<PredicateOf<Self>>>, SemanticsError<Self::Assembly>>;

    /// Look up a state by id.
    fn state(&self, id: &StateId) -> Option<&StateNode> {
        self.states().iter().find(|s| s.id == *id)
    }
}
