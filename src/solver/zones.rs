//! Reactive-zone refresh.

use super::{SemanticsMap, ZoneMap};
use crate::core::{MachineModel, PredicateOf, SemanticsError, SemanticsOf};

/// Recompute the exit zones of every state from `semantics`.
///
/// Each non-seed state's zones come from `MachineModel::reactive_zones`
/// applied to that state's value in `semantics`, and replace whatever the
/// state had before. The seed gets no zones: transitions leaving it always
/// take the triggerable branch.
///
/// `semantics` must hold an entry for every state of `machine`.
pub fn refresh_zones<M: MachineModel>(
    machine: &M,
    semantics: &SemanticsMap<SemanticsOf<M::Assembly>>,
) -> Result<ZoneMap<PredicateOf<M>>, SemanticsError<M::Assembly>> {
    machine
        .states()
        .iter()
        .map(|state| {
            let zones = if state.is_seed {
                Vec::new()
            } else {
                machine.reactive_zones(state, &semantics[&state.id])?
            };
            Ok((state.id.clone(), zones))
        })
        .collect()
}
