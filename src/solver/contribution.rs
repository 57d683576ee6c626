//! The per-transition contribution rule.

use crate::core::{Assembly, ExitZone, Lattice, SemanticsError, SemanticsOf, StateNode, Transition};
use tracing::trace;

/// Value a single transition contributes to its target state.
///
/// Transitions that are triggerable, or that leave the seed, contribute
/// `source_value AND guard`. Reactive transitions start from bottom and join
/// in `source_value` fired through every exit zone of the source that their
/// guard admits; with no admitted zone they contribute bottom. Either way the
/// transition's actions are then applied in order.
///
/// Pure: reads only its arguments. Lattice failures are returned unchanged.
pub fn contribution<A: Assembly>(
    transition: &Transition<A::Predicate>,
    source: &StateNode,
    source_value: &SemanticsOf<A>,
    source_zones: &[ExitZone<A::Predicate>],
    assembly: &A,
) -> Result<SemanticsOf<A>, SemanticsError<A>> {
    let fired = if transition.triggerable || source.is_seed {
        let guard = assembly.guard_semantics(&transition.guard)?;
        source_value.and(&guard)
    } else {
        source_zones
            .iter()
            .filter(|zone| transition.guard.admits(&zone.target))
            .try_fold(<SemanticsOf<A> as Lattice>::bottom(assembly.id()), |acc, zone| {
                let fragment = source_value.transform_by_transition(
                    &zone.submachine,
                    &zone.transition,
                    assembly,
                )?;
                Ok(acc.or(&fragment))
            })?
    };

    let value = transition.actions.iter().try_fold(fired, |value, action| {
        value.transform_by_event(&action.submachine, &action.event, assembly)
    })?;

    trace!(
        source = %transition.source,
        target = %transition.target,
        triggerable = transition.triggerable,
        contribution = ?value,
        "transition contribution"
    );

    Ok(value)
}
