//! Structural validation of machine models.
//!
//! Every check runs, and all violations are reported together, so a caller
//! fixing a model sees the full list in one pass.

use super::error::ModelViolation;
use crate::core::{MachineModel, StateId};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single structural check.
pub type ModelCheck = Validation<(), NonEmptyVec<ModelViolation>>;

/// Check the preconditions of a solve.
///
/// A machine must have exactly one seed state, unique state ids, and only
/// transitions whose endpoints are states of the machine.
pub fn validate_machine<M: MachineModel>(machine: &M) -> ModelCheck {
    let checks = vec![
        check_seed(machine),
        check_unique_ids(machine),
        check_endpoints(machine),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check_seed<M: MachineModel>(machine: &M) -> ModelCheck {
    let seeds: Vec<StateId> = machine
        .states()
        .iter()
        .filter(|s| s.is_seed)
        .map(|s| s.id.clone())
        .collect();

    match seeds.len() {
        1 => Validation::success(()),
        0 => Validation::fail(ModelViolation::MissingSeed),
        _ => Validation::fail(ModelViolation::MultipleSeeds { seeds }),
    }
}

fn check_unique_ids<M: MachineModel>(machine: &M) -> ModelCheck {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let checks: Vec<ModelCheck> = machine
        .states()
        .iter()
        .map(|s| {
            if !seen.insert(&s.id) && reported.insert(&s.id) {
                Validation::fail(ModelViolation::DuplicateState { id: s.id.clone() })
            } else {
                Validation::success(())
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn check_endpoints<M: MachineModel>(machine: &M) -> ModelCheck {
    let known: HashSet<&StateId> = machine.states().iter().map(|s| &s.id).collect();
    let mut checks: Vec<ModelCheck> = Vec::new();

    for (index, transition) in machine.transitions().iter().enumerate() {
        checks.push(if known.contains(&transition.source) {
            Validation::success(())
        } else {
            Validation::fail(ModelViolation::UnknownSource {
                transition: index,
                state: transition.source.clone(),
            })
        });
        checks.push(if known.contains(&transition.target) {
            Validation::success(())
        } else {
            Validation::fail(ModelViolation::UnknownTarget {
                transition: index,
                state: transition.target.clone(),
            })
        });
    }

    Validation::all_vec(checks).map(|_| ())
}
