//! The fixed-point driver.

use super::config::SolverConfig;
use super::contribution::contribution;
use super::error::{ConfigError, ModelViolation, SolveError};
use super::history::{IterationRecord, SolveHistory};
use super::solution::{Convergence, Solution};
use super::validate::validate_machine;
use super::zones::refresh_zones;
use super::{MachineError, MachineSolution, SemanticsMap, ZoneMap};
use crate::checkpoint::Checkpoint;
use crate::core::{
    Assembly, Lattice, MachineModel, PredicateOf, SemanticsError, SemanticsOf, StateId,
    StateNode, Transition,
};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

/// Computes per-state semantics of reactive machines.
///
/// Each pass first refreshes every state's exit zones from the previous
/// pass's map, then recomputes every non-seed state as the join of its
/// incoming contributions, reading only the previous map. The seed is pinned
/// to the assembly's initial semantics. Passes repeat until one changes
/// nothing or `max_iterations` passes have run.
///
/// # Example
///
/// ```rust
/// use reactive_semantics::builder::MachineBuilder;
/// use reactive_semantics::core::{
///     Assembly, AssemblyId, EventId, Lattice, StateId, SubmachineId, Transition, TransitionId,
/// };
/// use reactive_semantics::solver::Solver;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Flags(u8);
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("unsupported")]
/// struct Unsupported;
///
/// struct Ctx(AssemblyId);
///
/// impl Lattice for Flags {
///     type Context = Ctx;
///     type Error = Unsupported;
///     fn bottom(_: &AssemblyId) -> Self { Flags(0) }
///     fn and(&self, o: &Self) -> Self { Flags(self.0 & o.0) }
///     fn or(&self, o: &Self) -> Self { Flags(self.0 | o.0) }
///     fn transform_by_transition(&self, _: &SubmachineId, _: &TransitionId, _: &Ctx)
///         -> Result<Self, Unsupported> { Err(Unsupported) }
///     fn transform_by_event(&self, _: &SubmachineId, _: &EventId, _: &Ctx)
///         -> Result<Self, Unsupported> { Err(Unsupported) }
/// }
///
/// impl Assembly for Ctx {
///     type Semantics = Flags;
///     type Predicate = u8;
///     fn id(&self) -> &AssemblyId { &self.0 }
///     fn initial_semantics(&self) -> Result<Flags, Unsupported> { Ok(Flags(0b11)) }
///     fn top(&self) -> Flags { Flags(u8::MAX) }
///     fn predicate_semantics(&self, p: &u8) -> Result<Flags, Unsupported> { Ok(Flags(*p)) }
/// }
///
/// let machine = MachineBuilder::new()
///     .assembly(Ctx(AssemblyId::new("demo")))
///     .seed("init")
///     .state("idle")
///     .add_transition(Transition::triggerable("init", "idle"))
///     .build()
///     .unwrap();
///
/// let solution = Solver::default().solve(&machine).unwrap();
/// assert!(solution.is_converged());
/// assert_eq!(solution.get(&StateId::new("idle")), Some(&Flags(0b11)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver, rejecting an invalid configuration.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute the semantics of every state of `machine`.
    ///
    /// Fails fast on a malformed model and propagates lattice failures
    /// unchanged. Hitting the iteration cap is not a failure: the last map
    /// is returned with `Convergence::IterationCapReached`.
    pub fn solve<M: MachineModel>(
        &self,
        machine: &M,
    ) -> Result<MachineSolution<M>, MachineError<M>> {
        let started_at = Utc::now();
        let seed = check_model(machine)?;
        let assembly = machine.assembly();

        info!(
            machine = machine.name(),
            states = machine.states().len(),
            transitions = machine.transitions().len(),
            "starting fixed-point semantics computation"
        );

        let mut semantics: SemanticsMap<SemanticsOf<M::Assembly>> = machine
            .states()
            .iter()
            .map(|state| {
                let bottom = <SemanticsOf<M::Assembly> as Lattice>::bottom(assembly.id());
                (state.id.clone(), bottom)
            })
            .collect();
        let initial = assembly.initial_semantics().map_err(SolveError::Lattice)?;
        semantics.insert(seed.id.clone(), initial);

        self.run(machine, semantics, started_at)
    }

    /// Continue a solve from a checkpointed map.
    ///
    /// The checkpoint must have been taken from a machine of the same name and
    /// hold exactly one value per state of `machine`.
    /// The seed is re-pinned to the assembly's initial semantics before the
    /// first pass. Resuming from a converged map finishes after one pass.
    pub fn resume<M: MachineModel>(
        &self,
        machine: &M,
        checkpoint: &Checkpoint<SemanticsOf<M::Assembly>>,
    ) -> Result<MachineSolution<M>, MachineError<M>> {
        let started_at = Utc::now();
        let seed = check_model(machine)?;
        if checkpoint.machine != machine.name() {
            return Err(SolveError::CheckpointMismatch {
                machine: machine.name().to_string(),
                checkpoint: checkpoint.machine.clone(),
            });
        }
        check_coverage(machine, &checkpoint.semantics)?;

        info!(
            machine = machine.name(),
            checkpoint = %checkpoint.id,
            previous_iterations = checkpoint.iterations,
            "resuming fixed-point semantics computation"
        );

        let mut semantics = checkpoint.semantics.clone();
        let initial = machine
            .assembly()
            .initial_semantics()
            .map_err(SolveError::Lattice)?;
        semantics.insert(seed.id.clone(), initial);

        self.run(machine, semantics, started_at)
    }

    /// States whose value would change if one more pass ran over `semantics`.
    ///
    /// An empty result means `semantics` is a fixed point of `machine`. The
    /// seed is never recomputed, so it never appears in the result.
    pub fn verify<M: MachineModel>(
        &self,
        machine: &M,
        semantics: &SemanticsMap<SemanticsOf<M::Assembly>>,
    ) -> Result<Vec<StateId>, MachineError<M>> {
        check_model(machine)?;
        check_coverage(machine, semantics)?;

        let outcome = Pass::new(machine)
            .run(semantics)
            .map_err(SolveError::Lattice)?;
        Ok(outcome.changed)
    }

    fn run<M: MachineModel>(
        &self,
        machine: &M,
        mut semantics: SemanticsMap<SemanticsOf<M::Assembly>>,
        started_at: DateTime<Utc>,
    ) -> Result<MachineSolution<M>, MachineError<M>> {
        let pass = Pass::new(machine);
        let cap = self.config.max_iterations;
        let mut zones = ZoneMap::new();
        let mut history = SolveHistory::new();
        let mut iterations = 0;
        let mut changed = true;

        while changed && iterations < cap {
            iterations += 1;
            let outcome = pass.run(&semantics).map_err(SolveError::Lattice)?;

            debug!(
                machine = machine.name(),
                iteration = iterations,
                changed = outcome.changed.len(),
                "fixed-point pass complete"
            );

            changed = !outcome.changed.is_empty();
            history = history.record(IterationRecord {
                iteration: iterations,
                changed: outcome.changed,
            });
            semantics = outcome.semantics;
            zones = outcome.zones;
        }

        let convergence = if changed {
            warn!(
                machine = machine.name(),
                cap,
                "semantics did not converge within {cap} iterations; returning the last computed map"
            );
            Convergence::IterationCapReached { cap }
        } else {
            Convergence::Converged
        };

        info!(
            machine = machine.name(),
            iterations,
            converged = !changed,
            "completed fixed-point semantics computation"
        );

        Ok(Solution {
            semantics,
            zones,
            iterations,
            convergence,
            history,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

/// Values, zones and changed states produced by one pass.
struct PassOutcome<S, P> {
    semantics: SemanticsMap<S>,
    zones: ZoneMap<P>,
    changed: Vec<StateId>,
}

/// One recompute pass over a validated machine.
///
/// Incoming transitions are grouped by target once, with their source
/// states resolved, so each pass only walks the edges it needs.
struct Pass<'m, M: MachineModel> {
    machine: &'m M,
    incoming: BTreeMap<&'m StateId, Vec<(&'m StateNode, &'m Transition<PredicateOf<M>>)>>,
}

impl<'m, M: MachineModel> Pass<'m, M> {
    fn new(machine: &'m M) -> Self {
        let states: HashMap<&StateId, &StateNode> =
            machine.states().iter().map(|s| (&s.id, s)).collect();

        let mut incoming: BTreeMap<_, Vec<_>> = BTreeMap::new();
        for transition in machine.transitions() {
            // endpoints were validated; an unresolved source cannot occur
            if let Some(source) = states.get(&transition.source) {
                incoming
                    .entry(&transition.target)
                    .or_default()
                    .push((*source, transition));
            }
        }

        Self { machine, incoming }
    }

    fn run(
        &self,
        snapshot: &SemanticsMap<SemanticsOf<M::Assembly>>,
    ) -> Result<
        PassOutcome<SemanticsOf<M::Assembly>, PredicateOf<M>>,
        SemanticsError<M::Assembly>,
    > {
        // every zone set is refreshed before any contribution reads one
        let zones = refresh_zones(self.machine, snapshot)?;

        let mut next = snapshot.clone();
        let mut changed = Vec::new();
        for state in self.machine.states().iter().filter(|s| !s.is_seed) {
            let value = self.join_incoming(state, snapshot, &zones)?;
            if value != snapshot[&state.id] {
                next.insert(state.id.clone(), value);
                changed.push(state.id.clone());
            }
        }

        Ok(PassOutcome {
            semantics: next,
            zones,
            changed,
        })
    }

    fn join_incoming(
        &self,
        state: &StateNode,
        snapshot: &SemanticsMap<SemanticsOf<M::Assembly>>,
        zones: &ZoneMap<PredicateOf<M>>,
    ) -> Result<SemanticsOf<M::Assembly>, SemanticsError<M::Assembly>> {
        let assembly = self.machine.assembly();
        let bottom = <SemanticsOf<M::Assembly> as Lattice>::bottom(assembly.id());
        let Some(incoming) = self.incoming.get(&state.id) else {
            return Ok(bottom);
        };

        incoming.iter().try_fold(bottom, |acc, &(source, transition)| {
            let value = contribution(
                transition,
                source,
                &snapshot[&source.id],
                &zones[&source.id],
                assembly,
            )?;
            Ok(acc.or(&value))
        })
    }
}

/// Validate `machine` and return its seed.
fn check_model<M: MachineModel>(machine: &M) -> Result<&StateNode, MachineError<M>> {
    if let Validation::Failure(violations) = validate_machine(machine) {
        return Err(SolveError::MalformedModel {
            machine: machine.name().to_string(),
            violations: violations.into_vec(),
        });
    }

    machine
        .states()
        .iter()
        .find(|s| s.is_seed)
        .ok_or_else(|| SolveError::MalformedModel {
            machine: machine.name().to_string(),
            violations: vec![ModelViolation::MissingSeed],
        })
}

/// Ensure `semantics` holds exactly the states of `machine`.
fn check_coverage<M: MachineModel, S>(
    machine: &M,
    semantics: &SemanticsMap<S>,
) -> Result<(), MachineError<M>> {
    let known: HashSet<&StateId> = machine.states().iter().map(|s| &s.id).collect();
    let missing: Vec<StateId> = machine
        .states()
        .iter()
        .filter(|s| !semantics.contains_key(&s.id))
        .map(|s| s.id.clone())
        .collect();
    let unexpected: Vec<StateId> = semantics
        .keys()
        .filter(|id| !known.contains(id))
        .cloned()
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(SolveError::IncompleteMap {
            machine: machine.name().to_string(),
            missing,
            unexpected,
        })
    }
}
