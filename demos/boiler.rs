//! Boiler Controller
//!
//! This example computes which heater configurations are reachable in each
//! state of a small boiler controller.
//!
//! Key concepts:
//! - A user-defined lattice (bitmask of heater configurations)
//! - Reactive transitions fired through the heater's exit zones
//! - Guards and actions on triggerable transitions
//! - Checkpointing a solve and resuming it
//!
//! Run with: RUST_LOG=debug cargo run --example boiler

use reactive_semantics::builder::{MachineBuilder, TransitionBuilder};
use reactive_semantics::core::{
    Assembly, AssemblyId, EventId, ExitZone, Lattice, StateId, StateNode, SubmachineId,
    TransitionId,
};
use reactive_semantics::solver::{Solver, SolverConfig};
use reactive_semantics::Checkpoint;
use std::error::Error;
use tracing_subscriber::EnvFilter;

const OFF: u16 = 0b001;
const WARMING: u16 = 0b010;
const HOT: u16 = 0b100;

// Set of heater configurations
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Heater(u16);

#[derive(Debug, thiserror::Error)]
enum HeaterError {
    #[error("heater has no transition '{0}'")]
    UnknownTransition(TransitionId),
    #[error("heater does not handle event '{0}'")]
    UnknownEvent(EventId),
}

struct Plant {
    id: AssemblyId,
}

impl Heater {
    // Move every configuration in `from` to `to`.
    fn shift(&self, from: u16, to: u16) -> Self {
        if self.0 & from != 0 {
            Heater(to)
        } else {
            Heater(0)
        }
    }
}

impl Lattice for Heater {
    type Context = Plant;
    type Error = HeaterError;

    fn bottom(_assembly: &AssemblyId) -> Self {
        Heater(0)
    }

    fn and(&self, other: &Self) -> Self {
        Heater(self.0 & other.0)
    }

    fn or(&self, other: &Self) -> Self {
        Heater(self.0 | other.0)
    }

    fn transform_by_transition(
        &self,
        _submachine: &SubmachineId,
        transition: &TransitionId,
        _plant: &Plant,
    ) -> Result<Self, HeaterError> {
        match transition.as_str() {
            "ignite" => Ok(self.shift(OFF, WARMING)),
            "heat" => Ok(self.shift(WARMING, HOT)),
            _ => Err(HeaterError::UnknownTransition(transition.clone())),
        }
    }

    fn transform_by_event(
        &self,
        _submachine: &SubmachineId,
        event: &EventId,
        _plant: &Plant,
    ) -> Result<Self, HeaterError> {
        match event.as_str() {
            "reset" => Ok(self.shift(OFF | WARMING | HOT, OFF)),
            _ => Err(HeaterError::UnknownEvent(event.clone())),
        }
    }
}

impl Assembly for Plant {
    type Semantics = Heater;
    type Predicate = &'static str;

    fn id(&self) -> &AssemblyId {
        &self.id
    }

    fn initial_semantics(&self) -> Result<Heater, HeaterError> {
        Ok(Heater(OFF))
    }

    fn top(&self) -> Heater {
        Heater(OFF | WARMING | HOT)
    }

    fn predicate_semantics(&self, predicate: &&'static str) -> Result<Heater, HeaterError> {
        Ok(match *predicate {
            "overheated" => Heater(HOT),
            _ => self.top(),
        })
    }
}

fn heater_zones(
    _state: &StateNode,
    value: &Heater,
) -> Result<Vec<ExitZone<&'static str>>, HeaterError> {
    let mut zones = Vec::new();
    if value.0 & OFF != 0 {
        zones.push(ExitZone::new("lit", "heater", "ignite"));
    }
    if value.0 & WARMING != 0 {
        zones.push(ExitZone::new("warm", "heater", "heat"));
    }
    Ok(zones)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Boiler Controller Example ===\n");

    let machine = MachineBuilder::new()
        .name("boiler")
        .assembly(Plant {
            id: AssemblyId::new("plant"),
        })
        .seed("init")
        .state("idle")
        .state("warming")
        .state("heating")
        .transition(TransitionBuilder::new().from("init").to("idle"))?
        .transition(
            TransitionBuilder::new()
                .from("idle")
                .to("warming")
                .reactive()
                .when("lit"),
        )?
        .transition(
            TransitionBuilder::new()
                .from("warming")
                .to("heating")
                .reactive()
                .when("warm"),
        )?
        .transition(
            TransitionBuilder::new()
                .from("heating")
                .to("idle")
                .when("overheated")
                .action("heater", "reset"),
        )?
        .zones(heater_zones)
        .build()?;

    let solver = Solver::new(SolverConfig::default())?;
    let solution = solver.solve(&machine)?;

    println!("Converged: {}", solution.is_converged());
    println!("Passes: {}\n", solution.iterations());
    for (state, value) in solution.semantics() {
        println!("  {state:<8} {:03b}", value.0);
    }

    // Snapshot after two passes, then finish the solve from the snapshot
    println!("\n=== Checkpoint and Resume ===\n");
    let partial = Solver::new(SolverConfig::default().with_max_iterations(2))?.solve(&machine)?;
    let json = partial.checkpoint("boiler").to_json()?;
    println!(
        "Checkpoint after {} passes ({} bytes of JSON)",
        partial.iterations(),
        json.len()
    );

    let checkpoint = Checkpoint::<Heater>::from_json(&json)?;
    let resumed = solver.resume(&machine, &checkpoint)?;
    println!("Resumed in {} passes", resumed.iterations());
    println!(
        "heating reachable with: {:03b}",
        resumed
            .get(&StateId::new("heating"))
            .map(|value| value.0)
            .unwrap_or_default()
    );

    assert_eq!(resumed.semantics(), solution.semantics());
    println!("\nResumed solve matches the direct solve.");

    Ok(())
}
