//! Result of a solve.

use super::history::SolveHistory;
use super::{SemanticsMap, ZoneMap};
use crate::checkpoint::Checkpoint;
use crate::core::{ExitZone, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the fixed-point loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convergence {
    /// A pass changed nothing; the map is a fixed point.
    Converged,
    /// The iteration cap was reached while values were still changing.
    IterationCapReached { cap: usize },
}

/// Per-state semantics computed by the solver, with run metadata.
#[derive(Clone, Debug)]
pub struct Solution<S, P> {
    pub(crate) semantics: SemanticsMap<S>,
    pub(crate) zones: ZoneMap<P>,
    pub(crate) iterations: usize,
    pub(crate) convergence: Convergence,
    pub(crate) history: SolveHistory,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) finished_at: DateTime<Utc>,
}

impl<S, P> Solution<S, P> {
    /// Value of every state.
    pub fn semantics(&self) -> &SemanticsMap<S> {
        &self.semantics
    }

    /// Value of one state.
    pub fn get(&self, state: &StateId) -> Option<&S> {
        self.semantics.get(state)
    }

    /// Exit zones each state had during the last pass.
    pub fn zones(&self) -> &ZoneMap<P> {
        &self.zones
    }

    /// Exit zones of one state during the last pass.
    pub fn zones_of(&self, state: &StateId) -> &[ExitZone<P>] {
        self.zones.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Passes run, including the final one that confirmed the fixed point.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn convergence(&self) -> Convergence {
        self.convergence
    }

    pub fn is_converged(&self) -> bool {
        self.convergence == Convergence::Converged
    }

    pub fn history(&self) -> &SolveHistory {
        &self.history
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Drop the metadata and keep the map.
    pub fn into_semantics(self) -> SemanticsMap<S> {
        self.semantics
    }
}

impl<S: Clone, P> Solution<S, P> {
    /// Snapshot the map so the solve can be resumed later.
    pub fn checkpoint(&self, machine: &str) -> Checkpoint<S> {
        Checkpoint::new(machine, self.iterations, self.semantics.clone())
    }
}
