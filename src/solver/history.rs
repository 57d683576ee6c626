//! Per-iteration trace of a solve.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// What one fixed-point pass changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// 1-based pass number.
    pub iteration: usize,
    /// States whose value changed in this pass, in machine order.
    pub changed: Vec<StateId>,
}

impl IterationRecord {
    /// Whether this pass reached the fixed point.
    pub fn is_stable(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Ordered record of the passes a solve ran.
///
/// # Example
///
/// ```rust
/// use reactive_semantics::core::StateId;
/// use reactive_semantics::solver::{IterationRecord, SolveHistory};
///
/// let history = SolveHistory::new()
///     .record(IterationRecord { iteration: 1, changed: vec![StateId::new("a")] })
///     .record(IterationRecord { iteration: 2, changed: vec![] });
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.settled_at(&StateId::new("a")), Some(1));
/// assert!(history.last().unwrap().is_stable());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveHistory {
    iterations: Vec<IterationRecord>,
}

impl SolveHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass, returning the extended history.
    pub fn record(mut self, record: IterationRecord) -> Self {
        self.iterations.push(record);
        self
    }

    /// All recorded passes.
    pub fn iterations(&self) -> &[IterationRecord] {
        &self.iterations
    }

    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    /// The most recent pass.
    pub fn last(&self) -> Option<&IterationRecord> {
        self.iterations.last()
    }

    /// Passes in which `state` changed.
    pub fn changes_of(&self, state: &StateId) -> Vec<usize> {
        self.iterations
            .iter()
            .filter(|record| record.changed.contains(state))
            .map(|record| record.iteration)
            .collect()
    }

    /// The last pass in which `state` changed, if it ever did.
    pub fn settled_at(&self, state: &StateId) -> Option<usize> {
        self.changes_of(state).last().copied()
    }

    /// Total number of state updates across all passes.
    pub fn total_changes(&self) -> usize {
        self.iterations.iter().map(|record| record.changed.len()).sum()
    }
}
