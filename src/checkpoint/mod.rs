//! Checkpoint and resume for fixed-point solves.
//!
//! A checkpoint captures the working map of a solve so that a later run can
//! continue from it instead of starting over from bottom. Only the values
//! are stored; zones are recomputed from them on the first resumed pass.

use crate::core::StateId;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a solve's working map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub created_at: DateTime<Utc>,

    /// Name of the machine the map belongs to
    pub machine: String,

    /// Passes already run when the checkpoint was taken
    pub iterations: usize,

    /// Value of every state
    pub semantics: BTreeMap<StateId, S>,
}

impl<S> Checkpoint<S> {
    pub fn new(machine: &str, iterations: usize, semantics: BTreeMap<StateId, S>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            machine: machine.to_string(),
            iterations,
            semantics,
        }
    }

    fn check_version(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

impl<S: Serialize + DeserializeOwned> Checkpoint<S> {
    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Decode from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.check_version()
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Decode from bincode, rejecting unknown format versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.check_version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Checkpoint<u32> {
        let mut semantics = BTreeMap::new();
        semantics.insert(StateId::new("init"), 1);
        semantics.insert(StateId::new("a"), 3);
        Checkpoint::new("door", 4, semantics)
    }

    #[test]
    fn new_checkpoint_is_current_version() {
        let checkpoint = sample();
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.machine, "door");
        assert_eq!(checkpoint.iterations, 4);
        assert!(Uuid::parse_str(&checkpoint.id).is_ok());
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn json_preserves_checkpoint() {
        let checkpoint = sample();
        let json = checkpoint.to_json().unwrap();
        assert_eq!(Checkpoint::from_json(&json).unwrap(), checkpoint);
    }

    #[test]
    fn bytes_preserve_checkpoint() {
        let checkpoint = sample();
        let bytes = checkpoint.to_bytes().unwrap();
        assert_eq!(Checkpoint::from_bytes(&bytes).unwrap(), checkpoint);
    }

    #[test]
    fn future_version_is_rejected() {
        let mut checkpoint = sample();
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        let result = Checkpoint::<u32>::from_json(&json);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_is_a_deserialization_error() {
        let result = Checkpoint::<u32>::from_json("not json");
        assert!(matches!(result, Err(CheckpointError::Decode(_))));

        let result = Checkpoint::<u32>::from_bytes(&[0xff]);
        assert!(matches!(result, Err(CheckpointError::Decode(_))));
    }
}
