//! Errors raised while saving or restoring a semantics-map snapshot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The semantics map could not be written as JSON or bincode.
    #[error("cannot encode semantics snapshot: {0}")]
    Encode(String),

    /// The input is not a snapshot of this lattice's values.
    #[error("cannot decode semantics snapshot: {0}")]
    Decode(String),

    /// The snapshot was written by an incompatible format revision.
    #[error("semantics snapshot has format version {found}, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
