//! Checkpoint and resume for supervised intents.
//!
//! A checkpoint captures the current state, the transition history and the
//! bookkeeping of a [`SupervisedIntent`](crate::SupervisedIntent) so a
//! long-running task can survive a process restart. JSON is offered for
//! readability and bincode for compactness.

use crate::core::{StateHistory, StateId, INTENT_TRANSITIONS};
use crate::supervisor::IntentMetadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a supervised intent.
/// Does NOT include enforcement rules (closures are not serializable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current state of the intent
    pub state: StateId,

    /// Complete transition history
    pub history: StateHistory,

    /// Intent metadata
    pub metadata: IntentMetadata,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Parse and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a binary checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check that the snapshot is internally consistent.
    ///
    /// The history is replayed against [`INTENT_TRANSITIONS`]: it must open
    /// with the `ROOT -> CREATED` start step, every later record must be a
    /// table entry, each record must leave the state the previous one
    /// entered, and the last record must land on `state`.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version > CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let mut reached = StateId::Root;
        for (i, record) in self.history.transitions().iter().enumerate() {
            if record.from != reached {
                return Err(CheckpointError::ValidationFailed(format!(
                    "transition {i} leaves {} but history reached {reached}",
                    record.from
                )));
            }

            let allowed = match record.event {
                None => i == 0 && record.from == StateId::Root && record.to == StateId::Created,
                Some(event) => INTENT_TRANSITIONS.lookup(record.from, event) == Some(record.to),
            };
            if !allowed {
                let event = record.event.map_or("START", |e| e.label());
                return Err(CheckpointError::ValidationFailed(format!(
                    "transition {i} ({} --{event}--> {}) is not in the lifecycle",
                    record.from, record.to
                )));
            }

            reached = record.to;
        }

        if reached != self.state {
            return Err(CheckpointError::ValidationFailed(format!(
                "history ends in {reached} but state is {}",
                self.state
            )));
        }
        if self.metadata.attempt == 0 {
            return Err(CheckpointError::ValidationFailed(
                "attempt count must start at 1".to_string(),
            ));
        }
        Ok(())
    }
}
