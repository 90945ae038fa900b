//! Violation errors and handling strategies.

use crate::core::EventId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Reasons a re-entry event was refused by a retry budget.
///
/// Every variant names the refused event.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViolationError {
    #[error("{event} refused: maximum attempts ({max}) exceeded (current: {current})")]
    MaxAttemptsExceeded {
        event: EventId,
        max: usize,
        current: usize,
    },

    #[error("{event} refused: timeout ({timeout:?}) exceeded (elapsed: {elapsed:?})")]
    TimeoutExceeded {
        event: EventId,
        timeout: Duration,
        elapsed: Duration,
    },

    #[error("{event} refused: {message}")]
    CustomCheckFailed { event: EventId, message: String },
}

impl ViolationError {
    /// The re-entry event that was refused.
    pub fn event(&self) -> EventId {
        match self {
            Self::MaxAttemptsExceeded { event, .. }
            | Self::TimeoutExceeded { event, .. }
            | Self::CustomCheckFailed { event, .. } => *event,
        }
    }
}

/// Strategy for handling a refused re-entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationStrategy {
    /// Refuse the re-entry and cancel the intent where it can be cancelled
    Abort,

    /// Refuse the re-entry but leave the intent where it is
    Retry,

    /// Apply the re-entry anyway and log a warning
    IgnoreAndLog,
}
