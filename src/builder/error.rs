//! Build errors for transition tables.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition {from} --{event}--> already defined")]
    DuplicateTransition { from: StateId, event: EventId },

    #[error("Transition {from} --{event}--> targets ROOT, which is never re-entered")]
    RootTarget { from: StateId, event: EventId },
}
