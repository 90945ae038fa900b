//! The intent handle and its dispatcher.
//!
//! An [`Intent`] is a plain `Copy` value holding the current [`StateId`].
//! It leaves `ROOT` through [`Intent::start`] and is moved afterwards only
//! by [`Intent::dispatch`], which resolves the event against
//! [`INTENT_TRANSITIONS`]. An event without a table entry is a silent
//! no-op reported through the `false` return value; it is not a fault.

use crate::core::{EventId, StateId, INTENT_TRANSITIONS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why [`Intent::try_dispatch`] left the state unchanged.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("intent has not been started; cannot dispatch {event}")]
    NotStarted { event: EventId },

    #[error("intent is in terminal state {state}; ignoring {event}")]
    Terminal { state: StateId, event: EventId },

    #[error("no transition for {event} from {state}")]
    Undefined { state: StateId, event: EventId },
}

/// Mutable carrier of an intent's current lifecycle stage.
///
/// # Example
///
/// ```rust
/// use intent_lifecycle::{EventId, Intent, StateId};
///
/// let mut intent = Intent::new();
/// intent.start();
/// assert!(intent.dispatch(EventId::Activate));
/// assert!(intent.dispatch(EventId::Start));
/// assert!(!intent.dispatch(EventId::Resume)); // not blocked
/// assert_eq!(intent.state(), StateId::Running);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intent {
    state: StateId,
}

impl Intent {
    /// A fresh handle in `ROOT`.
    pub const fn new() -> Self {
        Self {
            state: StateId::Root,
        }
    }

    /// Rebuild a handle from a persisted state.
    pub(crate) const fn from_state(state: StateId) -> Self {
        Self { state }
    }

    /// Current lifecycle stage.
    #[inline]
    pub const fn state(&self) -> StateId {
        self.state
    }

    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Leave `ROOT` for `CREATED`.
    ///
    /// Only valid once, from `ROOT`. Any later call is a no-op and
    /// returns `false`.
    pub fn start(&mut self) -> bool {
        if self.state != StateId::Root {
            tracing::trace!(state = %self.state, "start ignored, intent already started");
            return false;
        }
        self.state = StateId::Created;
        tracing::trace!(from = %StateId::Root, to = %StateId::Created, "intent started");
        true
    }

    /// Apply `event` if the table defines it for the current state.
    ///
    /// Returns `true` when the state changed and `false` otherwise.
    #[inline]
    pub fn dispatch(&mut self, event: EventId) -> bool {
        let from = self.state;
        if INTENT_TRANSITIONS.apply(&mut self.state, event) {
            tracing::trace!(%from, %event, to = %self.state, "intent transition");
            true
        } else {
            tracing::trace!(state = %from, %event, "no transition defined");
            false
        }
    }

    /// Like [`dispatch`](Self::dispatch), but reports why nothing
    /// happened. Returns the new state on success.
    pub fn try_dispatch(&mut self, event: EventId) -> Result<StateId, DispatchError> {
        let state = self.state;
        if self.dispatch(event) {
            return Ok(self.state);
        }
        Err(match state {
            StateId::Root => DispatchError::NotStarted { event },
            s if s.is_terminal() => DispatchError::Terminal { state, event },
            _ => DispatchError::Undefined { state, event },
        })
    }

    /// Whether `event` would change the state.
    #[inline]
    pub fn can_dispatch(&self, event: EventId) -> bool {
        INTENT_TRANSITIONS.is_defined(self.state, event)
    }

    /// Events accepted in the current state.
    pub fn available_events(&self) -> impl Iterator<Item = EventId> {
        INTENT_TRANSITIONS.events_from(self.state)
    }
}

impl Default for Intent {
    fn default() -> Self {
        Self::new()
    }
}
