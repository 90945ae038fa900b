//! Intent transition history.
//!
//! Provides immutable tracking of the stages an intent moved through,
//! following the same value semantics as the rest of the core.

use super::vocab::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use intent_lifecycle::core::{EventId, StateId, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: StateId::Running,
///     event: Some(EventId::Fail),
///     to: StateId::Faulted,
///     timestamp: Utc::now(),
///     attempt: 1,
/// };
/// assert!(record.to.is_fault());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left
    pub from: StateId,
    /// The triggering event, `None` for the `start()` step
    pub event: Option<EventId>,
    /// The state being entered
    pub to: StateId,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// Execution attempt the intent was on (1-based, bumped by re-entry)
    pub attempt: usize,
}

/// Ordered history of applied transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use intent_lifecycle::core::{EventId, StateHistory, StateId, TransitionRecord};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(TransitionRecord {
///         from: StateId::Root,
///         event: None,
///         to: StateId::Created,
///         timestamp: Utc::now(),
///         attempt: 1,
///     })
///     .record(TransitionRecord {
///         from: StateId::Created,
///         event: Some(EventId::Activate),
///         to: StateId::Pending,
///         timestamp: Utc::now(),
///         attempt: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![StateId::Root, StateId::Created, StateId::Pending]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<TransitionRecord>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Elapsed time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// State entered by the most recent transition.
    pub fn last_state(&self) -> Option<StateId> {
        self.transitions.last().map(|t| t.to)
    }

    /// Get all transitions, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: StateId, event: Option<EventId>, to: StateId) -> TransitionRecord {
        TransitionRecord {
            from,
            event,
            to,
            timestamp: Utc::now(),
            attempt: 1,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last_state().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(record(StateId::Root, None, StateId::Created));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(record(StateId::Root, None, StateId::Created))
            .record(record(
                StateId::Created,
                Some(EventId::Prepare),
                StateId::Inactive,
            ))
            .record(record(
                StateId::Inactive,
                Some(EventId::Cancel),
                StateId::Cancelled,
            ));

        assert_eq!(
            history.get_path(),
            vec![
                StateId::Root,
                StateId::Created,
                StateId::Inactive,
                StateId::Cancelled
            ]
        );
        assert_eq!(history.last_state(), Some(StateId::Cancelled));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let first = TransitionRecord {
            timestamp: start,
            ..record(StateId::Pending, Some(EventId::Start), StateId::Running)
        };
        let last = TransitionRecord {
            timestamp: start + chrono::Duration::milliseconds(250),
            ..record(StateId::Running, Some(EventId::Complete), StateId::Completed)
        };

        let history = StateHistory::new().record(first).record(last);
        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(record(StateId::Root, None, StateId::Created));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new()
            .record(record(StateId::Root, None, StateId::Created))
            .record(record(
                StateId::Created,
                Some(EventId::Activate),
                StateId::Pending,
            ));

        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"ACTIVATE\""));

        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
