//! The closed state and event vocabulary of an intent.

use crate::lifecycle_enum;
use thiserror::Error;

lifecycle_enum! {
    /// Lifecycle stage of an intent.
    pub enum StateId {
        /// Uninitialized sentinel. Left by `start()` and never re-entered.
        Root => "ROOT",
        Created => "CREATED",
        Inactive => "INACTIVE",
        Pending => "PENDING",
        Running => "RUNNING",
        /// Waiting on sub-work spawned while running.
        Blocked => "BLOCKED",
        Completed => "COMPLETED",
        Faulted => "FAULTED",
        /// The only state without outgoing transitions.
        Cancelled => "CANCELLED",
    }
}

lifecycle_enum! {
    /// External trigger that may move an intent to another stage.
    pub enum EventId {
        Prepare => "PREPARE",
        Activate => "ACTIVATE",
        Start => "START",
        Complete => "COMPLETE",
        SpawnChild => "SPAWN_CHILD",
        Resume => "RESUME",
        Restart => "RESTART",
        Recover => "RECOVER",
        Fail => "FAIL",
        Abort => "ABORT",
        Cancel => "CANCEL",
    }
}

impl StateId {
    /// No event leaves this state.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Ends a flow but can be re-entered into `Pending`.
    #[inline]
    pub const fn is_soft_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Faulted)
    }

    #[inline]
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::Faulted)
    }

    /// Started and not cancelled.
    #[inline]
    pub const fn is_live(self) -> bool {
        !matches!(self, Self::Root | Self::Cancelled)
    }
}

impl EventId {
    /// Events that send a finished unit of work back to `Pending`.
    #[inline]
    pub const fn is_reentry(self) -> bool {
        matches!(self, Self::Restart | Self::Recover)
    }
}

/// A label that names no variant of the target vocabulary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} label: {label:?}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

/// Canonical name of a state, for logging.
#[inline]
pub const fn state_to_string(state: StateId) -> &'static str {
    state.label()
}

/// Canonical name of an event, for logging.
#[inline]
pub const fn event_to_string(event: EventId) -> &'static str {
    event.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_sizes() {
        assert_eq!(StateId::COUNT, 9);
        assert_eq!(EventId::COUNT, 11);
    }

    #[test]
    fn state_labels_are_canonical() {
        let expected = [
            "ROOT",
            "CREATED",
            "INACTIVE",
            "PENDING",
            "RUNNING",
            "BLOCKED",
            "COMPLETED",
            "FAULTED",
            "CANCELLED",
        ];
        for (state, name) in StateId::ALL.iter().zip(expected) {
            assert_eq!(state_to_string(*state), name);
        }
    }

    #[test]
    fn event_labels_are_canonical() {
        let expected = [
            "PREPARE",
            "ACTIVATE",
            "START",
            "COMPLETE",
            "SPAWN_CHILD",
            "RESUME",
            "RESTART",
            "RECOVER",
            "FAIL",
            "ABORT",
            "CANCEL",
        ];
        for (event, name) in EventId::ALL.iter().zip(expected) {
            assert_eq!(event_to_string(*event), name);
        }
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (i, state) in StateId::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
        for (i, event) in EventId::ALL.iter().enumerate() {
            assert_eq!(event.index(), i);
        }
    }

    #[test]
    fn only_cancelled_is_terminal() {
        let terminal: Vec<_> = StateId::ALL
            .iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![&StateId::Cancelled]);
    }

    #[test]
    fn soft_terminal_states() {
        assert!(StateId::Completed.is_soft_terminal());
        assert!(StateId::Faulted.is_soft_terminal());
        assert!(!StateId::Cancelled.is_soft_terminal());
        assert!(!StateId::Running.is_soft_terminal());
    }

    #[test]
    fn live_excludes_root_and_cancelled() {
        assert!(!StateId::Root.is_live());
        assert!(!StateId::Cancelled.is_live());
        assert!(StateId::Blocked.is_live());
        assert!(StateId::Faulted.is_live());
    }

    #[test]
    fn reentry_events() {
        let reentry: Vec<_> = EventId::ALL.iter().filter(|e| e.is_reentry()).collect();
        assert_eq!(reentry, vec![&EventId::Restart, &EventId::Recover]);
    }

    #[test]
    fn serde_uses_canonical_labels() {
        assert_eq!(
            serde_json::to_string(&EventId::SpawnChild).unwrap(),
            "\"SPAWN_CHILD\""
        );
        let state: StateId = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(state, StateId::Cancelled);
    }

    #[test]
    fn unknown_label_is_reported() {
        let err = "SLEEPING".parse::<StateId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown StateId label: \"SLEEPING\"");
    }
}
