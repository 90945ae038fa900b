//! Property-based tests for the intent lifecycle.
//!
//! These tests use proptest to drive intents through random event
//! sequences and check that the lifecycle invariants hold throughout.

use intent_lifecycle::{
    event_to_string, state_to_string, EventId, Intent, StateId, SupervisedIntent,
    INTENT_TRANSITIONS,
};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(index in 0..StateId::COUNT) -> StateId {
        StateId::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EventId::COUNT) -> EventId {
        EventId::ALL[index]
    }
}

/// A started intent after replaying `events`.
fn replay(events: &[EventId]) -> Intent {
    let mut intent = Intent::new();
    intent.start();
    for &event in events {
        intent.dispatch(event);
    }
    intent
}

proptest! {
    #[test]
    fn dispatch_agrees_with_table(
        events in prop::collection::vec(arbitrary_event(), 0..20),
        event in arbitrary_event(),
    ) {
        let mut intent = replay(&events);
        let before = intent.state();
        let expected = INTENT_TRANSITIONS.lookup(before, event);

        let changed = intent.dispatch(event);

        prop_assert_eq!(changed, expected.is_some());
        prop_assert_eq!(intent.state(), expected.unwrap_or(before));
    }

    #[test]
    fn cancel_reaches_cancelled_from_any_path(
        events in prop::collection::vec(arbitrary_event(), 0..30)
    ) {
        let mut intent = replay(&events);
        let state = intent.state();
        let cancellable = matches!(
            state,
            StateId::Created
                | StateId::Inactive
                | StateId::Pending
                | StateId::Running
                | StateId::Blocked
                | StateId::Faulted
        );

        if cancellable {
            prop_assert!(intent.dispatch(EventId::Cancel));
            prop_assert_eq!(intent.state(), StateId::Cancelled);
        }
    }

    #[test]
    fn cancelled_is_closed(events in prop::collection::vec(arbitrary_event(), 0..20)) {
        let mut intent = Intent::new();
        intent.start();
        intent.dispatch(EventId::Cancel);

        for event in events {
            prop_assert!(!intent.dispatch(event));
            prop_assert_eq!(intent.state(), StateId::Cancelled);
        }
    }

    #[test]
    fn root_is_never_reentered(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        let mut intent = Intent::new();
        intent.start();
        for event in events {
            intent.dispatch(event);
            prop_assert_ne!(intent.state(), StateId::Root);
            prop_assert!(!intent.start());
        }
    }

    #[test]
    fn reentry_lands_in_pending(event in arbitrary_event(), state in arbitrary_state()) {
        if event.is_reentry() {
            if let Some(to) = INTENT_TRANSITIONS.lookup(state, event) {
                prop_assert_eq!(to, StateId::Pending);
                prop_assert!(state.is_soft_terminal());
            }
        }
    }

    #[test]
    fn labels_roundtrip(state in arbitrary_state(), event in arbitrary_event()) {
        prop_assert_eq!(StateId::from_label(state_to_string(state)), Some(state));
        prop_assert_eq!(EventId::from_label(event_to_string(event)), Some(event));
        prop_assert_eq!(state.to_string(), format!("{state:?}").to_uppercase());
    }

    #[test]
    fn supervised_history_mirrors_intent(
        events in prop::collection::vec(arbitrary_event(), 0..25)
    ) {
        let mut plain = Intent::new();
        let mut supervised = SupervisedIntent::new();
        plain.start();
        supervised.start();

        let mut applied = 1;
        for event in events {
            let changed = plain.dispatch(event);
            let step = supervised.dispatch(event);
            prop_assert_eq!(changed, step.is_transitioned());
            if changed {
                applied += 1;
            }
        }

        prop_assert_eq!(supervised.state(), plain.state());
        prop_assert_eq!(supervised.history().len(), applied);
        prop_assert_eq!(supervised.history().last_state(), Some(plain.state()));
    }
}
