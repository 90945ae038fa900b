//! Intent Lifecycle: a table-driven state machine for units of work
//!
//! An *intent* is a schedulable unit of work that moves through creation,
//! activation, execution, blocking on sub-work, completion, failure and
//! recovery, and cancellation. The crate answers two questions at any
//! moment: "what stage is this intent in" and "what stages can it move to
//! next".
//!
//! The core is pure and allocation-free. The lifecycle is a static,
//! precomputed table indexed by `(state, event)`, and dispatch is one
//! array lookup. An event without a table entry is a silent no-op, not an
//! error.
//!
//! # Core Concepts
//!
//! - **Vocabulary**: closed `StateId` and `EventId` enumerations with
//!   canonical labels
//! - **Table**: `INTENT_TRANSITIONS`, built once at compile time
//! - **Intent**: the `Copy` handle exposing `start()` and `dispatch(event)`
//! - **Supervision**: optional history, retry budgets and checkpoints
//!
//! # Example
//!
//! ```rust
//! use intent_lifecycle::{state_to_string, EventId, Intent, StateId};
//!
//! let mut intent = Intent::new();
//! intent.start();
//! intent.dispatch(EventId::Activate);
//! intent.dispatch(EventId::Start);
//! intent.dispatch(EventId::SpawnChild);
//! assert_eq!(intent.state(), StateId::Blocked);
//!
//! // COMPLETE is not defined while blocked; the state is unchanged.
//! assert!(!intent.dispatch(EventId::Complete));
//!
//! intent.dispatch(EventId::Resume);
//! assert_eq!(state_to_string(intent.state()), "RUNNING");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod enforcement;
pub mod intent;
pub mod supervisor;

#[doc(hidden)]
pub use serde as __serde;

// Re-export commonly used types
pub use crate::core::{
    event_to_string, state_to_string, EventId, StateHistory, StateId, TransitionRecord,
    TransitionTable, INTENT_TRANSITIONS,
};
pub use intent::{DispatchError, Intent};
pub use supervisor::{IntentMetadata, StepResult, SupervisedIntent};
