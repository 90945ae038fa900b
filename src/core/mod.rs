//! Core lifecycle types and logic.
//!
//! This module contains the pure core of the intent state machine:
//! - The closed `StateId`/`EventId` vocabulary and its labels
//! - The static, precomputed transition table
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or allocates on the lookup path.

mod history;
mod table;
mod vocab;

pub use history::{StateHistory, TransitionRecord};
pub use table::{TransitionTable, INTENT_TRANSITIONS};
pub use vocab::{event_to_string, state_to_string, EventId, StateId, UnknownLabel};
