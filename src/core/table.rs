//! Dense, precomputed transition table.
//!
//! The table is a flat array with one cell per `(StateId, EventId)` pair,
//! addressed as `state * EventId::COUNT + event`. A cell holds the target
//! state or `None` when the pair has no transition. The canonical intent
//! table is assembled by a `const fn`, so it lives in read-only static
//! memory and a lookup is a single array index.

use super::vocab::{EventId, StateId};

const CELLS: usize = StateId::COUNT * EventId::COUNT;

#[inline]
const fn cell(state: StateId, event: EventId) -> usize {
    state.index() * EventId::COUNT + event.index()
}

/// Immutable mapping from `(state, event)` to a target state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransitionTable {
    cells: [Option<StateId>; CELLS],
}

/// The intent lifecycle table, shared by every [`Intent`](crate::Intent).
pub static INTENT_TRANSITIONS: TransitionTable = TransitionTable::intent();

impl TransitionTable {
    /// A table with no transitions.
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// The canonical intent lifecycle.
    ///
    /// ```text
    /// CREATED ──PREPARE──▶ INACTIVE ──ACTIVATE──▶ PENDING ──START──▶ RUNNING
    ///    └─────────────ACTIVATE──────────────────────▲
    ///
    /// RUNNING ──COMPLETE──▶ COMPLETED ──RESTART──▶ PENDING
    /// RUNNING ──FAIL──────▶ FAULTED ────RECOVER──▶ PENDING
    /// RUNNING ──SPAWN_CHILD──▶ BLOCKED ──RESUME──▶ RUNNING
    ///                          BLOCKED ──ABORT───▶ FAULTED
    /// ```
    ///
    /// `CANCEL` leads to `CANCELLED` from every live state except
    /// `COMPLETED`.
    pub const fn intent() -> Self {
        use EventId::*;
        use StateId::*;

        Self::empty()
            .with(Created, Prepare, Inactive)
            .with(Created, Activate, Pending)
            .with(Created, Cancel, Cancelled)
            .with(Inactive, Activate, Pending)
            .with(Inactive, Cancel, Cancelled)
            .with(Pending, Start, Running)
            .with(Pending, Cancel, Cancelled)
            .with(Running, Complete, Completed)
            .with(Running, SpawnChild, Blocked)
            .with(Running, Fail, Faulted)
            .with(Running, Cancel, Cancelled)
            .with(Blocked, Resume, Running)
            .with(Blocked, Abort, Faulted)
            .with(Blocked, Cancel, Cancelled)
            .with(Completed, Restart, Pending)
            .with(Faulted, Recover, Pending)
            .with(Faulted, Cancel, Cancelled)
    }

    pub(crate) const fn with(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.cells[cell(from, event)] = Some(to);
        self
    }

    /// Target of `event` from `state`, if defined.
    #[inline]
    pub const fn lookup(&self, state: StateId, event: EventId) -> Option<StateId> {
        self.cells[cell(state, event)]
    }

    #[inline]
    pub const fn is_defined(&self, state: StateId, event: EventId) -> bool {
        self.lookup(state, event).is_some()
    }

    /// Apply `event` to `state` in place. Returns whether it changed.
    #[inline]
    pub fn apply(&self, state: &mut StateId, event: EventId) -> bool {
        match self.lookup(*state, event) {
            Some(next) => {
                *state = next;
                true
            }
            None => false,
        }
    }

    /// Defined `(event, target)` pairs leaving `state`, in event order.
    pub fn transitions_from(
        &self,
        state: StateId,
    ) -> impl Iterator<Item = (EventId, StateId)> + '_ {
        EventId::ALL
            .iter()
            .filter_map(move |&event| self.lookup(state, event).map(|to| (event, to)))
    }

    /// Events accepted in `state`.
    pub fn events_from(&self, state: StateId) -> impl Iterator<Item = EventId> + '_ {
        self.transitions_from(state).map(|(event, _)| event)
    }

    /// `state` has no outgoing event transitions.
    ///
    /// This is a property of the table, not of the lifecycle: `ROOT` has no
    /// event entries (it leaves through `start()`) yet is not terminal. Use
    /// [`StateId::is_terminal`] for the lifecycle notion.
    pub fn has_no_outgoing(&self, state: StateId) -> bool {
        self.transitions_from(state).next().is_none()
    }

    /// Number of defined transitions.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::empty()
    }
}
