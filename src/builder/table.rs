//! Builder for constructing custom transition tables.

use crate::builder::error::BuildError;
use crate::core::{EventId, StateId, TransitionTable};

/// Builder for transition tables with a fluent API.
///
/// Each `(from, event)` pair may be defined once, and no transition may
/// lead back to `ROOT`.
///
/// # Example
///
/// ```
/// use intent_lifecycle::builder::TableBuilder;
/// use intent_lifecycle::core::{EventId, StateId};
///
/// let table = TableBuilder::new()
///     .transition(StateId::Created, EventId::Activate, StateId::Pending)?
///     .transition(StateId::Pending, EventId::Start, StateId::Running)?
///     .build()?;
///
/// assert_eq!(table.lookup(StateId::Pending, EventId::Start), Some(StateId::Running));
/// assert_eq!(table.lookup(StateId::Created, EventId::Prepare), None);
/// # Ok::<(), intent_lifecycle::builder::BuildError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    table: TransitionTable,
}

impl TableBuilder {
    /// Create a new builder with no transitions.
    pub fn new() -> Self {
        Self {
            table: TransitionTable::empty(),
        }
    }

    /// Add a transition.
    /// Returns an error if the pair is already defined or `to` is `ROOT`.
    pub fn transition(
        mut self,
        from: StateId,
        event: EventId,
        to: StateId,
    ) -> Result<Self, BuildError> {
        if to == StateId::Root {
            return Err(BuildError::RootTarget { from, event });
        }
        if self.table.is_defined(from, event) {
            return Err(BuildError::DuplicateTransition { from, event });
        }
        self.table = self.table.with(from, event, to);
        Ok(self)
    }

    /// Add several transitions at once, stopping at the first error.
    pub fn transitions<I>(self, transitions: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (StateId, EventId, StateId)>,
    {
        transitions
            .into_iter()
            .try_fold(self, |builder, (from, event, to)| {
                builder.transition(from, event, to)
            })
    }

    /// Build the table.
    /// Returns an error if no transition was added.
    pub fn build(self) -> Result<TransitionTable, BuildError> {
        if self.table.is_empty() {
            return Err(BuildError::NoTransitions);
        }
        Ok(self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::INTENT_TRANSITIONS;
    use EventId::*;
    use StateId::*;

    #[test]
    fn builder_requires_transitions() {
        let result = TableBuilder::new().build();
        assert_eq!(result, Err(BuildError::NoTransitions));
    }

    #[test]
    fn builder_rejects_duplicates() {
        let result = TableBuilder::new()
            .transition(Running, Fail, Faulted)
            .and_then(|b| b.transition(Running, Fail, Cancelled));

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                from: Running,
                event: Fail
            }
        );
    }

    #[test]
    fn builder_rejects_root_target() {
        let result = TableBuilder::new().transition(Cancelled, Restart, Root);
        assert!(matches!(result, Err(BuildError::RootTarget { .. })));
    }

    #[test]
    fn literal_table_matches_static_table() {
        let table = TableBuilder::new()
            .transitions([
                (Created, Prepare, Inactive),
                (Created, Activate, Pending),
                (Created, Cancel, Cancelled),
                (Inactive, Activate, Pending),
                (Inactive, Cancel, Cancelled),
                (Pending, Start, Running),
                (Pending, Cancel, Cancelled),
                (Running, Complete, Completed),
                (Running, SpawnChild, Blocked),
                (Running, Fail, Faulted),
                (Running, Cancel, Cancelled),
                (Blocked, Resume, Running),
                (Blocked, Abort, Faulted),
                (Blocked, Cancel, Cancelled),
                (Completed, Restart, Pending),
                (Faulted, Recover, Pending),
                (Faulted, Cancel, Cancelled),
            ])
            .and_then(TableBuilder::build)
            .unwrap();

        assert_eq!(table, INTENT_TRANSITIONS);
        assert_eq!(table, TransitionTable::intent());
    }

    #[test]
    fn build_error_messages_use_labels() {
        let err = BuildError::DuplicateTransition {
            from: Blocked,
            event: SpawnChild,
        };
        assert_eq!(err.to_string(), "Transition BLOCKED --SPAWN_CHILD--> already defined");
    }
}
