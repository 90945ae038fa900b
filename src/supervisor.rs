//! An intent that keeps its own history and retry budget.
//!
//! [`SupervisedIntent`] drives the same table as [`Intent`], but records
//! every applied transition, counts execution attempts and consults
//! [`EnforcementRules`] before a `RESTART` or `RECOVER` is allowed through.
//! It is meant for orchestration code that wants an audit trail; hot loops
//! should use [`Intent`] directly.

use crate::checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
use crate::core::{EventId, StateHistory, StateId, TransitionRecord, INTENT_TRANSITIONS};
use crate::enforcement::{EnforcementRules, TransitionContext, ViolationError, ViolationStrategy};
use crate::intent::Intent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bookkeeping kept alongside a supervised intent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntentMetadata {
    /// When the intent was created
    pub created_at: DateTime<Utc>,

    /// Last applied transition
    pub updated_at: DateTime<Utc>,

    /// Current execution attempt, starting at 1
    pub attempt: usize,

    /// Accepted `RESTART` events
    pub restarts: usize,

    /// Accepted `RECOVER` events
    pub recoveries: usize,
}

impl Default for IntentMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            attempt: 1,
            restarts: 0,
            recoveries: 0,
        }
    }
}

/// Outcome of a supervised step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The table transition was applied
    Transitioned { from: StateId, to: StateId },

    /// No transition is defined; nothing changed
    Ignored { state: StateId },

    /// Re-entry refused; the intent stays where it is
    Retry { violations: Vec<ViolationError> },

    /// Re-entry refused and the intent cancelled if it could be
    Aborted {
        violations: Vec<ViolationError>,
        state: StateId,
    },
}

impl StepResult {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Intent handle with history, metadata and an optional retry budget.
#[derive(Debug)]
pub struct SupervisedIntent {
    intent: Intent,
    history: StateHistory,
    metadata: IntentMetadata,
    rules: Option<EnforcementRules>,
}

impl Default for SupervisedIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl SupervisedIntent {
    /// A fresh intent in `ROOT` with no retry budget.
    pub fn new() -> Self {
        Self {
            intent: Intent::new(),
            history: StateHistory::new(),
            metadata: IntentMetadata::default(),
            rules: None,
        }
    }

    /// A fresh intent whose re-entries are checked against `rules`.
    pub fn with_rules(rules: EnforcementRules) -> Self {
        Self {
            rules: Some(rules),
            ..Self::new()
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn state(&self) -> StateId {
        self.intent.state()
    }

    pub fn is_terminal(&self) -> bool {
        self.intent.is_terminal()
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn metadata(&self) -> &IntentMetadata {
        &self.metadata
    }

    pub fn rules(&self) -> Option<&EnforcementRules> {
        self.rules.as_ref()
    }

    /// Leave `ROOT`. A no-op once started.
    pub fn start(&mut self) -> StepResult {
        if !self.intent.start() {
            return StepResult::Ignored {
                state: self.state(),
            };
        }
        self.record(StateId::Root, None, StateId::Created);
        tracing::debug!(to = %StateId::Created, "supervised intent started");
        StepResult::Transitioned {
            from: StateId::Root,
            to: StateId::Created,
        }
    }

    /// Apply `event`, enforcing the retry budget on re-entry events.
    pub fn dispatch(&mut self, event: EventId) -> StepResult {
        let from = self.state();
        let Some(to) = INTENT_TRANSITIONS.lookup(from, event) else {
            tracing::debug!(state = %from, %event, "event ignored, no transition defined");
            return StepResult::Ignored { state: from };
        };

        if let Some((strategy, violations)) = self.refusal(from, event, to) {
            tracing::warn!(
                state = %from,
                %event,
                attempt = self.metadata.attempt,
                ?strategy,
                ?violations,
                "re-entry violates retry budget"
            );
            match strategy {
                ViolationStrategy::Retry => return StepResult::Retry { violations },
                ViolationStrategy::Abort => {
                    self.commit(EventId::Cancel);
                    return StepResult::Aborted {
                        violations,
                        state: self.state(),
                    };
                }
                ViolationStrategy::IgnoreAndLog => {}
            }
        }

        self.commit(event);
        StepResult::Transitioned { from, to }
    }

    /// Snapshot for persistence.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: self.state(),
            history: self.history.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// Rebuild an intent from a validated checkpoint.
    ///
    /// Enforcement rules hold closures and are not persisted; pass them
    /// again if the resumed intent should keep its budget.
    pub fn resume(
        checkpoint: Checkpoint,
        rules: Option<EnforcementRules>,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        tracing::debug!(
            id = %checkpoint.id,
            state = %checkpoint.state,
            transitions = checkpoint.history.len(),
            "resuming intent from checkpoint"
        );
        Ok(Self {
            intent: Intent::from_state(checkpoint.state),
            history: checkpoint.history,
            metadata: checkpoint.metadata,
            rules,
        })
    }

    fn refusal(
        &self,
        from: StateId,
        event: EventId,
        to: StateId,
    ) -> Option<(ViolationStrategy, Vec<ViolationError>)> {
        let rules = self.rules.as_ref().filter(|_| event.is_reentry())?;
        let context = TransitionContext {
            from,
            event,
            to,
            attempt: self.metadata.attempt + 1,
            started_at: self.metadata.created_at,
        };
        let violations = rules.violations(&context);
        (!violations.is_empty()).then(|| (rules.violation_strategy(), violations))
    }

    fn commit(&mut self, event: EventId) {
        let from = self.state();
        if !self.intent.dispatch(event) {
            return;
        }
        match event {
            EventId::Restart => self.metadata.restarts += 1,
            EventId::Recover => self.metadata.recoveries += 1,
            _ => {}
        }
        if event.is_reentry() {
            self.metadata.attempt += 1;
        }
        let to = self.state();
        self.record(from, Some(event), to);
        tracing::debug!(%from, %event, %to, attempt = self.metadata.attempt, "supervised transition");
    }

    fn record(&mut self, from: StateId, event: Option<EventId>, to: StateId) {
        let now = Utc::now();
        self.history = self.history.record(TransitionRecord {
            from,
            event,
            to,
            timestamp: now,
            attempt: self.metadata.attempt,
        });
        self.metadata.updated_at = now;
    }
}
