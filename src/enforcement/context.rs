//! Context provided to enforcement checks.

use crate::core::{EventId, StateId};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// A re-entry transition awaiting enforcement.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionContext {
    pub from: StateId,
    pub event: EventId,
    pub to: StateId,
    /// The attempt the intent would be on after re-entry
    pub attempt: usize,
    /// When the intent was created
    pub started_at: DateTime<Utc>,
}

impl TransitionContext {
    /// Elapsed time since the intent was created
    pub fn elapsed(&self) -> Duration {
        let now = Utc::now();
        now.signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
