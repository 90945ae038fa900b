//! Enforcement rules for re-entry transitions using Validation.

use crate::enforcement::context::TransitionContext;
use crate::enforcement::violations::{ViolationError, ViolationStrategy};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ValidationCheck =
    Box<dyn Fn(&TransitionContext) -> Validation<(), NonEmptyVec<ViolationError>> + Send + Sync>;

/// Retry budget applied to `RESTART` and `RECOVER`.
/// Uses Validation to accumulate ALL violations.
pub struct EnforcementRules {
    pub(crate) max_attempts: Option<usize>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) required_checks: Vec<ValidationCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl EnforcementRules {
    /// Enforce the budget against a re-entry, accumulating ALL violations.
    ///
    /// Only `RESTART` and `RECOVER` are ever refused; any other event
    /// passes untouched. Each violation carries the refused event.
    pub fn enforce(&self, context: &TransitionContext) -> Validation<(), NonEmptyVec<ViolationError>> {
        if !context.event.is_reentry() {
            return Validation::success(());
        }
        let event = context.event;

        let attempts = self.max_attempts.map(|max| {
            check(context.attempt <= max, || ViolationError::MaxAttemptsExceeded {
                event,
                max,
                current: context.attempt,
            })
        });

        let deadline = self.timeout.map(|timeout| {
            let elapsed = context.elapsed();
            check(elapsed <= timeout, || ViolationError::TimeoutExceeded {
                event,
                timeout,
                elapsed,
            })
        });

        let checks: Vec<_> = attempts
            .into_iter()
            .chain(deadline)
            .chain(self.required_checks.iter().map(|required| required(context)))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Enforce and flatten the outcome into a plain list of violations.
    /// An empty list means the re-entry is allowed.
    pub fn violations(&self, context: &TransitionContext) -> Vec<ViolationError> {
        match self.enforce(context) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }
}

fn check(
    holds: bool,
    violation: impl FnOnce() -> ViolationError,
) -> Validation<(), NonEmptyVec<ViolationError>> {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

impl std::fmt::Debug for EnforcementRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnforcementRules")
            .field("max_attempts", &self.max_attempts)
            .field("timeout", &self.timeout)
            .field("required_checks", &self.required_checks.len())
            .field("on_violation", &self.on_violation)
            .finish()
    }
}
