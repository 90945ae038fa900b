//! Builder API for creating enforcement rules.

use crate::enforcement::context::TransitionContext;
use crate::enforcement::rules::{EnforcementRules, ValidationCheck};
use crate::enforcement::violations::{ViolationError, ViolationStrategy};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Declarative retry budget, loadable from any serde format.
///
/// ```
/// use intent_lifecycle::enforcement::{RetryBudget, ViolationStrategy};
///
/// let budget: RetryBudget =
///     serde_json::from_str(r#"{ "max_attempts": 3, "on_violation": "Retry" }"#).unwrap();
/// assert_eq!(budget.max_attempts, Some(3));
/// assert_eq!(budget.timeout, None);
/// assert_eq!(budget.on_violation, ViolationStrategy::Retry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryBudget {
    #[serde(default)]
    pub max_attempts: Option<usize>,
    /// Measured from the intent's creation
    #[serde(default)]
    pub timeout: Option<Duration>,
    #[serde(default = "default_strategy")]
    pub on_violation: ViolationStrategy,
}

fn default_strategy() -> ViolationStrategy {
    ViolationStrategy::Abort
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self {
            max_attempts: None,
            timeout: None,
            on_violation: default_strategy(),
        }
    }
}

/// Builder for creating enforcement rules
///
/// Defaults to no limits and [`ViolationStrategy::Abort`].
pub struct EnforcementBuilder {
    max_attempts: Option<usize>,
    timeout: Option<Duration>,
    required_checks: Vec<ValidationCheck>,
    on_violation: ViolationStrategy,
}

impl EnforcementBuilder {
    pub fn new() -> Self {
        Self::from_budget(&RetryBudget::default())
    }

    /// Start from a declarative budget; custom checks can still be added.
    pub fn from_budget(budget: &RetryBudget) -> Self {
        Self {
            max_attempts: budget.max_attempts,
            timeout: budget.timeout,
            required_checks: Vec::new(),
            on_violation: budget.on_violation,
        }
    }

    /// Set the highest attempt number a re-entry may start
    pub fn max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = Some(n);
        self
    }

    /// Refuse re-entry once this long has passed since creation
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&TransitionContext) -> Validation<(), NonEmptyVec<ViolationError>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a predicate check that fails with `error_msg`
    pub fn require_pred<F>(self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&TransitionContext) -> bool + Send + Sync + 'static,
    {
        self.require(move |ctx: &TransitionContext| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(ViolationError::CustomCheckFailed {
                    event: ctx.event,
                    message: error_msg.clone(),
                })
            }
        })
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Build the enforcement rules
    pub fn build(self) -> EnforcementRules {
        EnforcementRules {
            max_attempts: self.max_attempts,
            timeout: self.timeout,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for EnforcementBuilder {
    fn default() -> Self {
        Self::new()
    }
}
