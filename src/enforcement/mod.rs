//! Retry budgets for re-entry transitions.
//!
//! `RESTART` and `RECOVER` send a finished intent back to `PENDING`. This
//! module bounds how often and how late that may happen. Policies are
//! checked with Stillwater's `Validation`, so every violated limit is
//! reported at once instead of only the first.
//!
//! Only re-entry events are subject to enforcement. Cancellation and the
//! forward lifecycle are never refused.
//!
//! # Example
//!
//! ```rust
//! use intent_lifecycle::enforcement::{EnforcementBuilder, EnforcementRules, ViolationStrategy};
//! use std::time::Duration;
//!
//! let rules: EnforcementRules = EnforcementBuilder::new()
//!     .max_attempts(3)
//!     .timeout(Duration::from_secs(30))
//!     .on_violation(ViolationStrategy::Abort)
//!     .build();
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::{EnforcementBuilder, RetryBudget};
pub use context::TransitionContext;
pub use rules::EnforcementRules;
pub use violations::{ViolationError, ViolationStrategy};
