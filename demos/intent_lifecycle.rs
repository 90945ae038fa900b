//! Intent Lifecycle
//!
//! Drives one intent through the full lifecycle: spawning sub-work,
//! failing, recovering under a retry budget, and finally cancelling.
//!
//! Key concepts:
//! - `Intent` for the allocation-free hot path
//! - `SupervisedIntent` for history, retry budgets and checkpoints
//! - Structured logging through `tracing`
//!
//! Run with: RUST_LOG=intent_lifecycle=trace cargo run --example intent_lifecycle

use intent_lifecycle::enforcement::{EnforcementBuilder, ViolationStrategy};
use intent_lifecycle::{EventId, Intent, StepResult, SupervisedIntent};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut intent = Intent::new();
    intent.start();
    for event in [EventId::Activate, EventId::Start, EventId::SpawnChild] {
        intent.dispatch(event);
    }
    tracing::info!(state = %intent.state(), "hot-path intent waiting on child");

    let rules = EnforcementBuilder::new()
        .max_attempts(2)
        .on_violation(ViolationStrategy::Abort)
        .build();
    let mut supervised = SupervisedIntent::with_rules(rules);
    supervised.start();

    let script = [
        EventId::Activate,
        EventId::Start,
        EventId::Fail,
        EventId::Recover,
        EventId::Start,
        EventId::Fail,
        EventId::Recover,
    ];
    for event in script {
        match supervised.dispatch(event) {
            StepResult::Transitioned { from, to } => {
                tracing::info!(%from, %event, %to, "transition")
            }
            StepResult::Ignored { state } => tracing::info!(%state, %event, "ignored"),
            StepResult::Retry { violations } => {
                tracing::info!(%event, count = violations.len(), "re-entry refused")
            }
            StepResult::Aborted { violations, state } => {
                tracing::info!(%event, %state, count = violations.len(), "budget exhausted")
            }
        }
    }

    let checkpoint = supervised.checkpoint();
    tracing::info!(
        id = %checkpoint.id,
        state = %checkpoint.state,
        attempts = checkpoint.metadata.attempt,
        "final checkpoint"
    );
    println!("{}", checkpoint.to_json()?);

    Ok(())
}
