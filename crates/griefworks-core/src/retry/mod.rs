//! Bounded retry with exponential backoff.
//!
//! - `policy`: attempt ceiling and delay schedule
//! - `orchestrator`: the one-at-a-time state machine wrapping a remote call

mod orchestrator;
mod policy;

pub use orchestrator::{OrchestrationState, Orchestrator, RetryProgress, retry_with_backoff};
pub use policy::{DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, RetryPolicy};
