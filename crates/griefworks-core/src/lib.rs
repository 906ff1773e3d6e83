//! Domain layer of the Grief Works client.
//!
//! Holds the records exchanged with the backend, the interfaces the outer
//! layers implement (`SessionBackend`, `GriefApi`) and the retry machinery
//! shared by every flow. Nothing in here performs I/O.

pub mod api;
pub mod error;
pub mod guide;
pub mod inputs;
pub mod retry;
pub mod schedule;
pub mod sentiment;
pub mod session;

// Re-export common error type
pub use error::GriefError;
