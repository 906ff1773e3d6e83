//! Infrastructure layer: session-scoped storage and client configuration.

pub mod config_service;
pub mod memory_session_backend;
pub mod paths;
pub mod session_store;

pub use crate::config_service::{ClientConfig, ConfigService};
pub use crate::memory_session_backend::MemorySessionBackend;
pub use crate::session_store::SessionStore;
