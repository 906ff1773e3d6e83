//! Session-scoped storage interfaces.
//!
//! The typed store lives in the infrastructure crate; this module only
//! defines the fixed key set and the raw backend it writes through.

mod backend;
mod key;

pub use backend::SessionBackend;
pub use key::StorageKey;
