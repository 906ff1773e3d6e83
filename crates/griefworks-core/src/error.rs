//! Error types for the Grief Works client.

use thiserror::Error;

/// A shared error type for the entire Grief Works client.
///
/// Every failure a flow can hit is one of these variants. Pages turn them
/// into user-facing notices; none of them is meant to escape as a panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GriefError {
    /// A required form field is missing or blank.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An upstream record the flow depends on is absent from the session.
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// A static mapping lookup failed (e.g. an unknown tool label).
    #[error("Contract violation: {0}")]
    Contract(String),

    /// The remote service kept failing until attempts ran out.
    #[error("{message}")]
    Remote { message: String, attempts: u32 },

    /// Another orchestration for the same flow is still running.
    #[error("Operation already in progress")]
    InProgress,

    /// Session storage could not serialize or deserialize a record.
    #[error("Storage error for '{key}': {message}")]
    Storage { key: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GriefError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a MissingData error
    pub fn missing_data(message: impl Into<String>) -> Self {
        Self::MissingData(message.into())
    }

    /// Creates a Contract error
    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract(message.into())
    }

    /// Creates a Remote error carrying the last attempt's message
    pub fn remote(message: impl Into<String>, attempts: u32) -> Self {
        Self::Remote {
            message: message.into(),
            attempts,
        }
    }

    /// Creates a Storage error
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::MissingData(_))
    }

    pub fn is_contract(&self) -> bool {
        matches!(self, Self::Contract(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Check if retrying the same call could change the outcome.
    ///
    /// Only remote failures are transient; everything else is decided
    /// locally before a request is ever sent.
    pub fn is_retryable(&self) -> bool {
        self.is_remote()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for GriefError {
    fn from(err: std::io::Error) -> Self {
        Self::Config(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for GriefError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON error: {err}"))
    }
}

impl From<toml::de::Error> for GriefError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("TOML parse error: {err}"))
    }
}

/// A type alias for `Result<T, GriefError>`.
pub type Result<T> = std::result::Result<T, GriefError>;
