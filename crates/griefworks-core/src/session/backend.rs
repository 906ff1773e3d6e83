use crate::error::Result;

/// Raw string storage scoped to one browsing session.
///
/// Implementations hold serialized records and know nothing about their
/// shape. Contents must not outlive the session.
pub trait SessionBackend: Send + Sync {
    /// Returns the stored text, or `None` if the key is unset.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: String) -> Result<()>;

    /// Removes `key`. Removing an unset key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
