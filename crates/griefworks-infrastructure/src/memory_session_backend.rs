//! In-memory session backend.
//!
//! Lives exactly as long as the process holding it, which is what a
//! browsing session is for the terminal client.

use std::collections::HashMap;
use std::sync::RwLock;

use griefworks_core::error::{GriefError, Result};
use griefworks_core::session::SessionBackend;

/// Session storage backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemorySessionBackend {
    items: RwLock<HashMap<String, String>>,
}

impl MemorySessionBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(key: &str) -> GriefError {
    GriefError::storage(key, "session storage lock poisoned")
}

impl SessionBackend for MemorySessionBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().map_err(|_| poisoned(key))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut items = self.items.write().map_err(|_| poisoned(key))?;
        items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().map_err(|_| poisoned(key))?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let backend = MemorySessionBackend::new();
        assert!(backend.get_item("k").unwrap().is_none());

        backend.set_item("k", "v1".to_string()).unwrap();
        backend.set_item("k", "v2".to_string()).unwrap();
        assert_eq!(backend.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(backend.len(), 1);

        backend.remove_item("k").unwrap();
        backend.remove_item("k").unwrap();
        assert!(backend.is_empty());
    }
}
