//! Typed session store.
//!
//! Wraps a raw [`SessionBackend`] with one getter/setter pair per record.
//! Writes are fire-and-forget: a serialization or backend fault is logged
//! and dropped. Reads treat missing, corrupt or foreign data as absence.

use std::sync::Arc;

use griefworks_core::error::{GriefError, Result};
use griefworks_core::guide::PersonalizedContentResponse;
use griefworks_core::inputs::UserInputs;
use griefworks_core::schedule::ScheduleResponse;
use griefworks_core::sentiment::SentimentResponse;
use griefworks_core::session::{SessionBackend, StorageKey};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::memory_session_backend::MemorySessionBackend;

/// Session-scoped persistence for the five workflow records.
///
/// Cloning is cheap and every clone sees the same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// A store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionBackend::new()))
    }

    // ============================================================================
    // Generic read/write
    // ============================================================================

    fn try_write<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| GriefError::storage(key.as_str(), e.to_string()))?;
        self.backend.set_item(key.as_str(), json)
    }

    fn write<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            tracing::warn!(key = %key, error = %e, "Failed to write session item");
        }
    }

    fn try_read<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>> {
        let Some(json) = self.backend.get_item(key.as_str())? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| GriefError::storage(key.as_str(), e.to_string()))
    }

    fn read<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read session item");
                None
            }
        }
    }

    // ============================================================================
    // Typed accessors
    // ============================================================================

    pub fn set_user_inputs(&self, inputs: &UserInputs) {
        self.write(StorageKey::UserInputs, inputs);
    }

    pub fn get_user_inputs(&self) -> Option<UserInputs> {
        self.read(StorageKey::UserInputs)
    }

    pub fn set_sentiment_response(&self, response: &SentimentResponse) {
        self.write(StorageKey::SentimentResponse, response);
    }

    pub fn get_sentiment_response(&self) -> Option<SentimentResponse> {
        self.read(StorageKey::SentimentResponse)
    }

    pub fn set_schedule_response(&self, response: &ScheduleResponse) {
        self.write(StorageKey::ScheduleResponse, response);
    }

    pub fn get_schedule_response(&self) -> Option<ScheduleResponse> {
        self.read(StorageKey::ScheduleResponse)
    }

    pub fn set_personalized_content_response(&self, response: &PersonalizedContentResponse) {
        self.write(StorageKey::PersonalizedContentResponse, response);
    }

    pub fn get_personalized_content_response(&self) -> Option<PersonalizedContentResponse> {
        self.read(StorageKey::PersonalizedContentResponse)
    }

    pub fn set_selected_tool(&self, tool: &str) {
        self.write(StorageKey::SelectedTool, tool);
    }

    pub fn get_selected_tool(&self) -> Option<String> {
        self.read(StorageKey::SelectedTool)
    }

    /// Removes every record. Keeps going past individual failures.
    pub fn clear_all(&self) {
        for key in StorageKey::all() {
            if let Err(e) = self.backend.remove_item(key.as_str()) {
                tracing::warn!(key = %key, error = %e, "Failed to remove session item");
            }
        }
    }
}
