//! Daily schedule flow.

use std::sync::Arc;

use griefworks_core::api::GriefApi;
use griefworks_core::error::{GriefError, Result};
use griefworks_core::retry::{Orchestrator, RetryPolicy};
use griefworks_core::schedule::ScheduleResponse;
use griefworks_infrastructure::SessionStore;

use crate::page::{PageMount, PageState};

pub const COMPLETE_MOOD_ANALYSIS: &str = "Please complete the mood analysis on the Home page first.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleView {
    pub schedule: Option<ScheduleResponse>,
}

/// Generates a daily schedule from the stored submission.
pub struct DailyScheduleFlow {
    store: SessionStore,
    api: Arc<dyn GriefApi>,
    orchestrator: Orchestrator,
    page: PageState<ScheduleView>,
}

impl DailyScheduleFlow {
    pub fn new(store: SessionStore, api: Arc<dyn GriefApi>, policy: RetryPolicy) -> Self {
        Self {
            store,
            api,
            orchestrator: Orchestrator::new(policy),
            page: PageState::new(PageMount::new()),
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn page(&self) -> &PageState<ScheduleView> {
        &self.page
    }

    pub fn restore(&self) -> ScheduleView {
        let schedule = self.store.get_schedule_response();
        self.page.update(|view| view.schedule = schedule);
        self.page.snapshot()
    }

    /// # Errors
    ///
    /// - `GriefError::MissingData` if the mood analysis has not succeeded
    ///   yet; no request is sent
    /// - `GriefError::InProgress` if a generation is already running
    /// - `GriefError::Remote` once all attempts failed
    pub async fn generate(&self) -> Result<ScheduleResponse> {
        let (Some(inputs), Some(_)) = (
            self.store.get_user_inputs(),
            self.store.get_sentiment_response(),
        ) else {
            return Err(GriefError::missing_data(COMPLETE_MOOD_ANALYSIS));
        };
        if self.orchestrator.is_in_flight() {
            return Err(GriefError::InProgress);
        }

        let request = inputs.to_request();
        let outcome = self
            .orchestrator
            .run(|_| self.api.generate_schedule(&request))
            .await;

        match &outcome {
            Ok(schedule) => {
                self.store.set_schedule_response(schedule);
                self.page
                    .update(|view| view.schedule = Some(schedule.clone()));
                tracing::info!("Daily schedule generated");
            }
            Err(e) => tracing::error!(error = %e, "Schedule generation failed"),
        }
        outcome
    }
}
