//! Mood analysis flow (home page).

use std::sync::Arc;

use griefworks_core::api::GriefApi;
use griefworks_core::error::{GriefError, Result};
use griefworks_core::inputs::UserInputsDraft;
use griefworks_core::retry::{Orchestrator, RetryPolicy};
use griefworks_core::sentiment::{Mood, SentimentResponse};
use griefworks_infrastructure::SessionStore;

use crate::page::{PageMount, PageState};

/// What the home page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodView {
    pub form: UserInputsDraft,
    pub mood: Option<Mood>,
}

/// Submits the user's thoughts for sentiment analysis.
pub struct MoodAnalysisFlow {
    store: SessionStore,
    api: Arc<dyn GriefApi>,
    orchestrator: Orchestrator,
    page: PageState<MoodView>,
}

impl MoodAnalysisFlow {
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

    pub fn page(&self) -> &PageState<MoodView> {
        &self.page
    }

    /// Reloads the previous submission and mood from the session.
    pub fn restore(&self) -> MoodView {
        let inputs = self.store.get_user_inputs();
        let mood = self.store.get_sentiment_response().map(|response| response.mood);
        self.page.update(|view| {
            if let Some(inputs) = inputs {
                view.form = inputs.into();
            }
            view.mood = mood;
        });
        self.page.snapshot()
    }

    /// Validates the form, stores it, and runs the analysis.
    ///
    /// # Errors
    ///
    /// - `GriefError::Validation` before anything is stored or sent
    /// - `GriefError::InProgress` if an analysis is already running
    /// - `GriefError::Remote` once all attempts failed; the stored
    ///   sentiment response is left as it was
    pub async fn submit(&self, draft: &UserInputsDraft) -> Result<SentimentResponse> {
        let inputs = draft.validate()?;
        if self.orchestrator.is_in_flight() {
            return Err(GriefError::InProgress);
        }

        self.store.set_user_inputs(&inputs);
        self.page.update(|view| view.form = draft.clone());

        let request = inputs.to_request();
        let outcome = self
            .orchestrator
            .run(|_| self.api.analyze_sentiment(&request))
            .await;

        match &outcome {
            Ok(response) => {
                self.store.set_sentiment_response(response);
                self.page.update(|view| view.mood = Some(response.mood));
                tracing::info!(mood = %response.mood, "Mood analysis complete");
            }
            Err(e) => tracing::error!(error = %e, "Mood analysis failed"),
        }
        outcome
    }
}
