//! Grief guide flow: pick a tool, get personalized content for it.

use std::sync::Arc;

use griefworks_core::api::GriefApi;
use griefworks_core::error::{GriefError, Result};
use griefworks_core::guide::{
    PersonalizedContentRequest, PersonalizedContentResponse, ToolSelection,
};
use griefworks_core::retry::{Orchestrator, RetryPolicy};
use griefworks_infrastructure::SessionStore;

use crate::page::{PageMount, PageState};

pub const COMPLETE_MOOD_ANALYSIS_FOR_TOOLS: &str = "Please complete the mood analysis on the Home page first to access personalized grief support tools.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideView {
    /// Set when the page cannot offer tools yet.
    pub missing_data: bool,
    pub selected_tool: Option<String>,
    pub content: Option<PersonalizedContentResponse>,
}

pub struct GriefGuideFlow {
    store: SessionStore,
    api: Arc<dyn GriefApi>,
    orchestrator: Orchestrator,
    page: PageState<GuideView>,
}

impl GriefGuideFlow {
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

    pub fn page(&self) -> &PageState<GuideView> {
        &self.page
    }

    /// Loads the last generated content and flags missing prerequisites.
    pub fn restore(&self) -> GuideView {
        let missing_data = self.store.get_user_inputs().is_none()
            || self.store.get_sentiment_response().is_none();
        let content = self.store.get_personalized_content_response();
        let selected_tool = self.store.get_selected_tool();

        self.page.update(|view| {
            view.missing_data = missing_data;
            if content.is_some() {
                view.content = content;
            }
            if selected_tool.is_some() {
                view.selected_tool = selected_tool;
            }
        });
        self.page.snapshot()
    }

    /// Every tool offered by the stored analysis, in card order.
    pub fn tool_selections(&self) -> Vec<ToolSelection> {
        let Some(sentiment) = self.store.get_sentiment_response() else {
            return Vec::new();
        };
        sentiment
            .categories()
            .flat_map(|category| {
                category.tools.iter().map(move |tool| {
                    ToolSelection::new(category.title, category.description, tool.as_str())
                })
            })
            .collect()
    }

    /// Generates content for `selection`.
    ///
    /// The content and the selected tool are stored together, and only on
    /// success.
    ///
    /// # Errors
    ///
    /// - `GriefError::InProgress` if a generation is already running
    /// - `GriefError::MissingData` if the mood analysis has not succeeded yet
    /// - `GriefError::Contract` if the category label is not one of the six
    ///   known titles; this is never retried
    /// - `GriefError::Remote` once all attempts failed
    pub async fn select_tool(
        &self,
        selection: &ToolSelection,
    ) -> Result<PersonalizedContentResponse> {
        if self.orchestrator.is_in_flight() {
            return Err(GriefError::InProgress);
        }
        let (Some(inputs), Some(_)) = (
            self.store.get_user_inputs(),
            self.store.get_sentiment_response(),
        ) else {
            self.page.update(|view| view.missing_data = true);
            return Err(GriefError::missing_data(COMPLETE_MOOD_ANALYSIS_FOR_TOOLS));
        };

        self.page
            .update(|view| view.selected_tool = Some(selection.name.clone()));

        let tool_title = selection.tool_title().inspect_err(|e| {
            tracing::error!(error = %e, "Unmapped tool title");
        })?;
        let request = PersonalizedContentRequest {
            inputs: inputs.to_request(),
            tool_title,
            tool_description: selection.description.clone(),
            tool_name: selection.name.clone(),
        };

        let outcome = self
            .orchestrator
            .run(|_| self.api.personalized_content(&request))
            .await;

        match &outcome {
            Ok(content) => {
                self.store.set_personalized_content_response(content);
                self.store.set_selected_tool(&selection.name);
                self.page.update(|view| view.content = Some(content.clone()));
                tracing::info!(tool = %selection.name, "Personalized content generated");
            }
            Err(e) => tracing::error!(tool = %selection.name, error = %e, "Content generation failed"),
        }
        outcome
    }
}
