use async_trait::async_trait;

use super::result::ApiResult;
use crate::guide::{PersonalizedContentRequest, PersonalizedContentResponse};
use crate::inputs::UserInputs;
use crate::schedule::ScheduleResponse;
use crate::sentiment::SentimentResponse;

/// Remote operations, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SentimentAnalyze,
    DailySchedule,
    PersonalizedContent,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::SentimentAnalyze => "/sentiment-analyze",
            Endpoint::DailySchedule => "/daily-schedule",
            Endpoint::PersonalizedContent => "/personalized-content",
        }
    }
}

/// Single-shot client for the grief support backend.
///
/// Each method performs exactly one request and never fails with an error
/// of its own: every failure mode is folded into `ApiResult::failure`.
/// Retrying is the caller's business.
#[async_trait]
pub trait GriefApi: Send + Sync {
    async fn analyze_sentiment(&self, inputs: &UserInputs) -> ApiResult<SentimentResponse>;

    async fn generate_schedule(&self, inputs: &UserInputs) -> ApiResult<ScheduleResponse>;

    async fn personalized_content(
        &self,
        request: &PersonalizedContentRequest,
    ) -> ApiResult<PersonalizedContentResponse>;
}
