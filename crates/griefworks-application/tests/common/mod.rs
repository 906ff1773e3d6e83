#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use griefworks_core::api::{ApiResult, GriefApi};
use griefworks_core::guide::{PersonalizedContentRequest, PersonalizedContentResponse};
use griefworks_core::inputs::{CauseOfLoss, Relationship, UserInputs, UserInputsDraft};
use griefworks_core::schedule::ScheduleResponse;
use griefworks_core::sentiment::SentimentResponse;
use serde_json::json;

/// Backend fake that replays queued results and counts calls.
///
/// An exhausted queue answers with a failure.
#[derive(Default)]
pub struct ScriptedApi {
    sentiment: Mutex<VecDeque<ApiResult<SentimentResponse>>>,
    schedule: Mutex<VecDeque<ApiResult<ScheduleResponse>>>,
    content: Mutex<VecDeque<ApiResult<PersonalizedContentResponse>>>,
    sentiment_calls: AtomicUsize,
    schedule_calls: AtomicUsize,
    content_calls: AtomicUsize,
    last_inputs: Mutex<Option<UserInputs>>,
    last_content_request: Mutex<Option<PersonalizedContentRequest>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sentiment(&self, result: ApiResult<SentimentResponse>) -> &Self {
        self.sentiment.lock().unwrap().push_back(result);
        self
    }

    pub fn push_schedule(&self, result: ApiResult<ScheduleResponse>) -> &Self {
        self.schedule.lock().unwrap().push_back(result);
        self
    }

    pub fn push_content(&self, result: ApiResult<PersonalizedContentResponse>) -> &Self {
        self.content.lock().unwrap().push_back(result);
        self
    }

    pub fn sentiment_calls(&self) -> usize {
        self.sentiment_calls.load(Ordering::SeqCst)
    }

    pub fn schedule_calls(&self) -> usize {
        self.schedule_calls.load(Ordering::SeqCst)
    }

    pub fn content_calls(&self) -> usize {
        self.content_calls.load(Ordering::SeqCst)
    }

    pub fn last_inputs(&self) -> Option<UserInputs> {
        self.last_inputs.lock().unwrap().clone()
    }

    pub fn last_content_request(&self) -> Option<PersonalizedContentRequest> {
        self.last_content_request.lock().unwrap().clone()
    }
}

fn next<T>(queue: &Mutex<VecDeque<ApiResult<T>>>) -> ApiResult<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| ApiResult::failure("no scripted response"))
}

#[async_trait]
impl GriefApi for ScriptedApi {
    async fn analyze_sentiment(&self, inputs: &UserInputs) -> ApiResult<SentimentResponse> {
        self.sentiment_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_inputs.lock().unwrap() = Some(inputs.clone());
        next(&self.sentiment)
    }

    async fn generate_schedule(&self, inputs: &UserInputs) -> ApiResult<ScheduleResponse> {
        self.schedule_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_inputs.lock().unwrap() = Some(inputs.clone());
        next(&self.schedule)
    }

    async fn personalized_content(
        &self,
        request: &PersonalizedContentRequest,
    ) -> ApiResult<PersonalizedContentResponse> {
        self.content_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_content_request.lock().unwrap() = Some(request.clone());
        next(&self.content)
    }
}

pub fn inputs() -> UserInputs {
    UserInputs::new("I miss him", Relationship::Parent, CauseOfLoss::Illness)
}

pub fn draft() -> UserInputsDraft {
    inputs().into()
}

pub fn sentiment() -> SentimentResponse {
    serde_json::from_value(json!({
        "mood": "Sad",
        "titles": {
            "1. Stay Connected": {
                "description": "Reach out to people who knew him",
                "tools": ["Call a friend", "Join a support group"]
            },
            "4. Mindfulness": {
                "description": "Stay with the present moment",
                "tools": ["Breathing exercise"]
            }
        }
    }))
    .unwrap()
}

pub fn schedule() -> ScheduleResponse {
    serde_json::from_value(json!({
        "morning": [{"time_frame": "8:00 AM", "activity": "Walk", "description": "A short walk outside"}],
        "noon": [],
        "afternoon": [{"time_frame": "3:00 PM", "activity": "Journal", "description": null}],
        "evening": [],
        "night": [{"time_frame": "10:00 PM", "activity": "Rest", "description": "Wind down"}]
    }))
    .unwrap()
}

pub fn content() -> PersonalizedContentResponse {
    serde_json::from_value(json!({
        "motivation_cards": ["You are not alone", "One day at a time"],
        "song_recommendation": {
            "title": "Fix You",
            "url": "https://www.youtube.com/watch?v=k4V3Mo61fJM",
            "reason": "Gentle and hopeful"
        },
        "essay": {
            "quote": "Grief is love with nowhere to go.",
            "welcome_to_grief_works": "Welcome.",
            "grief_is_hard_work": "It takes time.",
            "about_your_grief": "Losing a parent to illness is hard.",
            "heal_and_grow": "Healing comes in waves."
        }
    }))
    .unwrap()
}
