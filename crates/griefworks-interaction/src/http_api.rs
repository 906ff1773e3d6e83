//! HttpGriefApi - JSON-over-HTTP implementation of [`GriefApi`].
//!
//! Every operation is one POST to `<base_url><endpoint>` with the request
//! serialized as the body. The response envelope is
//! `{ success, data?, message?, error?: { code, message } }`.

use async_trait::async_trait;
use griefworks_core::api::{ApiResult, Endpoint, GENERIC_FAILURE_MESSAGE, GriefApi};
use griefworks_core::guide::{PersonalizedContentRequest, PersonalizedContentResponse};
use griefworks_core::inputs::UserInputs;
use griefworks_core::schedule::ScheduleResponse;
use griefworks_core::sentiment::SentimentResponse;
use griefworks_infrastructure::ClientConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Client that talks to the backend over HTTP.
#[derive(Clone)]
pub struct HttpGriefApi {
    client: Client,
    base_url: String,
}

impl HttpGriefApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Uses a preconfigured `reqwest::Client` (proxies, TLS, ...).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// One attempt, normalized. Never returns early with an error.
    async fn call<B, T>(&self, endpoint: Endpoint, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        match self.send_request(endpoint, body).await {
            Ok(data) => ApiResult::success(data),
            Err(message) => {
                tracing::warn!(endpoint = endpoint.path(), error = %message, "API call failed");
                ApiResult::failure(message)
            }
        }
    }

    async fn send_request<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, String>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint_url(endpoint))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| err.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error! status: {}", status.as_u16()));
        }

        let envelope: ResponseEnvelope = response
            .json()
            .await
            .map_err(|err| format!("Failed to parse response: {err}"))?;

        envelope.into_data(endpoint)
    }
}

#[async_trait]
impl GriefApi for HttpGriefApi {
    async fn analyze_sentiment(&self, inputs: &UserInputs) -> ApiResult<SentimentResponse> {
        self.call(Endpoint::SentimentAnalyze, inputs).await
    }

    async fn generate_schedule(&self, inputs: &UserInputs) -> ApiResult<ScheduleResponse> {
        self.call(Endpoint::DailySchedule, inputs).await
    }

    async fn personalized_content(
        &self,
        request: &PersonalizedContentRequest,
    ) -> ApiResult<PersonalizedContentResponse> {
        self.call(Endpoint::PersonalizedContent, request).await
    }
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ResponseEnvelope {
    fn into_data<T: DeserializeOwned>(self, endpoint: Endpoint) -> Result<T, String> {
        if !self.success {
            return Err(non_blank(self.message)
                .or_else(|| non_blank(self.error.and_then(|error| error.message)))
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()));
        }

        let data = self
            .data
            .filter(|data| !data.is_null())
            .ok_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())?;

        serde_json::from_value(data)
            .map_err(|err| format!("Failed to parse {} response: {err}", endpoint.path()))
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}
