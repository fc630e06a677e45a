//! Backend port and its HTTP adapter.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use quiz_core::Question;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::retry::{RetryPolicy, fetch_with_retry};

pub const HEALTH_PATH: &str = "/health";
pub const QUESTIONS_PATH: &str = "/api/questions";
pub const ANSWER_PATH: &str = "/api/answer";
pub const RESET_WRONG_PATH: &str = "/reset-wrong";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body of `POST /api/answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub index: usize,
    pub answer: String,
}

/// Verdict returned for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub success: bool,
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub correct_answer: String,
}

/// Operations the quiz backend offers.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Probe backend availability.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` once the request has failed for good.
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    /// Fetch the full, ordered question list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` once the request has failed for good.
    async fn questions(&self) -> Result<Vec<Question>, ApiError>;

    /// Submit one answer and receive the server's verdict.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` once the request has failed for good.
    async fn submit_answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, ApiError>;

    /// Ask the backend to clear wrong answers. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn reset_wrong(&self) -> Result<(), ApiError>;
}

/// `QuizApi` over JSON/HTTP with bounded retries.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpQuizApi {
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("HTTP client build failed: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: config.retry,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_with_retry(
        &self,
        url: &str,
        request: impl Fn() -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!(url, "sending request");
        fetch_with_retry(url, self.retry, || {
            let builder = request();
            async move { ensure_success(builder.send().await?) }
        })
        .await
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Anything other than a JSON array counts as "no questions"; malformed
/// entries inside an array are a decode error.
fn questions_from_body(body: serde_json::Value) -> Result<Vec<Question>, ApiError> {
    if !body.is_array() {
        tracing::warn!("question payload is not an array");
        return Ok(Vec::new());
    }
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.url(HEALTH_PATH);
        let response = self.send_with_retry(&url, || self.client.get(&url)).await?;
        Ok(response.json().await?)
    }

    async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        let url = self.url(QUESTIONS_PATH);
        let response = self.send_with_retry(&url, || self.client.get(&url)).await?;
        let body: serde_json::Value = response.json().await?;
        questions_from_body(body)
    }

    async fn submit_answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, ApiError> {
        let url = self.url(ANSWER_PATH);
        let response = self
            .send_with_retry(&url, || self.client.post(&url).json(request))
            .await?;
        Ok(response.json().await?)
    }

    async fn reset_wrong(&self) -> Result<(), ApiError> {
        let url = self.url(RESET_WRONG_PATH);
        let response = self.client.post(&url).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
