//! Client for the AI metadata suggestion service.
//!
//! The service takes a video's current metadata and proposes improved
//! title, description, keywords, chapters and thumbnail.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Metadata sent to the suggestion service.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionRequest {
    #[serde(rename = "videoTitle")]
    pub title: String,
    #[serde(rename = "videoDescription")]
    pub description: String,
    #[serde(rename = "videoKeywords")]
    pub keywords: Vec<String>,
    #[serde(rename = "videoCategory")]
    pub category: String,
}

/// Suggestions returned by the service. Missing fields decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestions {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub chapters: Vec<String>,
    pub thumbnail: String,
    pub category: String,
}

/// Errors from the suggestion service client.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("AI service error ({status}): {message}")]
    ApiError {
        status: u16,
        /// The service's `error` field, or the raw body if it had none.
        message: String,
    },
}

/// Source of metadata suggestions.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<Suggestions, SuggestionError>;
}

/// [`SuggestionService`] backed by an HTTP endpoint.
pub struct HttpSuggestionClient {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpSuggestionClient {
    /// * `endpoint` - Full URL the request is POSTed to.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn with_client(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SuggestionService for HttpSuggestionClient {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<Suggestions, SuggestionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "AI service rejected request");
            return Err(SuggestionError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Suggestions>().await?)
    }
}
