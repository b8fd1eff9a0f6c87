//! Client for the video publishing platform.
//!
//! Uploads are a single `POST {base}/videos?key={api_key}` carrying the media
//! locator and snippet metadata; the platform answers with its own video id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything needed to publish one video.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// The owning channel's platform credential.
    pub api_key: String,
    /// Locator of the media to publish (the latest iteration's URL).
    pub media_url: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: String,
    pub private: bool,
}

/// The platform's record of an uploaded video.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublishedVideo {
    pub id: String,
}

/// Errors from the publishing client.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Publishing platform error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// Destination for published videos.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishedVideo, PublishError>;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct UploadBody<'a> {
    media_url: &'a str,
    snippet: Snippet<'a>,
    status: UploadStatus,
}

#[derive(Serialize)]
struct Snippet<'a> {
    title: &'a str,
    description: &'a str,
    tags: &'a [String],
    #[serde(rename = "categoryId")]
    category_id: &'a str,
}

#[derive(Serialize)]
struct UploadStatus {
    #[serde(rename = "privacyStatus")]
    privacy_status: &'static str,
}

impl<'a> From<&'a PublishRequest> for UploadBody<'a> {
    fn from(request: &'a PublishRequest) -> Self {
        Self {
            media_url: &request.media_url,
            snippet: Snippet {
                title: &request.title,
                description: &request.description,
                tags: &request.tags,
                category_id: &request.category_id,
            },
            status: UploadStatus {
                privacy_status: if request.private { "private" } else { "public" },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// [`Publisher`] backed by the platform's HTTP API.
pub struct HttpPublisher {
    client: reqwest::Client,
    api_url: String,
}

impl HttpPublisher {
    /// * `api_url` - Base URL, e.g. `https://platform.example.com/v3`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl Publisher for HttpPublisher {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishedVideo, PublishError> {
        let response = self
            .client
            .post(format!("{}/videos", self.api_url.trim_end_matches('/')))
            .query(&[("key", request.api_key.as_str())])
            .json(&UploadBody::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PublishError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<PublishedVideo>().await?)
    }
}
