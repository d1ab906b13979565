//! `reqwest` implementation of [`ChatBackend`].

use std::time::Duration;

use tracing::debug;
use url::Url;

use super::{ChatBackend, ChatReply, ChatRequest, ClientError, Result};

/// HTTP client for the chat backend.
///
/// # Example
///
/// ```rust,no_run
/// use rag_chat_widget::client::{ChatBackend, ChatRequest, HttpChatBackend};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = HttpChatBackend::new("http://localhost:8000")?;
/// let reply = backend
///     .chat(ChatRequest {
///         message: "What are your hours?".into(),
///         conversation_history: Vec::new(),
///     })
///     .await?;
/// println!("{}", reply.response);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpChatBackend {
    /// Create a backend for `base_url` with a default HTTP client.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a backend whose requests fail after `timeout`.
    pub fn with_timeout(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(base_url, http)
    }

    /// Create a backend with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self { base_url, http })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the chat endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat", self.base_url.as_str().trim_end_matches('/'))
    }

    async fn handle_response(response: reqwest::Response) -> Result<ChatReply> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            Err(ClientError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        let url = self.endpoint();
        debug!(
            %url,
            history_len = request.conversation_history.len(),
            "posting chat request"
        );

        let response = self.http.post(&url).json(&request).send().await?;
        Self::handle_response(response).await
    }
}
