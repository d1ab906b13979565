//! Chat backend client.
//!
//! The widget talks to exactly one remote endpoint: `POST <base>/chat`.
//! [`ChatBackend`] is the seam the controller depends on; [`HttpChatBackend`]
//! is the `reqwest` implementation used by the binary.
//!
//! # Wire format
//!
//! Request:
//!
//! ```json
//! { "message": "What are your hours?",
//!   "conversation_history": [ { "role": "user", "content": "..." } ] }
//! ```
//!
//! Response:
//!
//! ```json
//! { "response": "9-5 Mon-Fri", "sources": ["faq.md"] }
//! ```

pub mod error;
pub mod http;

pub use error::{ClientError, Result};
pub use http::HttpChatBackend;

use serde::{Deserialize, Serialize};

use crate::widget::ConversationTurn;

/// Body of a `POST /chat` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The trimmed user message.
    pub message: String,
    /// Snapshot of the conversation history at send time.
    pub conversation_history: Vec<ConversationTurn>,
}

/// Successful `POST /chat` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant answer text.
    pub response: String,
    /// Documents the answer was grounded on.
    #[serde(default)]
    pub sources: Vec<String>,
}

/// A remote chat-completion endpoint.
///
/// Implementations perform one request per call with no retries.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one chat request and wait for its reply.
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply>;
}
