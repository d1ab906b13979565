//! The chat widget controller.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tracing::{debug, error, info};

use crate::client::{self, ChatBackend, ChatReply, ChatRequest};

use super::events::WidgetEvent;
use super::history::{ConversationHistory, DEFAULT_HISTORY_LIMIT};
use super::message::{DisplayMessage, FALLBACK_MESSAGE, Sender};
use super::view::WidgetView;

/// Delay before scrolling the message list, so layout can settle.
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Whether the chat panel is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

/// A chat request in flight. Owns everything it needs, so the controller
/// stays free to handle other events while it is pending.
pub type TurnFuture = BoxFuture<'static, TurnOutcome>;

/// Settled result of one chat request.
#[derive(Debug)]
pub struct TurnOutcome {
    /// The trimmed user message that was sent.
    pub message: String,
    pub result: client::Result<ChatReply>,
}

/// How a completed turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The backend answered; history grew by one exchange.
    Answered,
    /// The fallback message was shown; history is unchanged.
    Failed,
}

/// Owns the widget state and mediates between UI events and the backend.
///
/// # Example
///
/// ```rust,ignore
/// let backend = Arc::new(HttpChatBackend::new("http://localhost:8000")?);
/// let mut widget = ChatWidgetController::new(backend, view);
///
/// widget.open();
/// widget.submit("What are your hours?").await;
/// ```
pub struct ChatWidgetController<V> {
    backend: Arc<dyn ChatBackend>,
    view: V,
    history: ConversationHistory,
    visibility: Visibility,
}

impl<V> std::fmt::Debug for ChatWidgetController<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidgetController")
            .field("history", &self.history)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

impl<V: WidgetView> ChatWidgetController<V> {
    /// Bind a controller to `view`, starting closed with an empty history.
    pub fn new(backend: Arc<dyn ChatBackend>, view: V) -> Self {
        Self::with_history_limit(backend, view, DEFAULT_HISTORY_LIMIT)
    }

    /// Like [`new`](Self::new) but keeping at most `limit` history turns.
    pub fn with_history_limit(backend: Arc<dyn ChatBackend>, mut view: V, limit: usize) -> Self {
        view.set_panel_visible(false);
        view.set_toggle_visible(true);
        view.set_typing_visible(false);
        let has_input = !view.input_value().trim().is_empty();
        view.set_send_enabled(has_input);

        Self {
            backend,
            view,
            history: ConversationHistory::with_limit(limit),
            visibility: Visibility::Closed,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Visibility
    // ─────────────────────────────────────────────────────────────────────────

    /// Open the panel and focus the input. No-op when already open.
    pub fn open(&mut self) {
        if self.visibility == Visibility::Open {
            return;
        }
        self.visibility = Visibility::Open;
        self.view.set_panel_visible(true);
        self.view.set_toggle_visible(false);
        self.view.focus_input();
        debug!("chat panel opened");
    }

    /// Close the panel. No-op when already closed.
    pub fn close(&mut self) {
        if self.visibility == Visibility::Closed {
            return;
        }
        self.visibility = Visibility::Closed;
        self.view.set_panel_visible(false);
        self.view.set_toggle_visible(true);
        debug!("chat panel closed");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply one UI event. Returns the request future when the event
    /// started a chat turn; the caller drives it and hands the outcome to
    /// [`complete_turn`](Self::complete_turn).
    pub fn handle_event(&mut self, event: WidgetEvent) -> Option<TurnFuture> {
        match event {
            WidgetEvent::ToggleClicked => {
                self.open();
                None
            }
            WidgetEvent::CloseClicked => {
                self.close();
                None
            }
            WidgetEvent::SendClicked | WidgetEvent::EnterPressed { shift: false } => {
                let raw = self.view.input_value();
                self.begin_submit(&raw)
            }
            WidgetEvent::EnterPressed { shift: true } => None,
            WidgetEvent::InputChanged => {
                let has_text = !self.view.input_value().trim().is_empty();
                self.view.set_send_enabled(has_text);
                None
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chat turns
    // ─────────────────────────────────────────────────────────────────────────

    /// Send `raw` and wait for the turn to settle.
    ///
    /// Returns `None` when the input was blank and nothing happened.
    pub async fn submit(&mut self, raw: &str) -> Option<TurnStatus> {
        let turn = self.begin_submit(raw)?;
        let outcome = turn.await;
        Some(self.complete_turn(outcome))
    }

    /// Synchronous half of a submit: render the user bubble, reset the
    /// input, show the typing indicator and build the request.
    ///
    /// Nothing prevents a second call before the first turn settles; the
    /// UI only discourages it by disabling the send button.
    pub fn begin_submit(&mut self, raw: &str) -> Option<TurnFuture> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }
        let message = message.to_string();

        self.render_message(message.clone(), Sender::User, Vec::new());
        self.view.clear_input();
        self.view.set_send_enabled(false);
        self.view.set_typing_visible(true);
        self.view.scroll_to_latest(SCROLL_SETTLE_DELAY);

        let request = ChatRequest {
            message: message.clone(),
            conversation_history: self.history.snapshot(),
        };
        info!(
            history_len = request.conversation_history.len(),
            "dispatching chat turn"
        );

        let backend = Arc::clone(&self.backend);
        Some(Box::pin(async move {
            let result = backend.chat(request).await;
            TurnOutcome { message, result }
        }))
    }

    /// Asynchronous half of a submit: render the answer (or the fallback)
    /// and record the exchange on success.
    pub fn complete_turn(&mut self, outcome: TurnOutcome) -> TurnStatus {
        self.view.set_typing_visible(false);

        match outcome.result {
            Ok(reply) => {
                self.render_message(reply.response.clone(), Sender::Bot, reply.sources);
                self.history.push_exchange(outcome.message, reply.response);
                debug!(turns = self.history.len(), "conversation history updated");
                TurnStatus::Answered
            }
            Err(err) => {
                error!(error = %err, "error sending message");
                self.render_message(FALLBACK_MESSAGE, Sender::Bot, Vec::new());
                TurnStatus::Failed
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a bubble and scroll to it.
    pub fn render_message(&mut self, text: impl Into<String>, sender: Sender, sources: Vec<String>) {
        let message = DisplayMessage::new(text, sender, sources);
        self.view.append_message(&message);
        self.view.scroll_to_latest(SCROLL_SETTLE_DELAY);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Unbind the controller, returning its view.
    pub fn into_view(self) -> V {
        self.view
    }
}
