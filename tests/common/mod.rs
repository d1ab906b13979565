//! Shared test doubles: a scripted backend and a recording view.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use rag_chat_widget::client::{ChatBackend, ChatReply, ChatRequest, ClientError};
use rag_chat_widget::widget::{DisplayMessage, WidgetView};

/// Backend answering from a queue of canned results and recording requests.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<ChatReply, ClientError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, response: &str, sources: &[&str]) -> Self {
        self.replies.lock().unwrap().push_back(Ok(ChatReply {
            response: response.to_string(),
            sources: sources.iter().map(ToString::to_string).collect(),
        }));
        self
    }

    pub fn fail(self, status: u16) -> Self {
        self.replies.lock().unwrap().push_back(Err(ClientError::Status {
            status,
            message: "boom".to_string(),
        }));
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatBackend for ScriptedBackend {
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ClientError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Status {
                status: 503,
                message: "no scripted reply".to_string(),
            }))
    }
}

/// One call made on the view, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Panel(bool),
    Toggle(bool),
    Focus,
    ClearInput,
    SendEnabled(bool),
    Append(String),
    Typing(bool),
    Scroll,
}

/// View recording every call and holding the rendered messages.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub input: String,
    pub calls: Vec<ViewCall>,
    pub messages: Vec<DisplayMessage>,
    pub typing: bool,
    pub send_enabled: bool,
}

impl RecordingView {
    pub fn count(&self, call: &ViewCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl WidgetView for RecordingView {
    fn set_panel_visible(&mut self, visible: bool) {
        self.calls.push(ViewCall::Panel(visible));
    }

    fn set_toggle_visible(&mut self, visible: bool) {
        self.calls.push(ViewCall::Toggle(visible));
    }

    fn focus_input(&mut self) {
        self.calls.push(ViewCall::Focus);
    }

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.calls.push(ViewCall::ClearInput);
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
        self.calls.push(ViewCall::SendEnabled(enabled));
    }

    fn append_message(&mut self, message: &DisplayMessage) {
        self.messages.push(message.clone());
        self.calls.push(ViewCall::Append(message.text.clone()));
    }

    fn set_typing_visible(&mut self, visible: bool) {
        self.typing = visible;
        self.calls.push(ViewCall::Typing(visible));
    }

    fn scroll_to_latest(&mut self, _delay: Duration) {
        self.calls.push(ViewCall::Scroll);
    }
}
