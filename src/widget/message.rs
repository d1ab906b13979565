//! Render records for the visible message list.

use chrono::{Local, NaiveTime};

/// Text shown in place of an answer when a turn fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I encountered an error. Please try again later or contact support.";

/// Who a rendered message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One rendered chat bubble. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    pub text: String,
    pub sender: Sender,
    pub sources: Vec<String>,
    /// Local time label, see [`current_time_label`].
    pub timestamp: String,
}

impl DisplayMessage {
    /// Create a message stamped with the current local time.
    #[must_use]
    pub fn new(text: impl Into<String>, sender: Sender, sources: Vec<String>) -> Self {
        Self {
            text: text.into(),
            sender,
            sources,
            timestamp: current_time_label(),
        }
    }

    /// Source annotation line, `None` when there are no sources.
    pub fn sources_annotation(&self) -> Option<String> {
        if self.sources.is_empty() {
            None
        } else {
            Some(format!("📚 Sources: {}", self.sources.join(", ")))
        }
    }
}

/// Local wall-clock time as `HH:MM AM/PM`.
pub fn current_time_label() -> String {
    format_time_label(Local::now().time())
}

/// 12-hour, zero-padded time label.
pub fn format_time_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}
