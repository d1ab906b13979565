//! Bounded conversation history sent to the backend for context.

use serde::{Deserialize, Serialize};

/// Default number of turns kept (4 user/assistant exchanges).
pub const DEFAULT_HISTORY_LIMIT: usize = 8;

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person typing into the widget.
    User,
    /// The backend's answer.
    Assistant,
}

/// One message in the history. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    role: Role,
    content: String,
}

impl ConversationTurn {
    /// Create a user turn.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Insertion-ordered turns, trimmed from the front to at most `limit`.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
    limit: usize,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationHistory {
    /// Empty history with the default bound.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Empty history keeping at most `limit` turns.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            turns: Vec::with_capacity(limit + 2),
            limit,
        }
    }

    /// Record a completed exchange, then drop the oldest turns over the bound.
    pub fn push_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.turns.push(ConversationTurn::user(user));
        self.turns.push(ConversationTurn::assistant(assistant));
        self.trim();
    }

    /// Drops whole exchanges so the history always starts with a user turn.
    fn trim(&mut self) {
        if self.turns.len() > self.limit {
            let excess = self.turns.len() - self.limit;
            let excess = excess + excess % 2;
            self.turns.drain(..excess.min(self.turns.len()));
        }
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Owned copy for a request payload.
    pub fn snapshot(&self) -> Vec<ConversationTurn> {
        self.turns.clone()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_serialization() {
        let json = serde_json::to_value(ConversationTurn::assistant("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hi"}));
    }

    #[test]
    fn test_push_exchange_keeps_order() {
        let mut history = ConversationHistory::new();
        history.push_exchange("q1", "a1");

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0], ConversationTurn::user("q1"));
        assert_eq!(history.turns()[1], ConversationTurn::assistant("a1"));
    }

    #[test]
    fn test_bound_holds_after_every_append() {
        let mut history = ConversationHistory::new();
        for i in 0..20 {
            history.push_exchange(format!("q{i}"), format!("a{i}"));
            assert!(history.len() <= DEFAULT_HISTORY_LIMIT);
        }

        let contents: Vec<_> = history.turns().iter().map(ConversationTurn::content).collect();
        assert_eq!(
            contents,
            ["q16", "a16", "q17", "a17", "q18", "a18", "q19", "a19"]
        );
    }

    #[test]
    fn test_odd_limit_keeps_exchanges_whole() {
        let mut history = ConversationHistory::with_limit(3);
        history.push_exchange("q1", "a1");
        history.push_exchange("q2", "a2");

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].role(), Role::User);
        assert_eq!(history.turns()[0].content(), "q2");
    }

    #[test]
    fn test_custom_limit() {
        let mut history = ConversationHistory::with_limit(2);
        history.push_exchange("q1", "a1");
        history.push_exchange("q2", "a2");

        assert_eq!(history.limit(), 2);
        assert_eq!(history.snapshot(), vec![
            ConversationTurn::user("q2"),
            ConversationTurn::assistant("a2"),
        ]);
    }
}
