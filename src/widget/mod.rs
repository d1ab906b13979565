//! The chat widget: state, rendering records and the controller.
//!
//! # Architecture
//!
//! - [`ChatWidgetController`]: owns visibility and history, reacts to
//!   [`WidgetEvent`]s and runs chat turns against a
//!   [`ChatBackend`](crate::client::ChatBackend)
//! - [`WidgetView`]: the UI roles the controller renders into
//! - [`ConversationHistory`]: the bounded transcript sent for context
//! - [`DisplayMessage`]: one rendered bubble
//!
//! # Example
//!
//! ```rust,ignore
//! use rag_chat_widget::widget::{ChatWidgetController, WidgetEvent};
//!
//! let mut widget = ChatWidgetController::new(backend, view);
//! widget.handle_event(WidgetEvent::ToggleClicked);
//!
//! if let Some(turn) = widget.handle_event(WidgetEvent::SendClicked) {
//!     let outcome = turn.await;
//!     widget.complete_turn(outcome);
//! }
//! ```

mod controller;
mod events;
mod history;
mod message;
mod view;

pub use controller::{
    ChatWidgetController, SCROLL_SETTLE_DELAY, TurnFuture, TurnOutcome, TurnStatus, Visibility,
};
pub use events::WidgetEvent;
pub use history::{ConversationHistory, ConversationTurn, DEFAULT_HISTORY_LIMIT, Role};
pub use message::{
    DisplayMessage, FALLBACK_MESSAGE, Sender, current_time_label, format_time_label,
};
pub use view::WidgetView;
