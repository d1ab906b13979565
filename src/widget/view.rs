//! UI roles the controller drives.

use std::time::Duration;

use super::message::DisplayMessage;

/// The host surface a [`ChatWidgetController`](super::ChatWidgetController)
/// is bound to.
///
/// Each method corresponds to one element role of the widget: toggle
/// button, panel, text input, send button, message list and typing
/// indicator. Implementations only render; all decisions are made by the
/// controller.
pub trait WidgetView {
    /// Show or hide the chat panel.
    fn set_panel_visible(&mut self, visible: bool);

    /// Show or hide the floating toggle button.
    fn set_toggle_visible(&mut self, visible: bool);

    /// Move keyboard focus to the text input.
    fn focus_input(&mut self);

    /// Current raw value of the text input.
    fn input_value(&self) -> String;

    fn clear_input(&mut self);

    /// Enable or disable the send button.
    fn set_send_enabled(&mut self, enabled: bool);

    /// Append a bubble to the message list.
    fn append_message(&mut self, message: &DisplayMessage);

    /// Show or hide the typing indicator.
    fn set_typing_visible(&mut self, visible: bool);

    /// Scroll the message list to its newest entry once `delay` has passed,
    /// giving layout time to settle.
    fn scroll_to_latest(&mut self, delay: Duration);
}
