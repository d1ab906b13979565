//! Input events delivered to the controller.

/// A user interaction with one of the widget's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The floating toggle button was clicked.
    ToggleClicked,
    /// The panel's close button was clicked.
    CloseClicked,
    /// The send button was clicked.
    SendClicked,
    /// Enter was pressed in the text input.
    EnterPressed {
        /// Shift+Enter inserts a newline instead of sending.
        shift: bool,
    },
    /// The text input's value changed.
    InputChanged,
}
