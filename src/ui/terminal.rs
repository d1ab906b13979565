//! Line-oriented terminal rendition of the widget.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crate::widget::{DisplayMessage, Sender, WidgetView};

const TYPING_LINE: &str = "  Bot is typing…";

/// Renders the widget's roles as lines on a writer (usually stdout).
///
/// While the panel is hidden, appended messages are held back and printed
/// when it is shown again, the way a collapsed message list keeps its
/// content.
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
    input: String,
    panel_visible: bool,
    toggle_visible: bool,
    input_focused: bool,
    send_enabled: bool,
    typing_visible: bool,
    held: Vec<String>,
    error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
            panel_visible: false,
            toggle_visible: false,
            input_focused: false,
            send_enabled: false,
            typing_visible: false,
            held: Vec::new(),
            error: None,
        }
    }

    /// Replace the text input's value, as typing would.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Print a host notice outside the message list.
    pub fn notice(&mut self, text: &str) {
        self.emit(format_args!("  ({text})"));
        self.flush();
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn is_send_enabled(&self) -> bool {
        self.send_enabled
    }

    pub fn is_typing_visible(&self) -> bool {
        self.typing_visible
    }

    /// First write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            self.error = Some(err);
        }
    }

    fn flush(&mut self) {
        if self.error.is_none() {
            if let Err(err) = self.out.flush() {
                self.error = Some(err);
            }
        }
    }

    fn format_message(message: &DisplayMessage) -> Vec<String> {
        let who = match message.sender {
            Sender::User => "You",
            Sender::Bot => "Bot",
        };
        let mut lines = vec![format!("[{}] {who}: {}", message.timestamp, message.text)];
        if let Some(sources) = message.sources_annotation() {
            lines.push(format!("    {sources}"));
        }
        lines
    }
}

impl<W: Write> WidgetView for TerminalView<W> {
    fn set_panel_visible(&mut self, visible: bool) {
        if self.panel_visible == visible {
            return;
        }
        self.panel_visible = visible;
        if visible {
            self.emit(format_args!("── chat opened ──"));
            for line in std::mem::take(&mut self.held) {
                self.emit(format_args!("{line}"));
            }
            if self.typing_visible {
                self.emit(format_args!("{TYPING_LINE}"));
            }
        } else {
            self.input_focused = false;
            self.emit(format_args!("── chat closed ──"));
        }
        self.flush();
    }

    fn set_toggle_visible(&mut self, visible: bool) {
        if self.toggle_visible == visible {
            return;
        }
        self.toggle_visible = visible;
        if visible {
            self.emit(format_args!("  (type /open to chat, /quit to exit)"));
            self.flush();
        }
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }

    fn append_message(&mut self, message: &DisplayMessage) {
        let lines = Self::format_message(message);
        if self.panel_visible {
            for line in lines {
                self.emit(format_args!("{line}"));
            }
        } else {
            self.held.extend(lines);
        }
    }

    fn set_typing_visible(&mut self, visible: bool) {
        if self.typing_visible == visible {
            return;
        }
        self.typing_visible = visible;
        if visible && self.panel_visible {
            self.emit(format_args!("{TYPING_LINE}"));
        }
    }

    fn scroll_to_latest(&mut self, _delay: Duration) {
        // A terminal has no layout to wait for; its scrollback follows output.
        self.flush();
    }
}
