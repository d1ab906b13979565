//! Line-driven host loop for the terminal widget.

use std::io::{self, Write};

use futures::stream::{FuturesUnordered, Stream, StreamExt};
use tracing::debug;

use crate::widget::{ChatWidgetController, Visibility, WidgetEvent};

use super::terminal::TerminalView;

/// What one line of terminal input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward a UI event unchanged.
    Event(WidgetEvent),
    /// Type this text into the input and press Enter.
    Send(String),
    /// Report the transcript length.
    History,
    /// Leave the host loop.
    Quit,
}

/// Parse one input line. Slash commands are matched after trimming;
/// everything else is sent verbatim.
pub fn parse_line(line: &str) -> Command {
    match line.trim() {
        "/open" => Command::Event(WidgetEvent::ToggleClicked),
        "/close" => Command::Event(WidgetEvent::CloseClicked),
        "/history" => Command::History,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Send(line.to_string()),
    }
}

/// Drive `widget` from `lines` until `/quit` or end of input.
///
/// Chat requests run concurrently with input handling, so the panel can be
/// opened and closed while an answer is pending. At end of input the loop
/// waits for outstanding turns to settle.
pub async fn run_host<W, S>(
    widget: &mut ChatWidgetController<TerminalView<W>>,
    mut lines: S,
) -> io::Result<()>
where
    W: Write,
    S: Stream<Item = io::Result<String>> + Unpin,
{
    let mut in_flight = FuturesUnordered::new();
    let mut input_open = true;

    loop {
        tokio::select! {
            Some(outcome) = in_flight.next(), if !in_flight.is_empty() => {
                widget.complete_turn(outcome);
            }
            line = lines.next(), if input_open => {
                let Some(line) = line else {
                    debug!(pending = in_flight.len(), "input closed");
                    input_open = false;
                    continue;
                };
                match parse_line(&line?) {
                    Command::Event(event) => {
                        if let Some(turn) = widget.handle_event(event) {
                            in_flight.push(turn);
                        }
                    }
                    Command::Send(text) => {
                        if widget.visibility() == Visibility::Closed {
                            widget.view_mut().notice("chat is closed, type /open");
                        } else {
                            widget.view_mut().set_input(text);
                            widget.handle_event(WidgetEvent::InputChanged);
                            let enter = WidgetEvent::EnterPressed { shift: false };
                            if let Some(turn) = widget.handle_event(enter) {
                                in_flight.push(turn);
                            }
                        }
                    }
                    Command::History => {
                        let history = widget.history();
                        let note =
                            format!("{} of {} turns in history", history.len(), history.limit());
                        widget.view_mut().notice(&note);
                    }
                    Command::Quit => break,
                }
            }
            else => break,
        }

        if let Some(err) = widget.view_mut().take_error() {
            return Err(err);
        }
    }

    Ok(())
}
