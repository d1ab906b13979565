//! Terminal host for the widget.
//!
//! [`TerminalView`] implements the widget's UI roles on a line-oriented
//! writer and [`run_host`] turns input lines into [`WidgetEvent`]s.
//!
//! [`WidgetEvent`]: crate::widget::WidgetEvent

mod host;
mod terminal;

pub use host::{Command, parse_line, run_host};
pub use terminal::TerminalView;
