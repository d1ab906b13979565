//! Terminal chat widget
//!
//! Entry point: loads configuration, connects the widget to the chat
//! backend and drives it from stdin.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use rag_chat_widget::client::HttpChatBackend;
use rag_chat_widget::config::{LogFormat, WidgetConfig};
use rag_chat_widget::ui::{TerminalView, run_host};
use rag_chat_widget::widget::ChatWidgetController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = WidgetConfig::load().context("failed to load configuration")?;

    // Initialize tracing (M-LOG-STRUCTURED); stdout belongs to the widget
    init_tracing(config.logging.format);

    let api_url = &config.widget.api_url;
    let backend = match config.request_timeout() {
        Some(timeout) => HttpChatBackend::with_timeout(api_url, timeout),
        None => HttpChatBackend::new(api_url),
    }
    .context("failed to build chat backend client")?;

    info!(
        endpoint = %backend.endpoint(),
        history_limit = config.widget.history_limit,
        "chat widget starting"
    );

    let view = TerminalView::new(std::io::stdout());
    let mut widget =
        ChatWidgetController::with_history_limit(Arc::new(backend), view, config.widget.history_limit);

    let lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    if let Err(err) = run_host(&mut widget, lines).await {
        error!(error = %err, "chat widget error");
        return Err(err).context("chat widget stopped");
    }

    info!(turns = widget.history().len(), "chat widget stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}
