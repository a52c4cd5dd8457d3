//! Natal Fortune HTTP Server Binary
//!
//! This is the main entry point for the fortune REST API server. It
//! resolves configuration, wires the completion provider into the fortune
//! service, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! ANTHROPIC_API_KEY=sk-... cargo run --bin natal-server
//!
//! # Without a credential the server still runs, answering auto-mode
//! # requests with the chart only.
//! cargo run --bin natal-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `ANTHROPIC_API_KEY`: completion credential (optional)
//! - `FORTUNE_MODEL` / `FORTUNE_MAX_TOKENS`: completion overrides
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use natal_rust::config::Settings;
use natal_rust::http::{create_router, AppState};
use natal_rust::llm::{AnthropicClient, CompletionProvider};
use natal_rust::services::FortuneService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Natal Fortune HTTP Server");

    // Resolve configuration once; the credential is injected from here,
    // never read ad hoc.
    let settings = Settings::from_env();

    let provider: Option<Arc<dyn CompletionProvider>> = match &settings.api_key {
        Some(key) => {
            info!(model = %settings.model, "completion provider configured");
            Some(Arc::new(AnthropicClient::new(
                key.clone(),
                settings.model.clone(),
                settings.max_tokens,
            )))
        }
        None => {
            warn!("no ANTHROPIC_API_KEY set; running in chart-only mode");
            None
        }
    };

    let state = AppState::new(Arc::new(FortuneService::new(provider)));

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
