//! VedaVid Transliteration Server
//!
//! Serves the transliteration API on `0.0.0.0:5001` unless configured
//! otherwise (see `--help`). Refuses to start if vidyut-lipi cannot load.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vedavid_transliteration::{
    api::build_router, ScriptTable, ServerConfig, TransliterationEngine, TransliterationGateway,
    VidyutEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vedavid_transliteration=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting VedaVid transliteration server");

    let engine = match VidyutEngine::load() {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, "Vidyut library not available");
            return Err(e).context("cannot serve transliteration requests without vidyut-lipi");
        }
    };
    let engine: Arc<dyn TransliterationEngine> = Arc::new(engine);

    let scripts = Arc::new(ScriptTable::standard());
    let defaults = config.request_defaults();
    tracing::info!(
        vidyut_available = true,
        supported_scripts = scripts.len(),
        default_source = %defaults.source,
        default_target = %defaults.target,
        "Gateway ready"
    );

    let gateway = TransliterationGateway::new(scripts, Some(engine), defaults);
    let app = build_router(gateway);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind))?;
    tracing::info!("Listening on http://{}", config.bind);
    tracing::info!("  GET  /health         - Health check");
    tracing::info!("  GET  /scripts        - List supported scripts");
    tracing::info!("  GET  /scripts/:name  - Describe one script");
    tracing::info!("  POST /transliterate  - Transliterate text");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
