mod config;
mod error;
mod extract;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let llm = llm::LlmClient::from_env().expect("invalid LLM configuration");
    tracing::info!(model = llm::Generate::model(&llm), url = llm.url(), "generation client initialized");

    let state = state::AppState::new(&config, Arc::new(llm));
    let app = routes::app(state, config.max_upload_bytes);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, upload_dir = %config.upload_dir.display(), "bookchat listening");
    axum::serve(listener, app).await.expect("server failed");
}
