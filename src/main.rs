mod config;
mod error;
mod notion;
mod routes;
mod session;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env is normal in deployed environments.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::RelayConfig::from_env().expect("invalid relay configuration");
    if config.credentials.is_none() {
        tracing::warn!("NOTION_TOKEN or NOTION_DB_ID not set; every POST will fail until both are configured");
    }

    let notion =
        notion::NotionClient::new(config.pages_url(), config.connect_timeout).expect("HTTP client init failed");

    let port = config.port;
    let notion_url = config.notion_api_url.clone();
    let state = state::AppState::new(config, Arc::new(notion));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %notion_url, "pomodoro relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
