mod config;
mod db;
mod routes;
mod services;
mod state;

use services::drafts::DraftStore;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let drafts = match config.database_url.as_deref() {
        Some(url) => match db::init_pool(url, config.db_max_connections).await {
            Ok(pool) => {
                tracing::info!(max_connections = config.db_max_connections, "drafts stored in postgres");
                DraftStore::postgres(pool)
            }
            Err(e) => {
                tracing::error!(error = %e, "database init failed");
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set; drafts are kept in memory and lost on restart");
            DraftStore::memory()
        }
    };

    tracing::info!(backend = ?config.identity.backend, "identity provider configured");
    let state = state::AppState::new(drafts, config.identity);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = config.port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(port = config.port, "draftdesk listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}
