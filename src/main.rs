#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::{ConfigError, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let result = run().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "folio exited with error");
    }
    result
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    tracing::info!(
        output = %leptos_options.output_name,
        site_root = %leptos_options.site_root,
        "leptos options loaded"
    );

    let app = routes::app(leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
