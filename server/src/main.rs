mod config;
mod routes;

use config::{ConfigError, ServerConfig};
use routes::proxy::ProxyState;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "taskboard failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let proxy = ProxyState::new(config.api_upstream.clone(), config.upstream_timeout)?;
    tracing::info!(
        upstream = proxy.upstream(),
        timeout_secs = config.upstream_timeout.as_secs(),
        "forwarding /api"
    );

    let app = routes::app(proxy).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "taskboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
