use tracing_subscriber::EnvFilter;

use previsit_generation::backend::Backend;
use previsit_generation::prompt::INSTRUCTION_VERSION;
use previsit_server::config::ServerConfig;
use previsit_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env file is fine; the process environment is authoritative.
    dotenvy::dotenv().ok();

    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!(
        provider = config.backend.provider().as_str(),
        model_id = config.backend.model_id(),
        credential = %config.backend.credential_hint(),
        instruction_version = INSTRUCTION_VERSION,
        timeout_secs = config.request_timeout.as_secs(),
        "starting pre-visit summarizer"
    );

    let backend = Backend::from_config(&config.backend).await?;
    let app = previsit_server::router(AppState::new(backend, config.request_timeout));

    if config.on_lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
