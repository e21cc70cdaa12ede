use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use pedidos::application::services::OrderExtractionService;
use pedidos::infrastructure::observability::{TracingConfig, init_tracing};
use pedidos::infrastructure::spreadsheet::CalamineWorkbookReader;
use pedidos::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig::default();
    init_tracing(
        &TracingConfig::new(
            environment.as_str(),
            settings.logging.json || tracing_config.json_format,
        ),
        settings.server.port,
    )
    .context("Failed to initialize tracing")?;

    let extraction_service = Arc::new(OrderExtractionService::new(
        Arc::new(CalamineWorkbookReader),
        settings.extraction.to_rules(),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        extraction_service,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
