use std::net::SocketAddr;
use std::sync::Arc;

use skyfare_api::{app, AppState, DataState};
use skyfare_core::StaticTranslations;
use skyfare_store::{app_config::Config, load_catalog, HttpDataSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skyfare_api=debug,skyfare_store=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Skyfare API on port {}", config.server.port);

    let source = HttpDataSource::new(&config.sources);

    // One attempt; a failure is served as-is until restart.
    let data = match load_catalog(&source).await {
        Ok(catalog) => DataState::Ready(Arc::new(catalog)),
        Err(e) => DataState::Failed(e.to_string()),
    };

    let app_state = AppState::new(data, StaticTranslations::hungarian(), config.view_settings());
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
