use std::sync::Arc;

use sift_local::DuckDuckGoProvider;
use sift_server::{router, AppState, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "sift_server=debug,sift_local=debug,tower_http=info".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        port = config.port,
        upstream = %config.upstream_endpoint,
        "sift starting"
    );

    let provider = DuckDuckGoProvider::new(
        config.upstream_endpoint.clone(),
        config.upstream_timeout,
        config.courtesy_delay,
    );
    let state = Arc::new(AppState {
        provider: Arc::new(provider),
    });

    let app = router(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
