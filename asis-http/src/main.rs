use std::net::SocketAddr;
use std::sync::Arc;

use asis_http::{app, AppState};
use asis_synth::{DashboardConfig, SampleCache, SampleDataSynthesizer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = DashboardConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter)),
        )
        .init();

    if let Some(seed) = cfg.seed {
        info!(seed, "deterministic traffic sampling enabled");
    }

    let cache = Arc::new(SampleCache::new(SampleDataSynthesizer::new(), cfg.seed));
    let app = app(AppState { cache });

    let addr: SocketAddr = cfg.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "ASIS dashboard HTTP server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
