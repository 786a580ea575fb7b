use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use dnasb::shared::infrastructure::config::Config;
use dnasb::shell::bootstrap::build_state;
use dnasb::shell::http::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env().context("invalid configuration")?;
    let state = build_state(&config).context("failed to build the spam transformer")?;
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Spam to ham endpoint: http://{}/spam", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
