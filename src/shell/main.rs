use activities::shell::config::AppConfig;
use activities::shell::server::serve;
use activities::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;
    let state = AppState::seeded();

    serve(&config, state).await?;
    Ok(())
}
