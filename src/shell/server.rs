//! HTTP server lifecycle.
//!
//! [`serve`] binds the configured address and runs the router until the
//! process is terminated.

use tokio::net::TcpListener;
use tracing::info;

use crate::shell::config::{AppConfig, ConfigError};
use crate::shell::http::router;
use crate::shell::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("bind error: {0}")]
    Bind(String),

    #[error("serve error: {0}")]
    Serve(String),
}

/// # Errors
///
/// Returns an error if the address is invalid, the listener cannot bind,
/// or the server hits a fatal I/O error.
pub async fn serve(config: &AppConfig, state: AppState) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "activities API listening");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    Ok(())
}
