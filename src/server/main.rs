use std::sync::Arc;

use broadside_session::config::Config;
use broadside_session::server::{create_session_route, ServerError, SessionCoordinator};
use tracing::info;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> Result<(), ServerError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("broadside_session=debug"));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .init();

    let config = Config::from_env()?;
    let coordinator = Arc::new(SessionCoordinator::new());
    let app = create_session_route(coordinator);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
