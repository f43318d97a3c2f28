use dotenvy::dotenv;
use tracing::info;
use warden::logging::init_logging;
use warden::router::init_router;
use warden::state::init_app_state;
use warden_config::{JwtConfig, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let server_config = ServerConfig::from_env();
    let state = init_app_state(JwtConfig::from_env())?;
    info!(guards = state.gate.router().len(), "route guards registered");

    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");

    axum::serve(listener, app).await?;
    Ok(())
}
