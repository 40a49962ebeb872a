use platform_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment and configuration (dotenv, logging)
    let config = setup_environment();

    tracing::info!("Platform server starting...");

    // 2. State (work dir, database, migrations)
    let state = ServerState::initialize(&config).await.inspect_err(|e| {
        tracing::error!("Failed to initialize server state: {}", e);
    })?;

    // 3. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
