use cafe_server::{AppState, Server, setup_environment};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. .env, configuration (SECRET_KEY is mandatory), logging
    let config = setup_environment().inspect_err(|e| {
        tracing::error!("Invalid configuration: {e}");
    })?;

    tracing::info!("Starting cafe-server (env: {})", config.environment);

    // 2. Store, CSRF guard, templates
    let state = AppState::initialize(&config).await.inspect_err(|e| {
        tracing::error!("Failed to initialize: {e}");
    })?;

    // 3. Serve until Ctrl-C
    Server::with_state(config, state).run().await?;

    Ok(())
}
