use actor_framework::tracing::setup_tracing;
use family_registry::config::AppConfig;
use family_registry::http;
use family_registry::lifecycle::FamilySystem;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing("info");

    let config = AppConfig::load()?;
    config.validate()?;
    let addr = config.server.socket_addr()?;

    let system = FamilySystem::new(&config.registry)?;
    let app = http::app(system.person_client.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Family registry listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
