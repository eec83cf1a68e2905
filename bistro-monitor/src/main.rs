use bistro_monitor::{Monitor, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv + logging
    let config = setup_environment();

    tracing::info!(backend = %config.backend_url, "Bistro monitor starting...");

    // 2. Session, login, order board
    let monitor = Monitor::connect(&config).await?;

    // 3. Poll + realtime loop until Ctrl-C
    if let Err(e) = monitor.run(&config).await {
        tracing::error!("Monitor error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
