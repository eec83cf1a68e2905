//! Monitor loop
//!
//! ```text
//! ticker (POLL_INTERVAL_SECS) ──┐
//!                               ├──► refresh OrderBoard ──► log summary
//! Orders invalidations ─────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use bistro_client::{
    BistroClient, DateRange, FileSessionStorage, InvalidationRouter, OrderBoard, RefreshDecision,
    Session,
};
use shared::event::{QueryKey, RealtimeEvent};
use tokio::sync::mpsc;

use crate::config::MonitorConfig;
use crate::summary;

const SESSION_FILE: &str = "session.json";

pub struct Monitor {
    client: BistroClient,
    board: OrderBoard,
    orders_rx: mpsc::Receiver<Arc<RealtimeEvent>>,
}

impl Monitor {
    /// Restore or start a staff session and wire the invalidation router
    pub async fn connect(config: &MonitorConfig) -> anyhow::Result<Self> {
        let storage = FileSessionStorage::new(&config.work_dir, SESSION_FILE);
        let session = Session::new(Arc::new(storage));
        let client = BistroClient::new(&config.client_config(), session)
            .context("Failed to build backend client")?;

        ensure_session(&client, config).await?;

        let buffer = config.client_config().invalidation_buffer;
        let (router, mut invalidations) = InvalidationRouter::new(buffer);
        let orders_rx = invalidations
            .take(QueryKey::Orders)
            .context("Orders invalidation channel already taken")?;
        let source = client.events().subscribe()?;
        tokio::spawn(router.run(source));

        Ok(Self {
            client,
            board: OrderBoard::default(),
            orders_rx,
        })
    }

    pub fn client(&self) -> &BistroClient {
        &self.client
    }

    /// Run until Ctrl-C or the event channel closes
    pub async fn run(mut self, config: &MonitorConfig) -> anyhow::Result<()> {
        let mut ticker = tokio::time::interval(config.poll_interval);
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                event = self.orders_rx.recv() => match event {
                    Some(event) => tracing::debug!(event = event.name(), "Orders invalidated"),
                    None => {
                        tracing::info!("Invalidation channel closed");
                        break;
                    }
                },
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested");
                    break;
                }
            }

            if let Err(e) = self.refresh(config).await {
                tracing::warn!("Refresh failed: {:#}", e);
            }
        }

        if let Err(e) = self.client.logout().await {
            tracing::warn!(error = %e, "Logout failed");
        }
        Ok(())
    }

    async fn refresh(&mut self, config: &MonitorConfig) -> anyhow::Result<()> {
        ensure_session(&self.client, config).await?;

        let result = self
            .board
            .refresh(&self.client.orders(), DateRange::today())
            .await;
        let stats = match result {
            Ok(stats) => stats,
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Access rejected, logging in again");
                self.client.session().end();
                ensure_session(&self.client, config).await?;
                self.board
                    .refresh(&self.client.orders(), DateRange::today())
                    .await?
            }
            Err(e) => return Err(e.into()),
        };

        for line in summary::render(&stats) {
            tracing::info!("{}", line);
        }
        Ok(())
    }
}

/// Keep a usable session: refresh tokens when due, log in when there are none
async fn ensure_session(client: &BistroClient, config: &MonitorConfig) -> anyhow::Result<()> {
    if client.session().is_active() {
        match client.auth().check_and_refresh().await {
            Ok(RefreshDecision::Expired) => {}
            Ok(_) => {
                client.events().open();
                return Ok(());
            }
            Err(e) if !client.session().is_active() => {
                tracing::info!(error = %e, "Stored session rejected");
            }
            Err(e) => return Err(e.into()),
        }
    }

    anyhow::ensure!(
        config.has_credentials(),
        "MONITOR_USERNAME and MONITOR_PASSWORD are required to log in"
    );
    let account = client
        .login(&config.username, &config.password)
        .await
        .context("Login failed")?;
    tracing::info!(account = %account.name, role = ?account.role, "Logged in");
    Ok(())
}
