use crate::legacy::trx_exchange;
use chrono::Utc;
use log::{debug, error, info, warn};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant};

/// Background task that closes TRX exchange orders whose payment window passed
pub struct ExpiryService {
    db_pool: Arc<PgPool>,
    sweep_interval: Duration,
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ExpiryService {
    pub fn new(db_pool: Arc<PgPool>, sweep_interval: Duration) -> Self {
        Self {
            db_pool,
            sweep_interval,
            stop_tx: None,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    // Start the background sweep
    pub async fn start(&mut self) -> anyhow::Result<()> {
        if self.stop_tx.is_some() {
            warn!("Expiry service is already running");
            return Ok(());
        }

        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
        self.stop_tx = Some(stop_tx);

        let db_pool = self.db_pool.clone();
        let sweep_interval = self.sweep_interval;

        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval(sweep_interval);
            let mut last_run = Instant::now();

            loop {
                select! {
                    _ = interval.tick() => {
                        debug!("Running expiry sweep (last run: {:.2?} ago)", last_run.elapsed());

                        if let Err(e) = Self::sweep(&db_pool).await {
                            error!("Error expiring TRX exchange orders: {}", e);
                        }

                        last_run = Instant::now();
                    }
                    _ = stop_rx.recv() => {
                        info!("Stopping expiry service");
                        break;
                    }
                }
            }
        }));

        info!(
            "Expiry service started (interval: {}s)",
            self.sweep_interval.as_secs()
        );
        Ok(())
    }

    // Stop the background sweep and wait for it to finish
    pub async fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(()).await;
            info!("Expiry service stop signal sent");
        }

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                error!("Expiry service task failed: {}", e);
            }
        }
    }

    /// Expire every overdue order once
    pub async fn sweep(db_pool: &PgPool) -> anyhow::Result<u64> {
        let now = Utc::now();

        let overdue = trx_exchange::get_overdue_orders(db_pool, now).await?;
        if overdue.is_empty() {
            return Ok(0);
        }
        let ids: Vec<i32> = overdue.iter().map(|order| order.id).collect();
        debug!("Overdue TRX exchange orders: {:?}", ids);

        let expired = trx_exchange::expire_overdue_orders(db_pool, now).await?;
        Ok(expired)
    }
}
