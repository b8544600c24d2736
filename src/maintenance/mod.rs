use anyhow::{Context, Result};
use sqlx::PgPool;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

use crate::AppState;

const CLEANUP_INTERVAL_MINUTES: u64 = 15;

/// Periodically removes expired sessions so the table does not grow without bound.
pub fn spawn(state: AppState) {
    tokio::spawn(async move {
        let interval = Duration::from_secs(CLEANUP_INTERVAL_MINUTES * 60);
        loop {
            if let Err(err) = run_cleanup_cycle(state.pool_ref()).await {
                error!(?err, "session cleanup cycle failed");
            }
            sleep(interval).await;
        }
    });
}

async fn run_cleanup_cycle(pool: &PgPool) -> Result<()> {
    let removed = purge_expired_sessions(pool).await?;
    if removed > 0 {
        info!(removed, "expired sessions purged");
    }
    Ok(())
}

pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
        .execute(pool)
        .await
        .context("failed to delete expired sessions")?;
    Ok(result.rows_affected())
}
