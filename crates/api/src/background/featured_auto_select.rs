//! Periodic featured-matches auto-select.
//!
//! Calls [`run_scheduled_auto_select`] on a fixed interval. The
//! `autoSelectEnabled` gate is checked on every tick, so toggling the setting
//! takes effect without a restart.

use std::time::Duration;

use matchday_core::featured::AutoSelectRun;
use sqlx::PgPool;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::auto_select::run_scheduled_auto_select;

/// Run the auto-select loop until `cancel` is triggered.
///
/// The first tick fires immediately. Failures are logged and the loop keeps
/// going.
pub async fn run(pool: PgPool, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Featured auto-select job started"
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Featured auto-select job stopping");
                break;
            }
            _ = ticker.tick() => {
                match run_scheduled_auto_select(&pool).await {
                    Ok(AutoSelectRun::Applied(count)) => {
                        tracing::info!(updated = count.updated, "Featured auto-select: applied");
                    }
                    Ok(AutoSelectRun::Skipped) => {
                        tracing::debug!("Featured auto-select: disabled, skipping");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Featured auto-select: run failed");
                    }
                }
            }
        }
    }
}
