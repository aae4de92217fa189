//! Pull Scheduler
//!
//! Drives `KillmailPuller` on two timers: a short pull every poll interval
//! (starting immediately) and a long catch-up pull every long interval.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};

use lib_pool::PoolStore;

use crate::puller::KillmailPuller;

/// Run pulls until `shutdown` flips to true or its sender is dropped
pub async fn run_scheduler<S>(puller: Arc<KillmailPuller<S>>, mut shutdown: watch::Receiver<bool>)
where
    S: PoolStore + 'static,
{
    let config = puller.config();
    let mut short = interval(config.poll_interval());
    short.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let long_period = config.long_pull_interval();
    let mut long = interval_at(Instant::now() + long_period, long_period);
    long.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!(
        "Killmail scheduler started: short pull every {}s, long pull every {}s",
        config.poll_interval().as_secs(),
        long_period.as_secs()
    );

    loop {
        tokio::select! {
            _ = short.tick() => {
                if let Err(e) = puller.pull_recent().await {
                    tracing::warn!("Short killmail pull failed: {:#}", e);
                }
            }
            _ = long.tick() => {
                if let Err(e) = puller.pull_long().await {
                    tracing::warn!("Long killmail pull failed: {:#}", e);
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    tracing::info!("Killmail scheduler stopped");
}
