//! Background task that eagerly purges expired mappings.
//!
//! The read path already deletes expired rows lazily, but a mapping that is
//! never read again would otherwise sit in storage forever. The sweeper
//! bounds storage growth independent of read traffic.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::repositories::MappingRepository;

/// Runs the expiry sweep loop for the lifetime of the process.
///
/// Invokes `purge_expired` on every tick. A failed sweep is logged and the
/// loop keeps going; the next tick retries naturally. The task is only
/// stopped by aborting it at shutdown.
pub async fn run_sweeper<R>(repository: Arc<R>, period: Duration)
where
    R: MappingRepository + ?Sized,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick completes immediately; consume it so the first real
    // sweep happens one full period after startup.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        match repository.purge_expired().await {
            Ok(0) => {}
            Ok(removed) => info!(removed, "purged expired mappings"),
            Err(e) => warn!(error = %e, "expiry sweep failed, will retry on next tick"),
        }
    }
}
