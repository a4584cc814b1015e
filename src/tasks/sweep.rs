//! Expiry Sweep Task
//!
//! Optional background task that purges expired entries from both caches.
//! Expiry stays correct without it; the sweep only keeps `size` honest and
//! frees memory held by entries nobody reads again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;
use crate::routing::RoutingFilter;

/// Spawns a background task that periodically purges expired entries.
///
/// # Arguments
/// * `cache` - The shared tagged cache
/// * `routing` - Routing filter whose decision cache is swept as well
/// * `interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task<V>(
    cache: SharedCache<V>,
    routing: RoutingFilter,
    interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!("Starting expiry sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let entries = cache.write().await.purge_expired();
            let decisions = routing.cache().write().await.purge_expired();

            if entries > 0 || decisions > 0 {
                info!(entries, decisions, "expiry sweep removed stale entries");
            } else {
                debug!("expiry sweep: nothing to remove");
            }
        }
    })
}
