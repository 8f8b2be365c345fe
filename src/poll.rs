//! Fixed-interval snapshot refresher.
//!
//! Implements the surface's one concurrency pattern: a view-state value
//! re-fetched on a fixed timer. Each [`Snapshot`] owns an independent
//! background task - there is no cross-snapshot coordination, no request
//! deduplication, and no backoff. A failed refresh is logged and the
//! previous value stays visible until the next tick; dropping the
//! snapshot cancels its timer only.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::errors::Result;

/// A periodically refreshed value readable without blocking
#[derive(Debug)]
pub struct Snapshot<T> {
    rx: watch::Receiver<Arc<T>>,
    handle: JoinHandle<()>,
}

impl<T> Snapshot<T>
where
    T: Send + Sync + 'static,
{
    /// Starts the refresh timer with an initial value.
    ///
    /// `refresh` runs once per interval from the moment of construction;
    /// the initial value is served until the first tick completes.
    pub fn spawn<F, Fut>(initial: T, interval: Duration, refresh: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send,
    {
        let (tx, rx) = watch::channel(Arc::new(initial));

        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick fires immediately; skip it so construction
            // does not race the initial value
            timer.tick().await;

            loop {
                timer.tick().await;
                match refresh().await {
                    Ok(value) => {
                        let _ = tx.send(Arc::new(value));
                    }
                    Err(e) => {
                        // Stale data stays visible until the next tick
                        warn!("Snapshot refresh failed: {e}");
                    }
                }
            }
        });

        Self { rx, handle }
    }

    /// Returns the most recently refreshed value.
    #[must_use]
    pub fn latest(&self) -> Arc<T> {
        Arc::clone(&self.rx.borrow())
    }
}

impl<T> Drop for Snapshot<T> {
    fn drop(&mut self) {
        // Cancels the timer; an in-flight refresh future is dropped with
        // it, its store request is not awaited further
        self.handle.abort();
    }
}
