//! Background sweep of expired OTP entries
//!
//! Claims already evict stale entries they meet, so the sweeper only bounds
//! how long unclaimed codes linger in memory.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::config::SweeperConfig;
use super::otp_store::OtpStore;

/// Periodically removes expired entries from an [`OtpStore`]
pub struct OtpSweeper {
    store: Arc<OtpStore>,
    config: SweeperConfig,
}

impl OtpSweeper {
    pub fn new(store: Arc<OtpStore>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SweeperConfig {
        &self.config
    }

    /// Run a single sweep cycle
    pub fn run_sweep(&self) -> SweepResult {
        let removed = self.store.sweep();
        let remaining = self.store.size();

        if removed > 0 {
            info!(
                removed,
                remaining,
                event = "otp_sweep",
                "Swept expired OTP entries"
            );
        } else {
            debug!(remaining, "Sweep found nothing to remove");
        }

        SweepResult { removed, remaining }
    }

    /// Spawn the sweep loop on the tokio runtime.
    ///
    /// The loop stops when `shutdown` flips to `true` or its sender is
    /// dropped. Returns `None` without spawning when the sweeper is disabled.
    pub fn start_background_task(
        self: Arc<Self>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("OTP sweeper is disabled");
            return None;
        }

        let period = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        let handle = tokio::spawn(async move {
            info!(
                interval_seconds = period.as_secs(),
                "OTP sweeper started"
            );

            let mut ticker = tokio::time::interval(period);
            // first tick completes immediately
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.run_sweep();
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }

            info!("OTP sweeper stopped");
        });

        Some(handle)
    }
}

/// Result of one sweep cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepResult {
    /// Entries removed by this cycle
    pub removed: usize,
    /// Entries left in the store afterwards
    pub remaining: usize,
}

impl SweepResult {
    pub fn is_noop(&self) -> bool {
        self.removed == 0
    }
}
